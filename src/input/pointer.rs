use crate::geometry::ToolPoint;

/// Pointer input in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(ToolPoint),
    Move(ToolPoint),
    Up(ToolPoint),
}
