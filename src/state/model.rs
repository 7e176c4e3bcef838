/// Lifecycle of one pointer gesture on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Stroking,
    Shaping,
}
