use super::model::GesturePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    BeginStroke,
    BeginShape,
    ApplyFill,
    Move,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: GesturePhase,
    pub event: GestureEvent,
    pub to: GesturePhase,
}

impl PhaseTransition {
    pub const fn new(from: GesturePhase, event: GestureEvent, to: GesturePhase) -> Self {
        Self { from, event, to }
    }
}
