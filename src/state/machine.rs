use super::error::{StateError, StateResult};
use super::{GestureEvent, GesturePhase, PhaseTransition};

#[derive(Debug)]
pub struct GestureMachine {
    phase: GesturePhase,
    transition_history: Vec<PhaseTransition>,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn next_phase(&self, event: GestureEvent) -> Option<GesturePhase> {
        use GestureEvent::*;
        match (self.phase, event) {
            (GesturePhase::Idle, BeginStroke) => Some(GesturePhase::Stroking),
            (GesturePhase::Idle, BeginShape) => Some(GesturePhase::Shaping),
            (GesturePhase::Idle, ApplyFill) => Some(GesturePhase::Idle),
            (GesturePhase::Stroking, Move) => Some(GesturePhase::Stroking),
            (GesturePhase::Shaping, Move) => Some(GesturePhase::Shaping),
            (GesturePhase::Stroking, End) => Some(GesturePhase::Idle),
            (GesturePhase::Shaping, End) => Some(GesturePhase::Idle),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: GestureEvent) -> StateResult<GesturePhase> {
        tracing::debug!(from = ?self.phase, event = ?event, "request gesture transition");
        let next = self.next_phase(event).ok_or_else(|| {
            let from = self.phase;
            tracing::warn!(from = ?from, event = ?event, "invalid gesture transition requested");
            StateError::InvalidTransition { from, event }
        })?;

        // Moves are too frequent to keep; only phase boundaries are recorded.
        if event != GestureEvent::Move {
            self.transition_history
                .push(PhaseTransition::new(self.phase, event, next));
        }
        self.phase = next;

        Ok(self.phase)
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.transition_history
    }
}

#[cfg(test)]
impl GestureMachine {
    fn can_transition(&self, event: GestureEvent) -> bool {
        self.next_phase(event).is_some()
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GestureMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GesturePhase::{:?}", self.phase)
    }
}
