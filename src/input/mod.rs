mod controls;
mod pointer;
pub mod script;

pub use controls::{ControlChange, ControlError, ControlKind, ControlResult};
pub use pointer::PointerEvent;
pub use script::{load_script, parse_script, ReplayScript, ScriptError, ScriptStep, StepAction};
