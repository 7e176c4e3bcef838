//! Recorded pointer and control input that can be replayed against a session.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::controls::{ControlChange, ControlKind, ControlResult};
use super::pointer::PointerEvent;
use crate::geometry::ToolPoint;

pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read replay script: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse replay script")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    Tool { value: serde_json::Value },
    Shape { value: serde_json::Value },
    Width { value: serde_json::Value },
    Color { value: serde_json::Value },
    Opacity { value: serde_json::Value },
    Clear,
    Save {
        #[serde(default)]
        file_name: Option<String>,
    },
}

/// What one script step asks the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    Pointer(PointerEvent),
    Control(ControlResult<ControlChange>),
    Clear,
    Save(Option<String>),
}

impl ScriptStep {
    pub fn action(&self) -> StepAction {
        match self {
            Self::Down { x, y } => StepAction::Pointer(PointerEvent::Down(ToolPoint::new(*x, *y))),
            Self::Move { x, y } => StepAction::Pointer(PointerEvent::Move(ToolPoint::new(*x, *y))),
            Self::Up { x, y } => StepAction::Pointer(PointerEvent::Up(ToolPoint::new(*x, *y))),
            Self::Tool { value } => control(ControlKind::Tool, value),
            Self::Shape { value } => control(ControlKind::Shape, value),
            Self::Width { value } => control(ControlKind::BrushWidth, value),
            Self::Color { value } => control(ControlKind::BrushColor, value),
            Self::Opacity { value } => control(ControlKind::Opacity, value),
            Self::Clear => StepAction::Clear,
            Self::Save { file_name } => StepAction::Save(file_name.clone()),
        }
    }
}

/// Controls report strings; numbers written as JSON numbers parse the same way.
fn control(kind: ControlKind, value: &serde_json::Value) -> StepAction {
    let raw = match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    StepAction::Control(ControlChange::parse(kind, &raw))
}

pub fn parse_script(contents: &str) -> ScriptResult<ReplayScript> {
    Ok(serde_json::from_str(contents)?)
}

pub fn load_script(path: &Path) -> ScriptResult<ReplayScript> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents)
}
