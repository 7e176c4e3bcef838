use thiserror::Error;

use crate::editor::tools::{Color, ShapeKind, ToolMode, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

pub type ControlResult<T> = std::result::Result<T, ControlError>;

/// Raw control value rejected before it reaches any pixel operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("invalid color {0:?}; expected #RRGGBB or #RGB")]
    InvalidColor(String),
    #[error("invalid brush width {0:?}; expected a positive number")]
    InvalidWidth(String),
    #[error("invalid opacity {0:?}; expected a number between 0 and 1")]
    InvalidOpacity(String),
    #[error("unknown tool {0:?}")]
    UnknownTool(String),
    #[error("unknown shape {0:?}")]
    UnknownShape(String),
}

/// Which external control produced a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Tool,
    Shape,
    BrushWidth,
    BrushColor,
    Opacity,
}

/// A validated settings change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlChange {
    Mode(ToolMode),
    BrushWidth(u8),
    BrushColor(Color),
    Opacity(f32),
}

impl ControlChange {
    pub fn parse(kind: ControlKind, raw: &str) -> ControlResult<Self> {
        match kind {
            ControlKind::Tool => ToolMode::parse_tool(raw)
                .map(Self::Mode)
                .ok_or_else(|| ControlError::UnknownTool(raw.to_string())),
            ControlKind::Shape => ShapeKind::parse(raw)
                .map(|kind| Self::Mode(ToolMode::Shape(kind)))
                .ok_or_else(|| ControlError::UnknownShape(raw.to_string())),
            ControlKind::BrushWidth => parse_width(raw).map(Self::BrushWidth),
            ControlKind::BrushColor => Color::from_hex(raw)
                .map(Self::BrushColor)
                .ok_or_else(|| ControlError::InvalidColor(raw.to_string())),
            ControlKind::Opacity => parse_opacity(raw).map(Self::Opacity),
        }
    }
}

/// Range inputs report fractional strings; widths round to whole pixels.
fn parse_width(raw: &str) -> ControlResult<u8> {
    let invalid = || ControlError::InvalidWidth(raw.to_string());
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    let rounded = value.round();
    if rounded < f64::from(MIN_BRUSH_WIDTH) {
        return Err(invalid());
    }
    Ok(rounded.min(f64::from(MAX_BRUSH_WIDTH)) as u8)
}

fn parse_opacity(raw: &str) -> ControlResult<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ControlError::InvalidOpacity(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ControlError::InvalidOpacity(raw.to_string()));
    }
    Ok(value.clamp(0.0, 1.0))
}
