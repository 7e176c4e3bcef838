//! Editing session: one raster surface, the active tool and the gesture in progress.

mod replay;
pub mod tools;

use std::path::PathBuf;

use crate::config::{AppConfig, PreviewPolicy};
use crate::geometry::ToolPoint;
use crate::input::{ControlChange, PointerEvent};
use crate::render::{flood_fill, paint, preview_shape, FillReport, ShapeOutline};
use crate::state::{GestureEvent, GestureMachine, GesturePhase, PhaseTransition, StateResult};
use crate::storage::{DrawingStorage, StorageResult};
use crate::surface::RasterSurface;

pub use replay::{replay, ReplayReport};
pub use tools::{BrushSettings, EditorTools, ShapeKind, ToolMode};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionOptions {
    pub preview_policy: PreviewPolicy,
    pub brush: BrushSettings,
}

impl SessionOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            preview_policy: config.preview_policy,
            brush: config.brush_settings(),
        }
    }
}

/// Working state of the gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ActiveGesture {
    Stroke { last: ToolPoint, erase: bool },
    Shape { kind: ShapeKind, anchor: ToolPoint },
}

#[derive(Debug)]
pub struct EditorSession {
    surface: RasterSurface,
    preview_layer: RasterSurface,
    tools: EditorTools,
    gestures: GestureMachine,
    active: Option<ActiveGesture>,
    preview_policy: PreviewPolicy,
}

impl EditorSession {
    pub fn new(width: u32, height: u32, options: SessionOptions) -> Self {
        tracing::debug!(
            width,
            height,
            policy = ?options.preview_policy,
            "editor session created"
        );
        Self {
            surface: RasterSurface::new(width, height),
            preview_layer: RasterSurface::new(width, height),
            tools: EditorTools::new(options.brush),
            gestures: GestureMachine::new(),
            active: None,
            preview_policy: options.preview_policy,
        }
    }

    /// Committed drawing.
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Live shape preview; always blank under [`PreviewPolicy::ClearSurface`].
    pub fn preview_layer(&self) -> &RasterSurface {
        &self.preview_layer
    }

    /// What the user sees: the drawing with the preview layer on top.
    pub fn composited(&self) -> RasterSurface {
        let mut composed = self.surface.clone();
        composed.composite_over(&self.preview_layer);
        composed
    }

    pub fn tools(&self) -> &EditorTools {
        &self.tools
    }

    pub fn mode(&self) -> ToolMode {
        self.tools.mode()
    }

    pub fn brush(&self) -> &BrushSettings {
        self.tools.brush()
    }

    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    pub fn gesture_history(&self) -> &[PhaseTransition] {
        self.gestures.history()
    }

    pub fn select_mode(&mut self, mode: ToolMode) {
        self.tools.select_mode(mode);
    }

    pub fn apply(&mut self, change: ControlChange) {
        match change {
            ControlChange::Mode(mode) => self.tools.select_mode(mode),
            ControlChange::BrushWidth(width) => self.tools.set_brush_width(width),
            ControlChange::BrushColor(color) => self.tools.set_brush_color(color),
            ControlChange::Opacity(opacity) => self.tools.set_brush_opacity(opacity),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> StateResult<GesturePhase> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up(point) => self.pointer_up(point),
        }
    }

    pub fn pointer_down(&mut self, point: ToolPoint) -> StateResult<GesturePhase> {
        match self.tools.mode() {
            ToolMode::Fill => {
                let phase = self.gestures.transition(GestureEvent::ApplyFill)?;
                self.fill_at(point);
                Ok(phase)
            }
            ToolMode::Shape(kind) => {
                let phase = self.gestures.transition(GestureEvent::BeginShape)?;
                self.active = Some(ActiveGesture::Shape {
                    kind,
                    anchor: point,
                });
                Ok(phase)
            }
            mode @ (ToolMode::Freehand | ToolMode::Eraser) => {
                let phase = self.gestures.transition(GestureEvent::BeginStroke)?;
                let erase = mode == ToolMode::Eraser;
                paint(&mut self.surface, point, point, self.tools.brush(), erase);
                self.active = Some(ActiveGesture::Stroke { last: point, erase });
                Ok(phase)
            }
        }
    }

    /// Moves without a pressed pointer are ignored.
    pub fn pointer_move(&mut self, point: ToolPoint) -> StateResult<GesturePhase> {
        let Some(active) = self.active else {
            return Ok(self.gestures.phase());
        };
        let phase = self.gestures.transition(GestureEvent::Move)?;

        match active {
            ActiveGesture::Stroke { last, erase } => {
                paint(&mut self.surface, last, point, self.tools.brush(), erase);
                self.active = Some(ActiveGesture::Stroke { last: point, erase });
            }
            ActiveGesture::Shape { kind, anchor } => {
                let target = match self.preview_policy {
                    PreviewPolicy::Overlay => &mut self.preview_layer,
                    PreviewPolicy::ClearSurface => &mut self.surface,
                };
                preview_shape(target, anchor, point, kind, self.tools.brush());
            }
        }
        Ok(phase)
    }

    /// Ends the gesture; a shape commits at the release position.
    pub fn pointer_up(&mut self, point: ToolPoint) -> StateResult<GesturePhase> {
        let Some(active) = self.active else {
            return Ok(self.gestures.phase());
        };
        let phase = self.gestures.transition(GestureEvent::End)?;
        self.active = None;

        if let ActiveGesture::Shape { kind, anchor } = active {
            let outline = match self.preview_policy {
                PreviewPolicy::Overlay => {
                    self.preview_layer.clear();
                    let outline = ShapeOutline::from_drag(kind, anchor, point);
                    outline.stroke(&mut self.surface, self.tools.brush());
                    outline
                }
                PreviewPolicy::ClearSurface => {
                    preview_shape(&mut self.surface, anchor, point, kind, self.tools.brush())
                }
            };
            tracing::debug!(shape = kind.name(), ?outline, "shape committed");
            self.tools.finish_shape();
        }
        Ok(phase)
    }

    fn fill_at(&mut self, point: ToolPoint) -> FillReport {
        let fill = self.tools.brush().color().opaque();
        flood_fill(&mut self.surface, point, fill)
    }

    /// Resets the drawing and any preview to transparent.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.preview_layer.clear();
        tracing::debug!("canvas cleared");
    }

    /// Saves what is currently visible.
    pub fn save<S: DrawingStorage>(&self, storage: &S, file_name: &str) -> StorageResult<PathBuf> {
        storage.save_drawing(&self.composited(), file_name)
    }
}
