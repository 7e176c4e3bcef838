mod brush;

pub use crate::geometry::{Color, ImageBounds, Rgba, ToolPoint};
pub use crate::render::ShapeKind;
pub use brush::{BrushSettings, DEFAULT_BRUSH_WIDTH, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

/// The single active tool. Only one variant can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Freehand,
    Eraser,
    Fill,
    Shape(ShapeKind),
}

impl ToolMode {
    pub const fn is_shape(self) -> bool {
        matches!(self, Self::Shape(_))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Freehand => "brush",
            Self::Eraser => "eraser",
            Self::Fill => "fill",
            Self::Shape(kind) => kind.name(),
        }
    }

    /// Parses the tool selector values; shapes have their own selector.
    pub fn parse_tool(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "brush" | "pen" | "freehand" => Some(Self::Freehand),
            "eraser" => Some(Self::Eraser),
            "fill" => Some(Self::Fill),
            _ => None,
        }
    }
}

/// Active tool plus the brush settings shared by every tool.
#[derive(Debug, Clone)]
pub struct EditorTools {
    mode: ToolMode,
    brush_mode: ToolMode,
    brush: BrushSettings,
}

impl Default for EditorTools {
    fn default() -> Self {
        Self::new(BrushSettings::default())
    }
}

impl EditorTools {
    pub fn new(brush: BrushSettings) -> Self {
        Self {
            mode: ToolMode::Freehand,
            brush_mode: ToolMode::Freehand,
            brush,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Tool restored once a shape gesture commits.
    pub fn brush_mode(&self) -> ToolMode {
        self.brush_mode
    }

    pub fn select_mode(&mut self, mode: ToolMode) {
        if !mode.is_shape() {
            self.brush_mode = mode;
        }
        if self.mode != mode {
            tracing::debug!(from = self.mode.name(), to = mode.name(), "tool mode changed");
        }
        self.mode = mode;
    }

    /// Shapes are one-shot: after commit the previous brush tool comes back.
    pub fn finish_shape(&mut self) {
        if self.mode.is_shape() {
            self.select_mode(self.brush_mode);
        }
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.set_color(color);
    }

    pub fn set_brush_width(&mut self, width: u8) {
        self.brush.set_width(width);
    }

    pub fn set_brush_opacity(&mut self, opacity: f32) {
        self.brush.set_opacity(opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tool_accepts_selector_values() {
        assert_eq!(ToolMode::parse_tool("brush"), Some(ToolMode::Freehand));
        assert_eq!(ToolMode::parse_tool("Eraser"), Some(ToolMode::Eraser));
        assert_eq!(ToolMode::parse_tool(" fill "), Some(ToolMode::Fill));
        assert_eq!(ToolMode::parse_tool("circle"), None);
        assert_eq!(ToolMode::parse_tool("lasso"), None);
    }

    #[test]
    fn selecting_a_mode_replaces_the_previous_one() {
        let mut tools = EditorTools::default();
        assert_eq!(tools.mode(), ToolMode::Freehand);

        tools.select_mode(ToolMode::Eraser);
        assert_eq!(tools.mode(), ToolMode::Eraser);

        tools.select_mode(ToolMode::Fill);
        assert_eq!(tools.mode(), ToolMode::Fill);
        assert_ne!(tools.mode(), ToolMode::Eraser);
    }

    #[test]
    fn finish_shape_restores_last_brush_tool() {
        let mut tools = EditorTools::default();
        tools.select_mode(ToolMode::Eraser);
        tools.select_mode(ToolMode::Shape(ShapeKind::Circle));
        tools.select_mode(ToolMode::Shape(ShapeKind::Square));
        assert_eq!(tools.brush_mode(), ToolMode::Eraser);

        tools.finish_shape();
        assert_eq!(tools.mode(), ToolMode::Eraser);

        tools.finish_shape();
        assert_eq!(tools.mode(), ToolMode::Eraser);
    }

    #[test]
    fn brush_changes_do_not_touch_mode() {
        let mut tools = EditorTools::default();
        tools.select_mode(ToolMode::Fill);
        tools.set_brush_color(Color::new(1, 2, 3));
        tools.set_brush_width(4);
        tools.set_brush_opacity(0.5);

        assert_eq!(tools.mode(), ToolMode::Fill);
        assert_eq!(tools.brush().color(), Color::new(1, 2, 3));
        assert_eq!(tools.brush().width(), 4);
        assert_eq!(tools.brush().opacity(), 0.5);
    }
}
