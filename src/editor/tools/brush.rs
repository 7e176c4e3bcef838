use super::Color;

pub const MIN_BRUSH_WIDTH: u8 = 1;
pub const MAX_BRUSH_WIDTH: u8 = u8::MAX;
pub const DEFAULT_BRUSH_WIDTH: u8 = 10;

/// Width, color and opacity read by every paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    color: Color,
    opacity: f32,
    width: u8,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 1.0,
            width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl BrushSettings {
    pub fn new(color: Color, width: u8, opacity: f32) -> Self {
        let mut settings = Self::default();
        settings.set_color(color);
        settings.set_width(width);
        settings.set_opacity(opacity);
        settings
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Half the width in pixels.
    pub fn radius(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: u8) {
        self.width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    /// Clamps to `[0, 1]`; NaN keeps the current value.
    pub fn set_opacity(&mut self, opacity: f32) {
        if opacity.is_nan() {
            return;
        }
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_defaults_match_canvas_defaults() {
        let brush = BrushSettings::default();
        assert_eq!(brush.width(), 10);
        assert_eq!(brush.color(), Color::BLACK);
        assert_eq!(brush.opacity(), 1.0);
        assert_eq!(brush.radius(), 5.0);
    }

    #[test]
    fn brush_setters_clamp_ranges() {
        let mut brush = BrushSettings::default();
        brush.set_width(0);
        assert_eq!(brush.width(), MIN_BRUSH_WIDTH);

        brush.set_opacity(1.7);
        assert_eq!(brush.opacity(), 1.0);
        brush.set_opacity(-0.2);
        assert_eq!(brush.opacity(), 0.0);
        brush.set_opacity(0.25);
        brush.set_opacity(f32::NAN);
        assert_eq!(brush.opacity(), 0.25);
    }
}
