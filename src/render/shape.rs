use crate::editor::tools::BrushSettings;
use crate::geometry::ToolPoint;
use crate::surface::RasterSurface;

use super::stroke::{paint_polyline, paint_ring};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(value))
    }
}

/// Outline computed from a drag anchor and the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeOutline {
    Circle {
        center: ToolPoint,
        radius: f32,
    },
    /// Axis-aligned box with its corner at `origin`, growing toward +x / +y.
    Rect {
        origin: ToolPoint,
        width: u32,
        height: u32,
    },
    /// Right triangle; the legs meet at the second vertex.
    Triangle {
        vertices: [ToolPoint; 3],
    },
}

impl ShapeOutline {
    pub fn from_drag(kind: ShapeKind, anchor: ToolPoint, current: ToolPoint) -> Self {
        let dx = abs_delta(anchor.x, current.x);
        let dy = abs_delta(anchor.y, current.y);
        match kind {
            ShapeKind::Circle => Self::Circle {
                center: anchor,
                radius: anchor.distance_to(current),
            },
            ShapeKind::Square => {
                let side = dx.max(dy);
                Self::Rect {
                    origin: anchor,
                    width: side,
                    height: side,
                }
            }
            ShapeKind::Rectangle => Self::Rect {
                origin: anchor,
                width: dx,
                height: dy,
            },
            ShapeKind::Triangle => Self::Triangle {
                vertices: [
                    anchor,
                    ToolPoint::new(anchor.x, current.y),
                    ToolPoint::new(current.x, current.y),
                ],
            },
        }
    }

    /// Corner points in drawing order; circles have none.
    pub fn vertices(&self) -> Vec<ToolPoint> {
        match *self {
            Self::Circle { .. } => Vec::new(),
            Self::Rect {
                origin,
                width,
                height,
            } => {
                let right = origin.x.saturating_add_unsigned(width);
                let bottom = origin.y.saturating_add_unsigned(height);
                vec![
                    origin,
                    ToolPoint::new(right, origin.y),
                    ToolPoint::new(right, bottom),
                    ToolPoint::new(origin.x, bottom),
                ]
            }
            Self::Triangle { vertices } => vertices.to_vec(),
        }
    }

    /// Strokes the outline with the brush and returns the pixels touched.
    pub fn stroke(&self, surface: &mut RasterSurface, brush: &BrushSettings) -> usize {
        match *self {
            Self::Circle { center, radius } => paint_ring(surface, center, radius, brush),
            Self::Rect { .. } | Self::Triangle { .. } => {
                paint_polyline(surface, &self.vertices(), true, brush)
            }
        }
    }
}

/// Clears `surface` and strokes the outline for the current drag position.
pub fn preview_shape(
    surface: &mut RasterSurface,
    anchor: ToolPoint,
    current: ToolPoint,
    kind: ShapeKind,
    brush: &BrushSettings,
) -> ShapeOutline {
    let outline = ShapeOutline::from_drag(kind, anchor, current);
    surface.clear();
    outline.stroke(surface, brush);
    outline
}

fn abs_delta(from: i32, to: i32) -> u32 {
    let delta = (i64::from(to) - i64::from(from)).unsigned_abs();
    u32::try_from(delta).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Rgba};

    fn thin_black_brush() -> BrushSettings {
        let mut brush = BrushSettings::default();
        brush.set_width(1);
        brush.set_color(Color::BLACK);
        brush.set_opacity(1.0);
        brush
    }

    const INK: Rgba = Rgba::new(0, 0, 0, 255);

    #[test]
    fn shape_kind_parses_case_insensitively() {
        assert_eq!(ShapeKind::parse("Circle"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::parse(" triangle "), Some(ShapeKind::Triangle));
        assert_eq!(ShapeKind::parse("hexagon"), None);
    }

    #[test]
    fn circle_is_centered_on_anchor_with_distance_radius() {
        let outline = ShapeOutline::from_drag(
            ShapeKind::Circle,
            ToolPoint::new(50, 50),
            ToolPoint::new(50, 60),
        );
        assert_eq!(
            outline,
            ShapeOutline::Circle {
                center: ToolPoint::new(50, 50),
                radius: 10.0
            }
        );
    }

    #[test]
    fn square_side_follows_larger_axis_delta() {
        let outline = ShapeOutline::from_drag(
            ShapeKind::Square,
            ToolPoint::new(10, 10),
            ToolPoint::new(10, 40),
        );
        assert_eq!(
            outline,
            ShapeOutline::Rect {
                origin: ToolPoint::new(10, 10),
                width: 30,
                height: 30
            }
        );
    }

    #[test]
    fn rectangle_uses_absolute_deltas() {
        let outline = ShapeOutline::from_drag(
            ShapeKind::Rectangle,
            ToolPoint::new(0, 0),
            ToolPoint::new(30, 20),
        );
        assert_eq!(
            outline,
            ShapeOutline::Rect {
                origin: ToolPoint::new(0, 0),
                width: 30,
                height: 20
            }
        );

        let reversed = ShapeOutline::from_drag(
            ShapeKind::Rectangle,
            ToolPoint::new(30, 20),
            ToolPoint::new(0, 0),
        );
        assert_eq!(
            reversed,
            ShapeOutline::Rect {
                origin: ToolPoint::new(30, 20),
                width: 30,
                height: 20
            }
        );
    }

    #[test]
    fn triangle_legs_meet_below_anchor() {
        let outline = ShapeOutline::from_drag(
            ShapeKind::Triangle,
            ToolPoint::new(0, 0),
            ToolPoint::new(40, 40),
        );
        assert_eq!(
            outline.vertices(),
            vec![
                ToolPoint::new(0, 0),
                ToolPoint::new(0, 40),
                ToolPoint::new(40, 40)
            ]
        );
    }

    #[test]
    fn preview_clears_previous_content() {
        let mut surface = RasterSurface::new(64, 64);
        surface.fill_with(Rgba::new(0, 255, 0, 255));

        preview_shape(
            &mut surface,
            ToolPoint::new(10, 10),
            ToolPoint::new(30, 20),
            ShapeKind::Rectangle,
            &thin_black_brush(),
        );

        assert_eq!(surface.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.pixel(10, 10), Some(INK));
        assert_eq!(surface.pixel(30, 20), Some(INK));
        assert_eq!(surface.pixel(20, 15), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.count_pixels(Rgba::new(0, 255, 0, 255)), 0);
    }

    #[test]
    fn square_preview_strokes_all_four_edges() {
        let mut surface = RasterSurface::new(64, 64);
        preview_shape(
            &mut surface,
            ToolPoint::new(10, 10),
            ToolPoint::new(10, 40),
            ShapeKind::Square,
            &thin_black_brush(),
        );

        for (x, y) in [(10, 10), (40, 10), (40, 40), (10, 40), (25, 10), (40, 25)] {
            assert_eq!(surface.pixel(x, y), Some(INK), "({x},{y}) should be inked");
        }
        assert_eq!(surface.pixel(25, 25), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.pixel(41, 25), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn zero_sized_rect_draws_a_dot() {
        let mut surface = RasterSurface::new(8, 8);
        let touched = ShapeOutline::from_drag(
            ShapeKind::Rectangle,
            ToolPoint::new(3, 3),
            ToolPoint::new(3, 3),
        )
        .stroke(&mut surface, &thin_black_brush());
        assert_eq!(touched, 1);
        assert_eq!(surface.pixel(3, 3), Some(INK));
    }
}
