use std::collections::HashSet;

use crate::editor::tools::BrushSettings;
use crate::geometry::{ImageBounds, ToolPoint};
use crate::surface::RasterSurface;

/// Smallest coverage radius; keeps width-1 strokes from dropping pixels.
const MIN_COVERAGE_RADIUS: f64 = 0.5;

/// Draws a round-capped segment from `from` to `to`.
///
/// With `erase` set the covered pixels lose alpha (destination-out) instead of
/// receiving the brush color. Coverage outside the surface is clipped.
/// Returns the number of pixels touched.
pub fn paint(
    surface: &mut RasterSurface,
    from: ToolPoint,
    to: ToolPoint,
    brush: &BrushSettings,
    erase: bool,
) -> usize {
    let mut coverage = Coverage::new(surface.bounds());
    coverage.mark_segment(from, to, brush.radius());
    coverage.apply(surface, brush, erase)
}

/// Strokes the edges of a polygon through consecutive `points`.
///
/// Every pixel is blended once even where edges overlap at the joints.
pub fn paint_polyline(
    surface: &mut RasterSurface,
    points: &[ToolPoint],
    closed: bool,
    brush: &BrushSettings,
) -> usize {
    let mut coverage = Coverage::new(surface.bounds());
    let radius = brush.radius();
    match points {
        [] => return 0,
        [single] => coverage.mark_segment(*single, *single, radius),
        _ => {
            for pair in points.windows(2) {
                coverage.mark_segment(pair[0], pair[1], radius);
            }
            if closed {
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    coverage.mark_segment(*last, *first, radius);
                }
            }
        }
    }
    coverage.apply(surface, brush, false)
}

/// Strokes a circle outline centered at `center`.
pub fn paint_ring(
    surface: &mut RasterSurface,
    center: ToolPoint,
    radius: f32,
    brush: &BrushSettings,
) -> usize {
    let mut coverage = Coverage::new(surface.bounds());
    coverage.mark_ring(center, f64::from(radius), brush.radius());
    coverage.apply(surface, brush, false)
}

/// Set of pixels covered by one stroke, blended in a single pass.
struct Coverage {
    bounds: ImageBounds,
    pixels: HashSet<(u32, u32)>,
}

impl Coverage {
    fn new(bounds: ImageBounds) -> Self {
        Self {
            bounds,
            pixels: HashSet::new(),
        }
    }

    fn mark_segment(&mut self, from: ToolPoint, to: ToolPoint, radius: f64) {
        let radius = radius.max(MIN_COVERAGE_RADIUS);
        let (ax, ay) = (f64::from(from.x), f64::from(from.y));
        let (bx, by) = (f64::from(to.x), f64::from(to.y));
        let limit = radius * radius + f64::EPSILON;

        self.scan(
            ax.min(bx) - radius,
            ay.min(by) - radius,
            ax.max(bx) + radius,
            ay.max(by) + radius,
            |px, py| distance_sq_to_segment(px, py, ax, ay, bx, by) <= limit,
        );
    }

    fn mark_ring(&mut self, center: ToolPoint, radius: f64, half_width: f64) {
        let half_width = half_width.max(MIN_COVERAGE_RADIUS);
        let (cx, cy) = (f64::from(center.x), f64::from(center.y));
        let reach = radius + half_width;

        self.scan(cx - reach, cy - reach, cx + reach, cy + reach, |px, py| {
            let distance = (px - cx).hypot(py - cy);
            (distance - radius).abs() <= half_width + f64::EPSILON
        });
    }

    fn scan(
        &mut self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        covers: impl Fn(f64, f64) -> bool,
    ) {
        let Some((x0, x1)) = clip_span(min_x, max_x, self.bounds.width) else {
            return;
        };
        let Some((y0, y1)) = clip_span(min_y, max_y, self.bounds.height) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                if covers(f64::from(x), f64::from(y)) {
                    self.pixels.insert((x, y));
                }
            }
        }
    }

    fn apply(self, surface: &mut RasterSurface, brush: &BrushSettings, erase: bool) -> usize {
        let opacity = brush.opacity();
        let color = brush.color();
        for &(x, y) in &self.pixels {
            // Coordinates come from clipped spans, so they always fit i32 grids.
            let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                continue;
            };
            if erase {
                surface.erase_pixel(x, y, opacity);
            } else {
                surface.blend_pixel(x, y, color, opacity);
            }
        }
        self.pixels.len()
    }
}

fn clip_span(min: f64, max: f64, extent: u32) -> Option<(u32, u32)> {
    if extent == 0 || !min.is_finite() || !max.is_finite() {
        return None;
    }
    let last = f64::from(extent - 1);
    let start = min.ceil().max(0.0);
    let end = max.floor().min(last);
    if start > end {
        return None;
    }
    Some((start as u32, end as u32))
}

fn distance_sq_to_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (dx, dy) = (bx - ax, by - ay);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (nx, ny) = (ax + t * dx - px, ay + t * dy - py);
    nx * nx + ny * ny
}
