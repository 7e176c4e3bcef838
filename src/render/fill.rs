use crate::geometry::{ImageBounds, Rgba, ToolPoint};
use crate::surface::RasterSurface;

const CHANNELS: usize = 4;

/// Outcome of one flood fill pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Color found under the seed, `None` when the seed was off the surface.
    pub target: Option<Rgba>,
    pub filled: usize,
}

/// Replaces every pixel 4-connected to `seed` that exactly matches the seed
/// color with `fill`.
///
/// Neighbors are pushed without checking bounds; off-grid coordinates are
/// skipped when popped. Filling with the color already under the seed is a
/// no-op.
pub fn flood_fill(surface: &mut RasterSurface, seed: ToolPoint, fill: Rgba) -> FillReport {
    let (bounds, pixels) = surface.raw_parts_mut();
    let Some(target) = read_pixel(pixels, bounds, seed.x, seed.y) else {
        tracing::debug!(x = seed.x, y = seed.y, "flood fill seed outside surface");
        return FillReport::default();
    };

    let mut report = FillReport {
        target: Some(target),
        filled: 0,
    };
    if target == fill {
        return report;
    }

    let mut stack = vec![(seed.x, seed.y)];
    while let Some((x, y)) = stack.pop() {
        let Some(offset) = pixel_offset(bounds, x, y) else {
            continue;
        };
        if pixel_at(pixels, offset) != target {
            continue;
        }

        pixels[offset..offset + CHANNELS].copy_from_slice(&fill.channels());
        report.filled += 1;

        stack.push((x.saturating_add(1), y));
        stack.push((x.saturating_sub(1), y));
        stack.push((x, y.saturating_add(1)));
        stack.push((x, y.saturating_sub(1)));
    }

    tracing::debug!(
        x = seed.x,
        y = seed.y,
        filled = report.filled,
        "flood fill complete"
    );
    report
}

fn pixel_offset(bounds: ImageBounds, x: i32, y: i32) -> Option<usize> {
    let (x, y) = bounds.index_of(x, y)?;
    let width = usize::try_from(bounds.width).ok()?;
    let index = usize::try_from(y)
        .ok()?
        .checked_mul(width)?
        .checked_add(usize::try_from(x).ok()?)?;
    index.checked_mul(CHANNELS)
}

fn pixel_at(pixels: &[u8], offset: usize) -> Rgba {
    Rgba::new(
        pixels[offset],
        pixels[offset + 1],
        pixels[offset + 2],
        pixels[offset + 3],
    )
}

fn read_pixel(pixels: &[u8], bounds: ImageBounds, x: i32, y: i32) -> Option<Rgba> {
    pixel_offset(bounds, x, y).map(|offset| pixel_at(pixels, offset))
}
