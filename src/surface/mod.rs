//! Raster surface owned by an editing session.

use image::RgbaImage;

use crate::geometry::{Color, ImageBounds, Rgba};

/// Largest surface, in pixels, a session will allocate (an 8192 x 8192 canvas).
pub const MAX_SURFACE_PIXELS: u64 = 8192 * 8192;

/// Whether a `width` x `height` surface stays within [`MAX_SURFACE_PIXELS`].
pub fn surface_fits(width: u32, height: u32) -> bool {
    u64::from(width) * u64::from(height) <= MAX_SURFACE_PIXELS
}

/// RGBA pixel grid that holds all rendered output.
///
/// Every accessor takes signed coordinates; anything off the grid reads as
/// `None` and writes are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Creates a fully transparent surface.
    ///
    /// Callers taking sizes from untrusted input check [`surface_fits`] first;
    /// the backing buffer is allocated eagerly.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn bounds(&self) -> ImageBounds {
        ImageBounds::new(self.image.width(), self.image.height())
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let (x, y) = self.bounds().index_of(x, y)?;
        Some(Rgba::from(*self.image.get_pixel(x, y)))
    }

    /// Overwrites one pixel. Returns `false` when the coordinate is off the grid.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        let Some((x, y)) = self.bounds().index_of(x, y) else {
            return false;
        };
        self.image.put_pixel(x, y, color.into());
        true
    }

    /// Source-over blend of `color` at `alpha` onto one pixel.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Some(dst) = self.pixel(x, y) else {
            return;
        };
        self.set_pixel(x, y, source_over(dst, color, alpha));
    }

    /// Destination-out: scales the pixel's alpha by `1 - strength`.
    pub fn erase_pixel(&mut self, x: i32, y: i32, strength: f32) {
        let strength = strength.clamp(0.0, 1.0);
        if strength <= 0.0 {
            return;
        }
        let Some(dst) = self.pixel(x, y) else {
            return;
        };
        let remaining = unit_to_u8(f32::from(dst.a) / 255.0 * (1.0 - strength));
        let erased = if remaining == 0 {
            Rgba::TRANSPARENT
        } else {
            Rgba::new(dst.r, dst.g, dst.b, remaining)
        };
        self.set_pixel(x, y, erased);
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.fill_with(Rgba::TRANSPARENT);
    }

    pub fn fill_with(&mut self, color: Rgba) {
        let pixel = image::Rgba::from(color);
        for target in self.image.pixels_mut() {
            *target = pixel;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.image.as_raw().iter().all(|channel| *channel == 0)
    }

    /// Number of pixels whose value equals `color` exactly.
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = image::Rgba::from(color);
        self.image.pixels().filter(|pixel| **pixel == target).count()
    }

    /// Composites `layer` over this surface with source-over blending.
    ///
    /// Layers of different sizes are aligned at the origin and clipped.
    pub fn composite_over(&mut self, layer: &RasterSurface) {
        let width = self.width().min(layer.width());
        let height = self.height().min(layer.height());
        for y in 0..height {
            for x in 0..width {
                let top = Rgba::from(*layer.image.get_pixel(x, y));
                if top.a == 0 {
                    continue;
                }
                let dst = Rgba::from(*self.image.get_pixel(x, y));
                let blended = source_over(
                    dst,
                    Color::new(top.r, top.g, top.b),
                    f32::from(top.a) / 255.0,
                );
                self.image.put_pixel(x, y, blended.into());
            }
        }
    }

    /// Grid bounds plus the row-major RGBA bytes, four per pixel.
    pub(crate) fn raw_parts_mut(&mut self) -> (ImageBounds, &mut [u8]) {
        let bounds = self.bounds();
        let raw: &mut [u8] = &mut self.image;
        (bounds, raw)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

fn source_over(dst: Rgba, color: Color, alpha: f32) -> Rgba {
    if alpha >= 1.0 {
        return color.opaque();
    }

    let dst_alpha = f32::from(dst.a) / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    if out_alpha <= f32::EPSILON {
        return Rgba::TRANSPARENT;
    }

    let mix = |src: u8, dst: u8| {
        let value =
            (f32::from(src) * alpha + f32::from(dst) * dst_alpha * (1.0 - alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba::new(
        mix(color.r, dst.r),
        mix(color.g, dst.g),
        mix(color.b, dst.b),
        unit_to_u8(out_alpha),
    )
}

fn unit_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
