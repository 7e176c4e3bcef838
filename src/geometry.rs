/// Shared geometric and color primitives used across the editor and renderers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPoint {
    pub x: i32,
    pub y: i32,
}

impl ToolPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: ToolPoint) -> f32 {
        let dx = (i64::from(other.x) - i64::from(self.x)) as f32;
        let dy = (i64::from(other.y) - i64::from(self.y)) as f32;
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBounds {
    pub width: u32,
    pub height: u32,
}

impl ImageBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts signed coordinates to unsigned ones when they land on the grid.
    pub fn index_of(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn opaque(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, u8::MAX)
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand; the leading `#` is optional.
    pub fn from_hex(value: &str) -> Option<Color> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let expand = |index: usize| {
                    let digit = u8::from_str_radix(&hex[index..index + 1], 16).ok()?;
                    Some(digit * 0x11)
                };
                Some(Color::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => {
                let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
                Some(Color::new(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single pixel value. Equality is exact on all four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_channels(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_channels(pixel.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(pixel: Rgba) -> Self {
        image::Rgba(pixel.channels())
    }
}
