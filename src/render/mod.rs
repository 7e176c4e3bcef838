//! Raster renderers that mutate a [`RasterSurface`](crate::surface::RasterSurface) in place.

pub mod fill;
pub mod shape;
pub mod stroke;

pub use fill::{flood_fill, FillReport};
pub use shape::{preview_shape, ShapeKind, ShapeOutline};
pub use stroke::paint;
