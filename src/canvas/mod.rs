//! Drawing surfaces a spline can be rendered onto.
//!
//! [`Canvas`] is the whole boundary between the geometry and the pixels: four
//! primitives plus a validity check. Implementations:
//! - [`RasterCanvas`]: an RGBA pixel buffer (feature `raster`)
//! - [`SvgCanvas`]: collects SVG elements
//! - [`RecordingCanvas`]: records every call, for tests and inspection

#[cfg(feature = "raster")]
mod raster;
mod recording;
mod svg;

#[cfg(feature = "raster")]
pub use raster::RasterCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
pub use svg::SvgCanvas;

use crate::primitives::Point2;

/// A mutable drawing surface.
///
/// Coordinates are in pixels with the origin at the top-left corner and y
/// growing downward. Later calls paint over earlier ones.
pub trait Canvas {
    /// Canvas-specific color handle obtained from [`allocate_color`](Self::allocate_color).
    type Color: Copy;

    /// Whether the canvas can be drawn on at all.
    fn is_valid(&self) -> bool {
        true
    }

    /// Resolves an RGB triple into a handle usable with the drawing calls.
    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Self::Color;

    /// Fills the polygon described by `points` (implicitly closed, even-odd rule).
    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Self::Color);

    /// Draws a straight line `thickness` pixels wide.
    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Self::Color, thickness: u32);

    /// Fills an axis-aligned ellipse with semi-axes `rx` and `ry`.
    fn fill_ellipse(&mut self, center: Point2<f64>, rx: u32, ry: u32, color: Self::Color);
}
