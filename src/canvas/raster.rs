//! Pixel-buffer canvas backed by [`image::RgbaImage`].

use super::Canvas;
use crate::color::Color;
use crate::polygon::{polygon_bounding_box, scanline_crossings, stroke_quads};
use crate::primitives::Point2;
use image::{ImageResult, Rgba, RgbaImage};
use std::path::Path;

/// An opaque RGBA raster.
///
/// Polygons are filled by even-odd scanlines sampled at pixel centers, so
/// a pixel is painted when its center lies inside the shape. Nothing is
/// anti-aliased. Drawing outside the image is clipped silently.
///
/// ```
/// use curvum::canvas::{Canvas, RasterCanvas};
/// use curvum::{Color, Point2};
///
/// let mut canvas = RasterCanvas::filled(20, 20, Color::BLACK);
/// let white = canvas.allocate_color(255, 255, 255);
/// canvas.fill_ellipse(Point2::new(10.0, 10.0), 4, 4, white);
/// assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
/// assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// A transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// A canvas filled with an opaque color.
    pub fn filled(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, opaque(background)),
        }
    }

    /// Wraps an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Returns the color at `(x, y)`, or `None` outside the image or on a
    /// pixel that was never painted.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        (a > 0).then_some(Color::rgb(r, g, b))
    }

    /// Fills the inclusive pixel rectangle `(x0, y0)..=(x1, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.fill_span(y, x0.min(x1), x0.max(x1), color);
        }
    }

    /// Writes the image to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        log::debug!(
            "saving {}x{} raster to {}",
            self.width(),
            self.height(),
            path.as_ref().display()
        );
        self.image.save(path)
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height()) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn fill_span(&mut self, y: i64, x0: i64, x1: i64, color: Rgba<u8>) {
        if y < 0 || y >= i64::from(self.height()) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width()) - 1);
        for x in x0..=x1 {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn draw_hairline(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgba<u8>) {
        let (x0, y0) = (from.x.round(), from.y.round());
        let (x1, y1) = (to.x.round(), to.y.round());
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if !steps.is_finite() {
            return;
        }
        if steps < 1.0 {
            self.plot(x0 as i64, y0 as i64, color);
            return;
        }

        let n = steps as i64;
        let (dx, dy) = ((x1 - x0) / steps, (y1 - y0) / steps);
        for i in 0..=n {
            let t = i as f64;
            self.plot((x0 + dx * t).round() as i64, (y0 + dy * t).round() as i64, color);
        }
    }
}

fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

impl Canvas for RasterCanvas {
    type Color = Rgba<u8>;

    fn is_valid(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Rgba<u8> {
        opaque(Color::rgb(r, g, b))
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Rgba<u8>) {
        if !points.iter().all(|p| p.is_finite()) {
            return;
        }
        let Some((min, max)) = polygon_bounding_box(points) else {
            return;
        };

        let top = (min.y - 0.5).ceil().max(0.0) as i64;
        let bottom = (max.y - 0.5).floor().min(f64::from(self.height()) - 1.0) as i64;

        for y in top..=bottom {
            let center = y as f64 + 0.5;
            let crossings = scanline_crossings(points, center);
            for span in crossings.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil() as i64;
                let x1 = (span[1] - 0.5).floor() as i64;
                if x0 <= x1 {
                    self.fill_span(y, x0, x1, color);
                }
            }
        }
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgba<u8>, thickness: u32) {
        if thickness <= 1 {
            self.draw_hairline(from, to, color);
            return;
        }

        match stroke_quads(&[from, to], f64::from(thickness), false) {
            Ok(quads) => {
                for quad in &quads {
                    self.fill_polygon(quad, color);
                }
            }
            Err(_) => {
                let radius = thickness / 2;
                self.fill_ellipse(from, radius, radius, color);
            }
        }
    }

    fn fill_ellipse(&mut self, center: Point2<f64>, rx: u32, ry: u32, color: Rgba<u8>) {
        if !center.is_finite() {
            return;
        }
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        if rx == 0 || ry == 0 {
            self.plot(cx, cy, color);
            return;
        }

        let (rx, ry) = (i64::from(rx), i64::from(ry));
        let (rx2, ry2) = (rx * rx, ry * ry);
        for dy in -ry..=ry {
            // Widest dx with (dx/rx)^2 + (dy/ry)^2 <= 1
            let reach = ((rx2 * (ry2 - dy * dy)) as f64 / ry2 as f64).sqrt().floor() as i64;
            self.fill_span(cy + dy, cx - reach, cx + reach, color);
        }
    }
}
