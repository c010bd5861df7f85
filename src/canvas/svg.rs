//! Canvas that emits an SVG document.

use super::Canvas;
use crate::color::Color;
use crate::primitives::Point2;

/// Collects canvas calls as SVG elements.
///
/// Shapes are written with `shape-rendering="crispEdges"` so the output
/// matches the un-antialiased raster as closely as a vector format allows.
///
/// ```
/// use curvum::canvas::{Canvas, SvgCanvas};
/// use curvum::Point2;
///
/// let mut canvas = SvgCanvas::new(100, 50);
/// let red = canvas.allocate_color(255, 0, 0);
/// canvas.draw_line(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0), red, 2);
///
/// let svg = canvas.to_svg();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r##"stroke="#ff0000""##));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    background: Option<Color>,
    content: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            content: String::new(),
        }
    }

    /// Paints the whole document with `color` before any other element.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of elements drawn so far, excluding the background.
    pub fn element_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Renders the complete document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');
        if let Some(background) = self.background {
            svg.push_str(&format!(
                r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                self.width, self.height, background
            ));
            svg.push('\n');
        }
        svg.push_str(&self.content);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Canvas for SvgCanvas {
    type Color = Color;

    fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Color {
        Color::rgb(r, g, b)
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Color) {
        if points.len() < 3 {
            return;
        }
        let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" fill-rule="evenodd"/>"#,
            coords.join(" "),
            color
        ));
        self.content.push('\n');
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Color, thickness: u32) {
        self.content.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color,
            thickness.max(1)
        ));
        self.content.push('\n');
    }

    fn fill_ellipse(&mut self, center: Point2<f64>, rx: u32, ry: u32, color: Color) {
        self.content.push_str(&format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"/>"#,
            center.x, center.y, rx, ry, color
        ));
        self.content.push('\n');
    }
}
