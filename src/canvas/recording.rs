//! A canvas that records calls instead of drawing them.

use super::Canvas;
use crate::color::Color;
use crate::primitives::Point2;

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    AllocateColor(Color),
    FillPolygon {
        points: Vec<Point2<f64>>,
        color: Color,
    },
    DrawLine {
        from: Point2<f64>,
        to: Point2<f64>,
        color: Color,
        thickness: u32,
    },
    FillEllipse {
        center: Point2<f64>,
        rx: u32,
        ry: u32,
        color: Color,
    },
}

/// Records every [`Canvas`] call in order.
///
/// ```
/// use curvum::{Color, Spline};
/// use curvum::canvas::{DrawCommand, RecordingCanvas};
///
/// let mut spline = Spline::closed();
/// spline.add_point(0.0, 0.0);
/// spline.add_point(40.0, 0.0);
/// spline.add_point(20.0, 30.0);
/// spline.set_stroke_color(Color::rgb(255, 0, 0));
///
/// let mut canvas = RecordingCanvas::new();
/// spline.draw(&mut canvas).unwrap();
/// assert!(canvas.lines().count() > 30);
/// assert!(matches!(canvas.commands[0], DrawCommand::AllocateColor(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    /// Calls in the order they were made.
    pub commands: Vec<DrawCommand>,
    valid: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            valid: true,
        }
    }

    /// A canvas that reports itself invalid.
    pub fn invalid() -> Self {
        Self {
            commands: Vec::new(),
            valid: false,
        }
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded polygon fills, as (points, color).
    pub fn polygons(&self) -> impl Iterator<Item = (&[Point2<f64>], Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPolygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    /// Recorded lines, as (from, to, color, thickness).
    pub fn lines(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>, Color, u32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::DrawLine {
                from,
                to,
                color,
                thickness,
            } => Some((from, to, color, thickness)),
            _ => None,
        })
    }

    /// Recorded ellipses, as (center, rx, ry, color).
    pub fn ellipses(&self) -> impl Iterator<Item = (Point2<f64>, u32, u32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::FillEllipse {
                center,
                rx,
                ry,
                color,
            } => Some((center, rx, ry, color)),
            _ => None,
        })
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    type Color = Color;

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Color {
        let color = Color::rgb(r, g, b);
        self.commands.push(DrawCommand::AllocateColor(color));
        color
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Color, thickness: u32) {
        self.commands.push(DrawCommand::DrawLine {
            from,
            to,
            color,
            thickness,
        });
    }

    fn fill_ellipse(&mut self, center: Point2<f64>, rx: u32, ry: u32, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            rx,
            ry,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.is_valid());
        let red = canvas.allocate_color(255, 0, 0);
        canvas.draw_line(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0), red, 1);
        canvas.fill_ellipse(Point2::new(2.0, 2.0), 3, 3, red);
        canvas.fill_polygon(&[Point2::new(0.0, 0.0); 3], red);

        assert_eq!(canvas.len(), 4);
        assert_eq!(canvas.commands[0], DrawCommand::AllocateColor(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.lines().count(), 1);
        assert_eq!(canvas.ellipses().count(), 1);
        assert_eq!(canvas.polygons().count(), 1);
    }

    #[test]
    fn test_invalid() {
        let canvas = RecordingCanvas::invalid();
        assert!(!canvas.is_valid());
        assert!(canvas.is_empty());
    }
}
