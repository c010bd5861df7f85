//! Turns a spline into canvas calls.
//!
//! All geometry is computed up front so that a spline which cannot be drawn
//! leaves the canvas untouched.

use super::Spline;
use crate::canvas::Canvas;
use crate::error::SplineError;
use crate::polygon::{stroke_quads, Quad};
use crate::primitives::Vertex;

/// Minimum number of control points `draw` accepts.
pub const MIN_CONTROL_POINTS: usize = 3;

enum Stroke {
    None,
    Lines,
    Quads(Vec<Quad<f64>>),
}

pub(super) struct RenderPlan<'a> {
    spline: &'a Spline,
    path: Vec<Vertex>,
    stroke: Stroke,
}

impl<'a> RenderPlan<'a> {
    pub(super) fn new(spline: &'a Spline) -> Result<Self, SplineError> {
        let found = spline.control_points().len();
        if found < MIN_CONTROL_POINTS {
            return Err(SplineError::TooFewPoints { found });
        }

        let path = spline.path_points()?;
        let config = spline.config();
        let stroke = match config.stroke_color() {
            None => Stroke::None,
            Some(_) if config.stroke_width() > 1 => Stroke::Quads(stroke_quads(
                &path,
                f64::from(config.stroke_width()),
                config.is_closed(),
            )?),
            Some(_) => Stroke::Lines,
        };

        Ok(Self {
            spline,
            path,
            stroke,
        })
    }

    pub(super) fn execute<C: Canvas>(self, canvas: &mut C) {
        let config = self.spline.config();

        let background = config
            .background_color()
            .map(|c| canvas.allocate_color(c.r, c.g, c.b));
        let stroke = config
            .stroke_color()
            .map(|c| canvas.allocate_color(c.r, c.g, c.b));

        if let Some(color) = background {
            canvas.fill_polygon(&self.path, color);
        }

        if let Some(color) = stroke {
            match &self.stroke {
                Stroke::None => {}
                Stroke::Lines => {
                    for pair in self.path.windows(2) {
                        canvas.draw_line(pair[0], pair[1], color, 1);
                    }
                }
                Stroke::Quads(quads) => {
                    for quad in quads {
                        canvas.fill_polygon(quad, color);
                    }
                }
            }
        }

        if let Some(style) = config.control_points() {
            let color = canvas.allocate_color(style.color.r, style.color.g, style.color.b);
            for &p in self.spline.control_points() {
                canvas.fill_ellipse(p, style.radius, style.radius, color);
            }
        }

        if let Some(style) = config.interpolation_points() {
            let color = canvas.allocate_color(style.color.r, style.color.g, style.color.b);
            for &p in &self.path {
                canvas.fill_ellipse(p, style.radius, style.radius, color);
            }
        }

        log::trace!(
            "drew spline: {} path points, background {}, stroke {}",
            self.path.len(),
            background.is_some(),
            match &self.stroke {
                Stroke::None => "none".to_string(),
                Stroke::Lines => "hairline".to_string(),
                Stroke::Quads(q) => format!("{} quads", q.len()),
            }
        );
    }
}
