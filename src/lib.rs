//! curvum - Catmull-Rom splines drawn as variable-width strokes
//!
//! Add control points to a [`Spline`], style it, and draw it onto any
//! [`Canvas`]: the curve passes through every control point, can be open or
//! closed, and is stroked as a hairline or as filled quads of any width.

pub mod canvas;
pub mod color;
pub mod curves;
pub mod error;
pub mod polygon;
pub mod primitives;
mod spline;

pub use canvas::Canvas;
pub use color::{Color, ColorParseError};
pub use error::SplineError;
pub use primitives::{Point2, Rigid2, Vec2, Vertex};
pub use spline::{
    MarkerStyle, Spline, SplineConfig, DEFAULT_ALPHA, DEFAULT_MARKER_RADIUS,
    DEFAULT_STROKE_WIDTH, DEFAULT_TENSION, MIN_CONTROL_POINTS, PARAMETER_RANGE,
};
