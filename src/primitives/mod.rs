//! Floating-point geometric primitives.

mod point2;
mod rigid2;
mod vec2;

pub use point2::Point2;
pub use rigid2::Rigid2;
pub use vec2::Vec2;

/// A control or interpolation point as stored by [`Spline`](crate::Spline).
pub type Vertex = Point2<f64>;
