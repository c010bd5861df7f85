//! Rigid 2D transforms (rotation followed by translation).

use super::{Point2, Vec2};
use num_traits::Float;

/// A rigid transform: a rotation about the origin followed by a translation.
///
/// Stored as the rotation's cosine and sine plus the translation, so that
/// distances between transformed points are preserved exactly up to rounding.
///
/// Applied to a point as:
/// ```text
/// x' = cos * x - sin * y + tx
/// y' = sin * x + cos * y + ty
/// ```
///
/// # Example
///
/// ```
/// use curvum::primitives::{Point2, Rigid2};
///
/// // Quarter turn about (10, 10)
/// let turn: Rigid2<f64> = Rigid2::rotation_degrees_about(Point2::new(10.0, 10.0), 90.0);
/// let p = turn.apply_point(Point2::new(20.0, 10.0));
/// assert!((p.x - 10.0).abs() < 1e-9);
/// assert!((p.y - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rigid2<F> {
    cos: F,
    sin: F,
    tx: F,
    ty: F,
}

impl<F: Float> Rigid2<F> {
    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            cos: F::one(),
            sin: F::zero(),
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// A pure translation.
    #[inline]
    pub fn translation(offset: Vec2<F>) -> Self {
        Self {
            tx: offset.x,
            ty: offset.y,
            ..Self::identity()
        }
    }

    /// A rotation about the origin. Angle in radians, positive is counter-clockwise
    /// in a y-up frame (clockwise on a y-down raster).
    #[inline]
    pub fn rotation(angle: F) -> Self {
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// A rotation by `angle` radians about `pivot`.
    pub fn rotation_about(pivot: Point2<F>, angle: F) -> Self {
        Self::translation(-pivot.to_vec())
            .then(Self::rotation(angle))
            .then(Self::translation(pivot.to_vec()))
    }

    /// A rotation by `degrees` about `pivot`.
    pub fn rotation_degrees_about(pivot: Point2<F>, degrees: F) -> Self {
        Self::rotation_about(pivot, degrees.to_radians())
    }

    /// Returns a transform that applies `self` first, then `other`.
    pub fn then(&self, other: Self) -> Self {
        Self {
            cos: other.cos * self.cos - other.sin * self.sin,
            sin: other.sin * self.cos + other.cos * self.sin,
            tx: other.cos * self.tx - other.sin * self.ty + other.tx,
            ty: other.sin * self.tx + other.cos * self.ty + other.ty,
        }
    }

    /// Returns the inverse transform. Rigid transforms are always invertible.
    pub fn inverse(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
            tx: -(self.cos * self.tx + self.sin * self.ty),
            ty: self.sin * self.tx - self.cos * self.ty,
        }
    }

    /// Returns the rotation angle in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> F {
        self.sin.atan2(self.cos)
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.cos * p.x - self.sin * p.y + self.tx,
            self.sin * p.x + self.cos * p.y + self.ty,
        )
    }

    /// Applies this transform to a vector (rotation only).
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            self.cos * v.x - self.sin * v.y,
            self.sin * v.x + self.cos * v.y,
        )
    }

    /// Applies this transform to every point, preserving order.
    pub fn apply_points(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }
}

impl<F: Float> Default for Rigid2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity() {
        let t: Rigid2<f64> = Rigid2::identity();
        let p = Point2::new(3.0, -7.5);
        assert_eq!(t.apply_point(p), p);
    }

    #[test]
    fn test_rotation_90() {
        let t: Rigid2<f64> = Rigid2::rotation(FRAC_PI_2);
        let p = t.apply_point(Point2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_about_keeps_pivot_fixed() {
        let pivot = Point2::new(375.0, 150.0);
        let t: Rigid2<f64> = Rigid2::rotation_degrees_about(pivot, 37.0);
        let p = t.apply_point(pivot);
        assert_relative_eq!(p.x, pivot.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, pivot.y, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_about_half_turn() {
        let t: Rigid2<f64> = Rigid2::rotation_about(Point2::new(1.0, 1.0), PI);
        let p = t.apply_point(Point2::new(2.0, 1.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_then_accumulates_angles() {
        let a: Rigid2<f64> = Rigid2::rotation(0.3);
        let b = Rigid2::rotation(0.5);
        assert_relative_eq!(a.then(b).angle(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let t: Rigid2<f64> = Rigid2::rotation_degrees_about(Point2::new(-4.0, 9.0), 123.0);
        let p = Point2::new(12.5, -3.25);
        let back = t.inverse().apply_point(t.apply_point(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn test_preserves_distance() {
        let t: Rigid2<f64> = Rigid2::rotation_degrees_about(Point2::new(5.0, 5.0), 71.0);
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(8.0, 3.0);
        assert_relative_eq!(
            t.apply_point(a).distance(t.apply_point(b)),
            a.distance(b),
            epsilon = 1e-9
        );
        let v = t.apply_vec(b - a);
        assert_relative_eq!(v.magnitude(), (b - a).magnitude(), epsilon = 1e-9);
    }

    #[test]
    fn test_f32_support() {
        let t: Rigid2<f32> = Rigid2::rotation_degrees_about(Point2::new(0.0, 0.0), 180.0);
        let p = t.apply_point(Point2::new(1.0, 0.0));
        assert!((p.x + 1.0).abs() < 1e-5);
        assert_eq!(t.apply_points(&[Point2::new(0.0, 0.0)]).len(), 1);
    }
}
