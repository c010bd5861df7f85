//! Variable-width strokes as filled quads.
//!
//! A polyline of width `w` is drawn as a run of quadrilaterals: each segment
//! is offset by `w / 2` to both sides, and every consecutive pair of offset
//! points spans one quad. That covers the segment bodies as well as the thin
//! wedges between adjacent segments. Sharp turns get neither miter nor bevel,
//! so overlaps and small notches at corners are expected.
//!
//! # Example
//!
//! ```
//! use curvum::{Point2, polygon::stroke_quads};
//!
//! let path = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//! ];
//!
//! let quads = stroke_quads(&path, 3.0, false).unwrap();
//! assert_eq!(quads.len(), 3); // two bodies and the corner wedge
//! ```

use crate::error::SplineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Four corners of a stroke piece: `[inner_i, outer_i, outer_i+1, inner_i+1]`.
pub type Quad<F> = [Point2<F>; 4];

/// Both offset sides of a polyline.
///
/// Each non-degenerate segment contributes its two offset end points to each
/// side, so `inner[2k]`/`inner[2k + 1]` are the ends of segment `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetSides<F> {
    /// Points offset along the counter-clockwise normal.
    pub inner: Vec<Point2<F>>,
    /// Points offset along the clockwise normal.
    pub outer: Vec<Point2<F>>,
}

impl<F: Float> OffsetSides<F> {
    /// Number of points per side.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Offsets every segment of `points` by half of `width` to both sides.
///
/// Zero-length segments have no normal and are skipped.
pub fn offset_sides<F: Float>(points: &[Point2<F>], width: F) -> OffsetSides<F> {
    let half_width = width / (F::one() + F::one());
    let capacity = points.len().saturating_sub(1) * 2;
    let mut sides = OffsetSides {
        inner: Vec::with_capacity(capacity),
        outer: Vec::with_capacity(capacity),
    };

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let Some(normal) = (b - a).unit_normal() else {
            continue;
        };
        let offset = normal * half_width;

        sides.inner.push(a + offset);
        sides.inner.push(b + offset);
        sides.outer.push(a - offset);
        sides.outer.push(b - offset);
    }

    sides
}

/// Converts a polyline into stroke quads of the given width.
///
/// When `closed` is set, one more quad joins the trailing edge of the last
/// quad to the leading edge of the first, so the seam has no gap.
///
/// # Errors
///
/// [`SplineError::DegenerateGeometry`] when the polyline has no segment of
/// non-zero length, so no quad can be built.
pub fn stroke_quads<F: Float>(
    points: &[Point2<F>],
    width: F,
    closed: bool,
) -> Result<Vec<Quad<F>>, SplineError> {
    let sides = offset_sides(points, width);
    if sides.len() < 2 {
        return Err(SplineError::DegenerateGeometry);
    }

    let mut quads: Vec<Quad<F>> = (0..sides.len() - 1)
        .map(|i| {
            [
                sides.inner[i],
                sides.outer[i],
                sides.outer[i + 1],
                sides.inner[i + 1],
            ]
        })
        .collect();

    if closed {
        let first = quads[0];
        let last = quads[quads.len() - 1];
        quads.push([first[0], first[1], last[2], last[3]]);
    }

    Ok(quads)
}
