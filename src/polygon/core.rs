//! Core polygon types and basic operations.

use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area by the shoelace formula. Positive for CCW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Even-odd containment test.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        polygon_bounding_box(&self.vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let mut area = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Returns the (min, max) corners of the vertices' bounding box.
pub fn polygon_bounding_box<F: Float>(vertices: &[Point2<F>]) -> Option<(Point2<F>, Point2<F>)> {
    let first = *vertices.first()?;
    Some(vertices[1..].iter().fold((first, first), |(min, max), v| {
        (
            Point2::new(min.x.min(v.x), min.y.min(v.y)),
            Point2::new(max.x.max(v.x), max.y.max(v.y)),
        )
    }))
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    scanline_crossings(vertices, point.y)
        .iter()
        .filter(|&&x| point.x < x)
        .count()
        % 2
        == 1
}

/// Returns the x coordinates where the horizontal line at `y` crosses the
/// polygon's edges, sorted ascending.
///
/// Edges are treated as half-open in y, so a vertex lying exactly on the
/// line is counted once. Pairing consecutive crossings gives the even-odd
/// interior spans of that line.
pub fn scanline_crossings<F: Float>(vertices: &[Point2<F>], y: F) -> Vec<F> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    let mut crossings = Vec::new();
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > y) != (vj.y > y) {
            crossings.push((vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x);
        }
        j = i;
    }

    crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    crossings
}
