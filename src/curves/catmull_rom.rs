//! Catmull-Rom splines with tension and alpha parameterization.
//!
//! The curve passes through every control point. Each span `p1 -> p2` is a
//! cubic Hermite segment whose tangents come from the neighbouring points
//! `p0` and `p3`, measured in a knot parameterization controlled by `alpha`:
//! - `alpha = 0.0`: Uniform
//! - `alpha = 0.5`: Centripetal (no cusps or self-intersections within a span)
//! - `alpha = 1.0`: Chordal
//!
//! Tension scales both tangents by `1 - tension`: 0 draws the full curve,
//! 1 collapses every span to a straight segment, negative values exaggerate.
//!
//! # Example
//!
//! ```
//! use curvum::{Point2, curves::CatmullRom2};
//!
//! let spline = CatmullRom2::new(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ],
//!     true,
//! )
//! .centripetal();
//!
//! let samples = spline.sample().unwrap();
//! assert_eq!(samples.len(), 40);
//! ```

use crate::error::SplineError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Control points closer than this to their predecessor are dropped.
pub const MIN_KNOT_SPACING: f64 = 1.0;

/// Lower bound on samples emitted per span.
pub const MIN_SEGMENT_SAMPLES: usize = 10;

/// Spans longer than `MIN_SEGMENT_SAMPLES * SAMPLE_SPACING` get one sample
/// per `SAMPLE_SPACING` units of incoming chord length.
pub const SAMPLE_SPACING: f64 = 10.0;

/// A Catmull-Rom spline in 2D, open or closed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom2<F> {
    /// Control points that the spline passes through
    pub points: Vec<Point2<F>>,
    /// Knot parameterization exponent (0.0 = uniform, 0.5 = centripetal, 1.0 = chordal)
    pub alpha: F,
    /// Tangent scale is `1 - tension`
    pub tension: F,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl<F: Float> CatmullRom2<F> {
    /// Creates a chordal spline (alpha = 1) with zero tension.
    pub fn new(points: Vec<Point2<F>>, closed: bool) -> Self {
        Self {
            points,
            alpha: F::one(),
            tension: F::zero(),
            closed,
        }
    }

    /// Switches to uniform parameterization (alpha = 0).
    pub fn uniform(self) -> Self {
        self.with_alpha(F::zero())
    }

    /// Switches to centripetal parameterization (alpha = 0.5).
    pub fn centripetal(self) -> Self {
        self.with_alpha(F::from(0.5).unwrap())
    }

    /// Switches to chordal parameterization (alpha = 1).
    pub fn chordal(self) -> Self {
        self.with_alpha(F::one())
    }

    /// Sets the parameterization exponent.
    pub fn with_alpha(mut self, alpha: F) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the tension.
    pub fn with_tension(mut self, tension: F) -> Self {
        self.tension = tension;
        self
    }

    /// The factor applied to both tangents of every span.
    #[inline]
    pub fn tension_remainder(&self) -> F {
        F::one() - self.tension
    }

    /// Returns the control points that survive near-duplicate pruning.
    ///
    /// # Errors
    ///
    /// [`SplineError::DegenerateGeometry`] when fewer than two points survive.
    pub fn knots(&self) -> Result<Vec<Point2<F>>, SplineError> {
        let knots = prune_control_points(&self.points, self.closed);
        if knots.len() < self.points.len() {
            log::debug!(
                "pruned {} of {} control points closer than {MIN_KNOT_SPACING}",
                self.points.len() - knots.len(),
                self.points.len()
            );
        }
        if knots.len() < 2 {
            return Err(SplineError::DegenerateGeometry);
        }
        Ok(knots)
    }

    /// Returns the knots with one point of padding at each end.
    ///
    /// Closed splines wrap around (last point in front, first two behind).
    /// Open splines reflect their end points to synthesize the padding.
    pub fn padded_knots(&self) -> Result<Vec<Point2<F>>, SplineError> {
        let knots = self.knots()?;
        let n = knots.len();
        let mut padded = Vec::with_capacity(n + 3);

        if self.closed {
            padded.push(knots[n - 1]);
            padded.extend_from_slice(&knots);
            padded.push(knots[0]);
            padded.push(knots[1]);
        } else {
            padded.push(knots[0].reflect(knots[1]));
            padded.extend_from_slice(&knots);
            padded.push(knots[n - 1].reflect(knots[n - 2]));
        }

        Ok(padded)
    }

    /// Builds one Hermite segment per span, in traversal order.
    pub fn segments(&self) -> Result<Vec<CatmullRomSegment<F>>, SplineError> {
        let padded = self.padded_knots()?;
        let remainder = self.tension_remainder();

        Ok(padded
            .windows(4)
            .map(|w| CatmullRomSegment::new(w[0], w[1], w[2], w[3], self.alpha, remainder))
            .collect())
    }

    /// Samples the whole curve.
    ///
    /// Each span contributes `t = j / n` for `j = 1..=n`, so the first control
    /// point is not part of the output and every span ends exactly on its
    /// end knot. A closed curve ends on its first knot without repeating the
    /// first sample.
    ///
    /// # Errors
    ///
    /// [`SplineError::DegenerateGeometry`] when the control points collapse
    /// to fewer than two knots.
    pub fn sample(&self) -> Result<Vec<Point2<F>>, SplineError> {
        let segments = self.segments()?;
        let total = segments.iter().map(|s| s.sample_count()).sum();
        let mut samples = Vec::with_capacity(total);
        for segment in &segments {
            samples.extend(segment.samples());
        }
        Ok(samples)
    }

    /// Returns the bounding box of the control points.
    ///
    /// The curve itself may overshoot this box.
    pub fn control_bounds(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.points.first()?;
        Some(self.points[1..].iter().fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

/// One span of a Catmull-Rom curve in cubic polynomial form.
///
/// `P(t) = a t³ + b t² + c t + d` for `t ∈ [0, 1]`, running from `start`
/// (the second point of its window) to `end` (the third).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomSegment<F> {
    a: Vec2<F>,
    b: Vec2<F>,
    c: Vec2<F>,
    start: Point2<F>,
    end: Point2<F>,
    samples: usize,
}

impl<F: Float> CatmullRomSegment<F> {
    /// Builds the span `p1 -> p2` of the window `(p0, p1, p2, p3)`.
    ///
    /// Consecutive window points must be distinct, otherwise the knot
    /// intervals vanish and the tangents are undefined.
    pub fn new(
        p0: Point2<F>,
        p1: Point2<F>,
        p2: Point2<F>,
        p3: Point2<F>,
        alpha: F,
        tension_remainder: F,
    ) -> Self {
        let d01 = p0.distance(p1);

        let t0 = F::zero();
        let t1 = t0 + d01.powf(alpha);
        let t2 = t1 + p1.distance(p2).powf(alpha);
        let t3 = t2 + p2.distance(p3).powf(alpha);

        let scale = tension_remainder * (t2 - t1);
        let m1 = ((p0 - p1) / (t0 - t1) - (p0 - p2) / (t0 - t2) + (p1 - p2) / (t1 - t2)) * scale;
        let m2 = ((p1 - p2) / (t1 - t2) - (p1 - p3) / (t1 - t3) + (p2 - p3) / (t2 - t3)) * scale;

        let chord = p2 - p1;
        let two = F::from(2.0).unwrap();
        let three = F::from(3.0).unwrap();

        let min_samples = F::from(MIN_SEGMENT_SAMPLES).unwrap();
        let samples = (d01 / F::from(SAMPLE_SPACING).unwrap())
            .ceil()
            .max(min_samples)
            .to_usize()
            .unwrap_or(MIN_SEGMENT_SAMPLES);

        Self {
            a: m1 + m2 - chord * two,
            b: chord * three - m1 * two - m2,
            c: m1,
            start: p1,
            end: p2,
            samples,
        }
    }

    /// Evaluates the span at `t ∈ [0, 1]`.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        self.start + ((self.a * t + self.b) * t + self.c) * t
    }

    /// First point of the span.
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.start
    }

    /// Last point of the span.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.end
    }

    /// Tangent at the start of the span.
    #[inline]
    pub fn start_tangent(&self) -> Vec2<F> {
        self.c
    }

    /// Number of points [`samples`](Self::samples) yields.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Evaluates `t = j / n` for `j = 1..=n`, excluding the start point.
    pub fn samples(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        let n = F::from(self.samples).unwrap();
        (1..=self.samples).map(move |j| self.eval(F::from(j).unwrap() / n))
    }
}

/// Drops control points that sit closer than [`MIN_KNOT_SPACING`] to their
/// predecessor, walking once from the last point toward the first.
///
/// Each point is compared with its predecessor in the input only; a removal
/// does not trigger a second look at the point after it. Closed curves then
/// drop the last point once if it lies within `MIN_KNOT_SPACING` of the
/// first. The first point is always kept, and no two consecutive survivors
/// coincide.
pub fn prune_control_points<F: Float>(points: &[Point2<F>], closed: bool) -> Vec<Point2<F>> {
    let min_spacing = F::from(MIN_KNOT_SPACING).unwrap();
    let mut kept = points.to_vec();

    for i in (1..kept.len()).rev() {
        if kept[i].distance(kept[i - 1]) < min_spacing {
            kept.remove(i);
        }
    }

    if closed && kept.len() > 1 && kept[0].distance(kept[kept.len() - 1]) < min_spacing {
        kept.pop();
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    fn zigzag() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 40.0),
            Point2::new(60.0, -40.0),
            Point2::new(90.0, 0.0),
        ]
    }

    fn distance_to_line(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
        let ab = b - a;
        (ab.cross(p - a) / ab.magnitude()).abs()
    }

    fn max_chord_deviation(spline: &CatmullRom2<f64>) -> f64 {
        spline
            .segments()
            .unwrap()
            .iter()
            .flat_map(|s| {
                let (a, b) = (s.start(), s.end());
                s.samples()
                    .map(move |p| distance_to_line(p, a, b))
                    .collect::<Vec<_>>()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_defaults() {
        let spline = CatmullRom2::new(square(), true);
        assert_relative_eq!(spline.alpha, 1.0);
        assert_relative_eq!(spline.tension, 0.0);
        assert_relative_eq!(spline.tension_remainder(), 1.0);
        assert!(spline.closed);
    }

    #[test]
    fn test_tension_remainder_follows_tension() {
        let spline = CatmullRom2::new(square(), false).with_tension(0.25);
        assert_relative_eq!(spline.tension_remainder(), 0.75);
        let spline = spline.with_tension(-0.5);
        assert_relative_eq!(spline.tension_remainder(), 1.5);
    }

    #[test]
    fn test_spans_end_on_knots() {
        let points = zigzag();
        let spline = CatmullRom2::new(points.clone(), false);
        let segments = spline.segments().unwrap();
        assert_eq!(segments.len(), 3);

        for (i, segment) in segments.iter().enumerate() {
            let start = segment.eval(0.0);
            let end = segment.eval(1.0);
            assert_relative_eq!(start.x, points[i].x, epsilon = 1e-9);
            assert_relative_eq!(start.y, points[i].y, epsilon = 1e-9);
            assert_relative_eq!(end.x, points[i + 1].x, epsilon = 1e-9);
            assert_relative_eq!(end.y, points[i + 1].y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_open_padding_reflects_end_points() {
        let spline = CatmullRom2::new(zigzag(), false);
        let padded = spline.padded_knots().unwrap();
        assert_eq!(padded.len(), 6);
        assert_eq!(padded[0], Point2::new(-30.0, -40.0));
        assert_eq!(padded[5], Point2::new(120.0, 40.0));
    }

    #[test]
    fn test_closed_padding_wraps() {
        let points = square();
        let spline = CatmullRom2::new(points.clone(), true);
        let padded = spline.padded_knots().unwrap();
        assert_eq!(padded.len(), 7);
        assert_eq!(padded[0], points[3]);
        assert_eq!(&padded[1..5], &points[..]);
        assert_eq!(padded[5], points[0]);
        assert_eq!(padded[6], points[1]);
    }

    #[test]
    fn test_sample_counts() {
        // Short chords get the minimum of 10 samples per span.
        let spline = CatmullRom2::new(square(), true);
        assert_eq!(spline.sample().unwrap().len(), 40);

        // The incoming chord of 250 units asks for 25 samples.
        let long = CatmullRom2::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(250.0, 0.0),
                Point2::new(250.0, 30.0),
            ],
            false,
        );
        let counts: Vec<usize> = long
            .segments()
            .unwrap()
            .iter()
            .map(|s| s.sample_count())
            .collect();
        assert_eq!(counts, vec![25, 25]);
    }

    #[test]
    fn test_closed_square_scenario() {
        let spline = CatmullRom2::new(square(), true);
        let samples = spline.sample().unwrap();
        assert!(samples.len() > 30);
        assert!(samples.iter().all(|p| p.is_finite()));

        // The loop ends back on the first control point.
        let last = samples[samples.len() - 1];
        assert_relative_eq!(last.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-9);

        // Natural overshoot stays within 20% of the side length.
        for p in &samples {
            assert!(p.x > -2.0 && p.x < 12.0, "x out of range: {}", p.x);
            assert!(p.y > -2.0 && p.y < 12.0, "y out of range: {}", p.y);
        }
        let min_y = samples.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert!(min_y < 0.0, "zero tension should bulge past the control polygon");
    }

    #[test]
    fn test_closed_samples_are_continuous() {
        let samples = CatmullRom2::new(square(), true).sample().unwrap();
        for pair in samples.windows(2) {
            assert!(pair[0].distance(pair[1]) < 3.0);
        }
        assert!(samples[samples.len() - 1].distance(samples[0]) < 3.0);
    }

    #[test]
    fn test_tension_one_gives_straight_spans() {
        let spline = CatmullRom2::new(zigzag(), false).with_tension(1.0);
        assert!(max_chord_deviation(&spline) < 1e-9);
    }

    #[test]
    fn test_tension_monotonically_flattens() {
        let deviations: Vec<f64> = [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|&t| max_chord_deviation(&CatmullRom2::new(zigzag(), false).with_tension(t)))
            .collect();

        for pair in deviations.windows(2) {
            assert!(pair[1] < pair[0], "deviation did not shrink: {:?}", deviations);
        }
    }

    #[test]
    fn test_alpha_variants_are_finite() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 40.0),
            Point2::new(7.0, 0.0),
            Point2::new(80.0, 10.0),
            Point2::new(82.0, 12.0),
        ];
        for spline in [
            CatmullRom2::new(points.clone(), false).uniform(),
            CatmullRom2::new(points.clone(), false).centripetal(),
            CatmullRom2::new(points.clone(), false).chordal(),
            CatmullRom2::new(points.clone(), true).centripetal(),
        ] {
            let samples = spline.sample().unwrap();
            assert!(!samples.is_empty());
            assert!(samples.iter().all(|p| p.is_finite()));
        }
    }

    #[test]
    fn test_centripetal_has_no_cusps_on_convex_polygon() {
        let pentagon = vec![
            Point2::new(0.0, 0.0),
            Point2::new(40.0, -5.0),
            Point2::new(70.0, 20.0),
            Point2::new(50.0, 60.0),
            Point2::new(5.0, 45.0),
        ];
        let samples = CatmullRom2::new(pentagon, true)
            .centripetal()
            .sample()
            .unwrap();

        let steps: Vec<Vec2<f64>> = samples.windows(2).map(|w| w[1] - w[0]).collect();
        for pair in steps.windows(2) {
            assert!(pair[0].magnitude() > 1e-6);
            assert!(pair[0].dot(pair[1]) > 0.0, "direction reversed");
        }
    }

    #[test]
    fn test_prune_near_duplicates() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let kept = prune_control_points(&points, false);
        assert_eq!(
            kept,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_prune_single_backward_pass() {
        // Only the middle point is close to its predecessor. Once it is gone
        // (0,0) and (-0.2,0) are adjacent, and both stay.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.9, 0.0),
            Point2::new(-0.2, 0.0),
        ];
        let kept = prune_control_points(&points, false);
        assert_eq!(kept, vec![Point2::new(0.0, 0.0), Point2::new(-0.2, 0.0)]);

        let samples = CatmullRom2::new(points, false).sample().unwrap();
        assert_eq!(samples.len(), MIN_SEGMENT_SAMPLES);
        assert!(samples.iter().all(|p| p.is_finite()));
        assert_relative_eq!(samples[9].x, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_prune_keeps_survivors_distinct() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.9, 0.0),
            Point2::new(1.5, 0.0),
            Point2::new(5.0, 0.0),
        ];
        let kept = prune_control_points(&points, false);
        assert_eq!(kept, vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)]);
        for pair in kept.windows(2) {
            assert!(pair[0].distance(pair[1]) > 0.0);
        }
    }

    #[test]
    fn test_prune_closing_point() {
        let mut points = square();
        points.push(Point2::new(0.2, 0.3));
        assert_eq!(prune_control_points(&points, true), square());
        assert_eq!(prune_control_points(&points, false).len(), 5);
    }

    #[test]
    fn test_prune_closing_point_only_once() {
        // (0.6,-0.5) survives the backward pass and the closing check removes
        // it. (-0.6,0.6) is also near the start but is not revisited.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(-0.6, 0.6),
            Point2::new(0.6, -0.5),
        ];
        let kept = prune_control_points(&points, true);
        assert_eq!(
            kept,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(-0.6, 0.6),
            ]
        );
    }

    #[test]
    fn test_duplicates_do_not_produce_nan() {
        let points = vec![
            Point2::new(375.0, 150.0),
            Point2::new(370.0, 70.0),
            Point2::new(370.0, 70.0),
            Point2::new(380.0, 70.0),
        ];
        let samples = CatmullRom2::new(points, true).sample().unwrap();
        assert_eq!(samples.len(), 30);
        assert!(samples.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_collapsed_points_are_degenerate() {
        let points = vec![
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.2, 5.1),
        ];
        let spline = CatmullRom2::new(points, false);
        assert_eq!(spline.sample(), Err(SplineError::DegenerateGeometry));
        assert_eq!(
            CatmullRom2::<f64>::new(Vec::new(), true).sample(),
            Err(SplineError::DegenerateGeometry)
        );
    }

    #[test]
    fn test_two_knot_closed_curve() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(20.0, 0.0)];
        let samples = CatmullRom2::new(points, true).sample().unwrap();
        assert_eq!(samples.len(), 20);
        assert!(samples.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let spline = CatmullRom2::new(zigzag(), true).with_tension(0.3);
        assert_eq!(spline.sample().unwrap(), spline.sample().unwrap());
        assert_eq!(spline.points, zigzag());
    }

    #[test]
    fn test_control_bounds() {
        let spline = CatmullRom2::new(zigzag(), false);
        let (min, max) = spline.control_bounds().unwrap();
        assert_eq!(min, Point2::new(0.0, -40.0));
        assert_eq!(max, Point2::new(90.0, 40.0));
        assert!(CatmullRom2::<f64>::new(Vec::new(), false)
            .control_bounds()
            .is_none());
    }

    #[test]
    fn test_f32_support() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(20.0, 0.0),
        ];
        let samples = CatmullRom2::new(points, false).sample().unwrap();
        let last = samples[samples.len() - 1];
        assert!((last.x - 20.0).abs() < 1e-4);
    }
}
