//! The drawable spline: control points, styling and the draw pipeline.

mod config;
mod render;

pub use config::{
    MarkerStyle, SplineConfig, DEFAULT_ALPHA, DEFAULT_MARKER_RADIUS, DEFAULT_STROKE_WIDTH,
    DEFAULT_TENSION, PARAMETER_RANGE,
};
pub use render::MIN_CONTROL_POINTS;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::curves::CatmullRom2;
use crate::error::SplineError;
use crate::primitives::{Rigid2, Vertex};
use render::RenderPlan;

/// A Catmull-Rom spline that draws itself onto a [`Canvas`].
///
/// Control points accumulate through [`add_point`](Self::add_point). Whether
/// the curve is closed is fixed at construction. Styling setters never fail;
/// out-of-range values fall back to their defaults.
///
/// ```
/// use curvum::{Color, Spline};
/// use curvum::canvas::RecordingCanvas;
///
/// let mut spline = Spline::open();
/// spline.add_point(0.0, 0.0);
/// spline.add_point(50.0, 40.0);
/// spline.add_point(100.0, 0.0);
/// spline.set_stroke_color(Color::rgb(0, 0, 0));
/// spline.set_stroke_width(4);
/// spline.show_control_points(Color::rgb(255, 0, 0), 3);
///
/// let mut canvas = RecordingCanvas::new();
/// spline.draw(&mut canvas).unwrap();
/// assert_eq!(canvas.ellipses().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<Vertex>,
    config: SplineConfig,
}

impl Default for Spline {
    fn default() -> Self {
        Self::with_config(SplineConfig::default())
    }
}

impl Spline {
    /// Creates an empty spline.
    pub fn new(closed: bool) -> Self {
        if closed {
            Self::closed()
        } else {
            Self::open()
        }
    }

    /// Creates an empty closed spline.
    pub fn closed() -> Self {
        Self::with_config(SplineConfig::closed())
    }

    /// Creates an empty open spline.
    pub fn open() -> Self {
        Self::with_config(SplineConfig::open())
    }

    /// Creates an empty spline from a prepared configuration.
    pub fn with_config(config: SplineConfig) -> Self {
        Self {
            points: Vec::new(),
            config: config.sanitized(),
        }
    }

    /// Appends a control point.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Vertex::new(x, y));
    }

    /// Appends several control points in order.
    pub fn extend_points<I: IntoIterator<Item = Vertex>>(&mut self, points: I) {
        self.points.extend(points);
    }

    /// Control points in insertion order, duplicates included.
    #[inline]
    pub fn control_points(&self) -> &[Vertex] {
        &self.points
    }

    /// Whether the last control point connects back to the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.config.is_closed()
    }

    /// The current curve parameters and styling.
    #[inline]
    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    /// Fills the area enclosed by the drawn path with `color`.
    pub fn set_background_color(&mut self, color: impl Into<Color>) {
        self.config.set_background_color(color);
    }

    /// Strokes the drawn path with `color`. Without it no stroke is drawn.
    pub fn set_stroke_color(&mut self, color: impl Into<Color>) {
        self.config.set_stroke_color(color);
    }

    /// Sets the stroke width in pixels; values below 1 become 1.
    pub fn set_stroke_width(&mut self, width: i64) {
        self.config.set_stroke_width(width);
    }

    /// Marks every control point with a filled circle.
    pub fn show_control_points(&mut self, color: impl Into<Color>, radius: i64) {
        self.config
            .set_control_points(Some(MarkerStyle::new(color, radius)));
    }

    /// Marks every point of the drawn path with a filled circle.
    pub fn show_interpolation_points(&mut self, color: impl Into<Color>, radius: i64) {
        self.config
            .set_interpolation_points(Some(MarkerStyle::new(color, radius)));
    }

    /// Sets the knot parameterization exponent; values outside `[-1, 1]` become 1.
    pub fn set_spline_alpha(&mut self, alpha: f64) {
        self.config.set_alpha(alpha);
    }

    /// Sets the tension; values outside `[-1, 1]` become 0.
    pub fn set_spline_tension(&mut self, tension: f64) {
        self.config.set_tension(tension);
    }

    /// Rotates every control point about `(origin_x, origin_y)` in place.
    ///
    /// Positive angles turn counter-clockwise in a y-up frame, which appears
    /// clockwise on a y-down raster.
    pub fn rotate(&mut self, origin_x: f64, origin_y: f64, angle_degrees: f64) {
        let transform = Rigid2::rotation_degrees_about(Vertex::new(origin_x, origin_y), angle_degrees);
        for p in &mut self.points {
            *p = transform.apply_point(*p);
        }
        log::debug!(
            "rotated {} control points by {angle_degrees} degrees about ({origin_x}, {origin_y})",
            self.points.len()
        );
    }

    /// The curve model over the current control points and parameters.
    pub fn curve(&self) -> CatmullRom2<f64> {
        CatmullRom2::new(self.points.clone(), self.config.is_closed())
            .with_alpha(self.config.alpha())
            .with_tension(self.config.tension())
    }

    /// Samples the curve.
    ///
    /// # Errors
    ///
    /// [`SplineError::DegenerateGeometry`] when the control points collapse
    /// to fewer than two distinct knots.
    pub fn interpolation_points(&self) -> Result<Vec<Vertex>, SplineError> {
        self.curve().sample()
    }

    /// The polyline that gets drawn.
    ///
    /// Sampling starts just past the first knot, so the path opens with the
    /// first control point itself. A closed spline then repeats its first two
    /// samples, so the seam is stroked without a gap.
    pub fn path_points(&self) -> Result<Vec<Vertex>, SplineError> {
        let samples = self.interpolation_points()?;
        let mut path = Vec::with_capacity(samples.len() + 3);
        path.extend(self.points.first().copied());
        path.extend_from_slice(&samples);
        if self.config.is_closed() {
            path.extend(samples.iter().take(2).copied());
        }
        Ok(path)
    }

    /// Draws the spline.
    ///
    /// Layers are painted in this order: background fill, stroke, control
    /// point markers, interpolation point markers. Colors are allocated on
    /// the canvas before anything is drawn.
    ///
    /// # Errors
    ///
    /// - [`SplineError::InvalidCanvas`] if the canvas reports itself unusable.
    /// - [`SplineError::TooFewPoints`] with fewer than three control points.
    /// - [`SplineError::DegenerateGeometry`] if the curve or its stroke collapses.
    ///
    /// The canvas is not touched when an error is returned.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), SplineError> {
        if !canvas.is_valid() {
            return Err(SplineError::InvalidCanvas);
        }
        let plan = RenderPlan::new(self)?;
        log::debug!(
            "drawing {} spline through {} control points",
            if self.is_closed() { "closed" } else { "open" },
            self.points.len()
        );
        plan.execute(canvas);
        Ok(())
    }
}
