//! Spline styling and curve parameters.
//!
//! Setters never fail: a value outside its accepted range is replaced by the
//! documented default and a warning is logged.

use crate::color::Color;

/// Default knot parameterization exponent (chordal).
pub const DEFAULT_ALPHA: f64 = 1.0;
/// Default tension (full curvature).
pub const DEFAULT_TENSION: f64 = 0.0;
/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 1;
/// Default marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: u32 = 1;

/// Alpha and tension are accepted within this closed range.
pub const PARAMETER_RANGE: (f64, f64) = (-1.0, 1.0);

fn in_parameter_range(value: f64) -> bool {
    value.is_finite() && (PARAMETER_RANGE.0..=PARAMETER_RANGE.1).contains(&value)
}

fn sanitize_alpha(alpha: f64) -> f64 {
    if in_parameter_range(alpha) {
        alpha
    } else {
        log::warn!("spline alpha {alpha} out of range, using {DEFAULT_ALPHA}");
        DEFAULT_ALPHA
    }
}

fn sanitize_tension(tension: f64) -> f64 {
    if in_parameter_range(tension) {
        tension
    } else {
        log::warn!("spline tension {tension} out of range, using {DEFAULT_TENSION}");
        DEFAULT_TENSION
    }
}

fn sanitize_pixels(value: i64, default: u32, what: &str) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v >= 1 => v,
        _ => {
            log::warn!("{what} {value} is not a positive integer, using {default}");
            default
        }
    }
}

/// Color and radius of point markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerStyle {
    pub color: Color,
    pub radius: u32,
}

impl MarkerStyle {
    /// Creates a marker style; a radius below 1 becomes [`DEFAULT_MARKER_RADIUS`].
    pub fn new(color: impl Into<Color>, radius: i64) -> Self {
        Self {
            color: color.into(),
            radius: sanitize_pixels(radius, DEFAULT_MARKER_RADIUS, "marker radius"),
        }
    }

    fn sanitized(self) -> Self {
        Self {
            radius: self.radius.max(DEFAULT_MARKER_RADIUS),
            ..self
        }
    }
}

/// Everything that shapes and styles a spline besides its control points.
///
/// ```
/// use curvum::{Color, SplineConfig};
///
/// let config = SplineConfig::open()
///     .with_stroke(Color::rgb(255, 0, 0), 3)
///     .with_tension(0.5)
///     .with_alpha(7.0); // out of range
///
/// assert_eq!(config.stroke_width(), 3);
/// assert_eq!(config.tension_remainder(), 0.5);
/// assert_eq!(config.alpha(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplineConfig {
    closed: bool,
    alpha: f64,
    tension: f64,
    stroke_width: u32,
    background_color: Option<Color>,
    stroke_color: Option<Color>,
    control_points: Option<MarkerStyle>,
    interpolation_points: Option<MarkerStyle>,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            closed: true,
            alpha: DEFAULT_ALPHA,
            tension: DEFAULT_TENSION,
            stroke_width: DEFAULT_STROKE_WIDTH,
            background_color: None,
            stroke_color: None,
            control_points: None,
            interpolation_points: None,
        }
    }
}

impl SplineConfig {
    /// Defaults for a closed spline.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Defaults for an open spline.
    pub fn open() -> Self {
        Self {
            closed: false,
            ..Self::default()
        }
    }

    /// Sets the knot parameterization exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Sets the tension.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.set_tension(tension);
        self
    }

    /// Sets the background fill color.
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.set_background_color(color);
        self
    }

    /// Sets the stroke color and width.
    pub fn with_stroke(mut self, color: impl Into<Color>, width: i64) -> Self {
        self.set_stroke_color(color);
        self.set_stroke_width(width);
        self
    }

    /// Enables control point markers.
    pub fn with_control_points(mut self, color: impl Into<Color>, radius: i64) -> Self {
        self.control_points = Some(MarkerStyle::new(color, radius));
        self
    }

    /// Enables interpolation point markers.
    pub fn with_interpolation_points(mut self, color: impl Into<Color>, radius: i64) -> Self {
        self.interpolation_points = Some(MarkerStyle::new(color, radius));
        self
    }

    /// Replaces every out-of-range value with its default.
    ///
    /// Builder methods and setters already do this; it matters for configs
    /// that were deserialized.
    pub fn sanitized(self) -> Self {
        Self {
            alpha: sanitize_alpha(self.alpha),
            tension: sanitize_tension(self.tension),
            stroke_width: self.stroke_width.max(DEFAULT_STROKE_WIDTH),
            control_points: self.control_points.map(MarkerStyle::sanitized),
            interpolation_points: self.interpolation_points.map(MarkerStyle::sanitized),
            ..self
        }
    }

    /// Sets alpha, falling back to [`DEFAULT_ALPHA`] outside [`PARAMETER_RANGE`].
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = sanitize_alpha(alpha);
    }

    /// Sets tension, falling back to [`DEFAULT_TENSION`] outside [`PARAMETER_RANGE`].
    pub fn set_tension(&mut self, tension: f64) {
        self.tension = sanitize_tension(tension);
    }

    /// Sets the stroke width, falling back to [`DEFAULT_STROKE_WIDTH`] below 1.
    pub fn set_stroke_width(&mut self, width: i64) {
        self.stroke_width = sanitize_pixels(width, DEFAULT_STROKE_WIDTH, "stroke width");
    }

    /// Sets the background fill color.
    pub fn set_background_color(&mut self, color: impl Into<Color>) {
        self.background_color = Some(color.into());
    }

    /// Sets the stroke color.
    pub fn set_stroke_color(&mut self, color: impl Into<Color>) {
        self.stroke_color = Some(color.into());
    }

    /// Shows or hides control point markers.
    pub fn set_control_points(&mut self, style: Option<MarkerStyle>) {
        self.control_points = style;
    }

    /// Shows or hides markers on every path point.
    pub fn set_interpolation_points(&mut self, style: Option<MarkerStyle>) {
        self.interpolation_points = style;
    }

    /// Whether the curve is closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Knot parameterization exponent.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Tension as set.
    #[inline]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// `1 - tension`, derived on every call.
    #[inline]
    pub fn tension_remainder(&self) -> f64 {
        1.0 - self.tension
    }

    /// Stroke width in pixels, at least 1.
    #[inline]
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Background fill color, if any.
    #[inline]
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Stroke color, if any.
    #[inline]
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke_color
    }

    /// Control point marker style, if shown.
    #[inline]
    pub fn control_points(&self) -> Option<MarkerStyle> {
        self.control_points
    }

    /// Path point marker style, if shown.
    #[inline]
    pub fn interpolation_points(&self) -> Option<MarkerStyle> {
        self.interpolation_points
    }
}
