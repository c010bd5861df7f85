//! Error types for spline operations.

use thiserror::Error;

/// Errors that abort a spline draw.
///
/// Every variant is raised before the first canvas call, so a failed draw
/// leaves the canvas untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// The canvas reported itself unusable.
    #[error("invalid canvas")]
    InvalidCanvas,

    /// Not enough control points to form a spline.
    #[error("a minimum of 3 control points is required, found {found}")]
    TooFewPoints {
        /// Number of control points present.
        found: usize,
    },

    /// Control points are too close together for reliable computation.
    #[error("degenerate geometry: control points too close together")]
    DegenerateGeometry,
}
