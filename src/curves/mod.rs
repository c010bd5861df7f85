//! Curve interpolation through control points.

mod catmull_rom;

pub use catmull_rom::{
    prune_control_points, CatmullRom2, CatmullRomSegment, MIN_KNOT_SPACING, MIN_SEGMENT_SAMPLES,
    SAMPLE_SPACING,
};
