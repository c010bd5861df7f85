//! Polygon measures and stroke geometry.

mod core;
mod stroke;

pub use core::{
    polygon_area, polygon_bounding_box, polygon_contains, polygon_signed_area,
    scanline_crossings, Polygon,
};
pub use stroke::{offset_sides, stroke_quads, OffsetSides, Quad};
