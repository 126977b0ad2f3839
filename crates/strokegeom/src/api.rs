//! Curated surface for renderer-side callers.
//!
//! - Substring + append are the two entry points the line/arrow symbol code
//!   needs; everything else here is convenience.
//! - Prefer these re-exports over reaching into `geom2` submodules.

// Cutting and stitching
pub use crate::geom2::{
    append_polyline, polyline_substring, polyline_substring_cfg, stitch, LineCfg, LineError,
    Polyline,
};
// Measuring
pub use crate::geom2::{arc_lengths, point_at_distance, segment_lengths, total_length};
// Dashing
pub use crate::geom2::dash::{
    compress_pattern, dash_polyline, DashError, DashPattern as StrokeDashPattern,
};
// Random polylines
pub use crate::geom2::rand::{
    draw_polyline_walk, ReplayToken as PolylineReplay, VertexCount, WalkCfg,
};
