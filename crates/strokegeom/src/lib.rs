//! Polyline geometry for line and arrow symbol rendering.
//!
//! The renderer hands us device-space polylines and arc-length offsets; we
//! return sub-polylines (arrow shafts, dash pieces) and stitch them back
//! together without duplicate join vertices.
//!
//! API Policy
//! - Functions are pure and take `&[Vector2<f64>]`; only `append_polyline`
//!   mutates, and only its `target`.
//! - Degenerate numeric ranges produce an empty polyline, never an error.
//!   `LineError` is reserved for non-finite input.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{LineCfg, LineError, Polyline};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::dash::{compress_pattern, dash_polyline, DashError, DashPattern};
    pub use crate::geom2::rand::{draw_polyline_walk, ReplayToken, VertexCount, WalkCfg};
    pub use crate::geom2::{
        append_polyline, arc_lengths, point_at_distance, polyline_substring,
        polyline_substring_cfg, segment_lengths, stitch, total_length, LineCfg, LineError,
        Polyline,
    };
    pub use nalgebra::Vector2 as Vec2;
}
