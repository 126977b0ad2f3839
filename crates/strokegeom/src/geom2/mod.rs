//! 2D polyline geometry (arc-length based).
//!
//! Purpose
//! - Cut a polyline between two signed arc-length positions and stitch the
//!   pieces back together; measure lengths; split by dash patterns.
//! - Keep the API small and numerically explicit (eps-aware via `LineCfg`).
//!
//! Conventions
//! - Distances `d >= 0` count from the first vertex, `d < 0` count back from
//!   the last vertex.
//! - Code cross-refs: `substring::polyline_substring`, `measure::arc_lengths`,
//!   `dash::DashPattern`

pub mod dash;
mod measure;
pub mod rand;
mod substring;
mod types;

pub use measure::{arc_lengths, point_at_distance, segment_lengths, total_length};
pub use substring::{append_polyline, polyline_substring, polyline_substring_cfg, stitch};
pub use types::{LineCfg, LineError, Polyline};
