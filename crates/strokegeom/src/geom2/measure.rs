//! Arc-length measurement along polylines.
//!
//! - `segment_lengths` / `arc_lengths`: per-segment and cumulative lengths.
//! - `point_at_distance`: linear interpolation at a signed arc-length position.
use nalgebra::Vector2;

/// Euclidean length of every segment; `line.len() - 1` entries (none for < 2 points).
pub fn segment_lengths(line: &[Vector2<f64>]) -> Vec<f64> {
    line.windows(2).map(|w| (w[1] - w[0]).norm()).collect()
}

/// Cumulative arc length at each vertex, starting at 0.
pub fn arc_lengths(line: &[Vector2<f64>]) -> Vec<f64> {
    let mut out = Vec::with_capacity(line.len());
    let mut acc = 0.0;
    if !line.is_empty() {
        out.push(acc);
    }
    for w in line.windows(2) {
        acc += (w[1] - w[0]).norm();
        out.push(acc);
    }
    out
}

#[inline]
pub fn total_length(line: &[Vector2<f64>]) -> f64 {
    line.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Resolve a signed distance to a forward arc-length position.
///
/// `None` when a from-end distance reaches past the first vertex.
#[inline]
pub(crate) fn resolve_distance(d: f64, total: f64) -> Option<f64> {
    if d >= 0.0 {
        Some(d)
    } else if -d > total {
        None
    } else {
        Some(total + d)
    }
}

/// Point `dist` units from `a` towards `b`, where `seg_len = |b - a| > 0`.
#[inline]
pub(crate) fn lerp_by_distance(
    a: Vector2<f64>,
    b: Vector2<f64>,
    dist: f64,
    seg_len: f64,
) -> Vector2<f64> {
    a + (b - a) * (dist / seg_len)
}

/// Point at signed arc-length distance `d` along `line`.
///
/// Returns `None` for fewer than 2 vertices, a non-finite `d`, or a position
/// outside `[0, total_length]`.
pub fn point_at_distance(line: &[Vector2<f64>], d: f64) -> Option<Vector2<f64>> {
    if line.len() < 2 || !d.is_finite() {
        return None;
    }
    let arc = arc_lengths(line);
    let total = *arc.last()?;
    let pos = resolve_distance(d, total)?;
    if pos > total {
        return None;
    }
    // first segment whose far end reaches `pos`
    let k = arc[1..].iter().position(|&s| s >= pos)?;
    let seg_len = arc[k + 1] - arc[k];
    if seg_len <= 0.0 {
        return Some(line[k + 1]);
    }
    Some(lerp_by_distance(line[k], line[k + 1], pos - arc[k], seg_len))
}
