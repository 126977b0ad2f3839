//! Dash patterns along polylines.
//!
//! Purpose
//! - Split a polyline into the "on" pieces of a repeating dash pattern, using
//!   `polyline_substring_cfg` for every piece so dashes bend around corners.
//!
//! Model
//! - A pattern is an even-length list `[on, off, on, off, ...]` of arc lengths.
//! - The phase offset shifts the pattern backwards along the line; it is kept
//!   normalized into `[0, interval)`.
//! - Zero-length dashes and gaps are folded away first (`compress_pattern`),
//!   so consecutive dashes separated by a zero gap become one piece.

use nalgebra::Vector2;

use super::measure::total_length;
use super::substring::{append_polyline, polyline_substring_cfg};
use super::types::{check_vertices, LineCfg, LineError, Polyline};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashError {
    #[error("dash pattern needs at least one on/off pair")]
    TooShort,
    #[error("dash pattern must have an even number of entries, got {len}")]
    OddLength { len: usize },
    #[error("dash entry {index} must be finite and >= 0")]
    InvalidEntry { index: usize },
    #[error("dash pattern interval must be positive and finite")]
    ZeroInterval,
    #[error("dash offset must be finite")]
    NonFiniteOffset,
    #[error("dash interval {interval} is too short for a line of length {length}")]
    TooDense { interval: f64, length: f64 },
    #[error(transparent)]
    Line(#[from] LineError),
}

/// Most pattern periods `dash_polyline` walks along one line.
pub const MAX_DASH_PERIODS: f64 = 1e6;

/// Validated dash pattern with a normalized phase offset.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern {
    array: Vec<f64>,
    offset: f64,
    interval: f64,
}

impl DashPattern {
    pub fn new(array: Vec<f64>, offset: f64) -> Result<Self, DashError> {
        if !offset.is_finite() {
            return Err(DashError::NonFiniteOffset);
        }
        if array.len() < 2 {
            return Err(DashError::TooShort);
        }
        if array.len() % 2 != 0 {
            return Err(DashError::OddLength { len: array.len() });
        }
        if let Some(index) = array.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(DashError::InvalidEntry { index });
        }
        let interval: f64 = array.iter().sum();
        if !(interval.is_finite() && interval > 0.0) {
            return Err(DashError::ZeroInterval);
        }
        Ok(Self {
            offset: adjust_offset(offset, interval),
            array,
            interval,
        })
    }

    #[inline]
    pub fn array(&self) -> &[f64] {
        &self.array
    }

    /// Phase offset in `[0, interval)`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Sum of all on/off lengths.
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Uniformly scaled copy (e.g. pattern given in pen widths).
    pub fn scaled(&self, factor: f64) -> Result<Self, DashError> {
        Self::new(
            self.array.iter().map(|v| v * factor).collect(),
            self.offset * factor,
        )
    }
}

// Negative offsets flip the phase: interval 100, offset -20 (or -120) -> 80.
fn adjust_offset(offset: f64, interval: f64) -> f64 {
    let mut o = offset;
    if o < 0.0 {
        o = -o;
        if o > interval {
            o %= interval;
        }
        o = interval - o;
        if o == interval {
            o = 0.0;
        }
    } else if o >= interval {
        o %= interval;
    }
    o
}

/// Fold zero-length dashes into the preceding gap and zero-length gaps into
/// the following dash. Input is read as `[dash, gap]` pairs; a trailing odd
/// entry is ignored.
pub fn compress_pattern(pattern: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(pattern.len());
    let mut pairs = pattern.chunks_exact(2).map(|c| (c[0], c[1]));
    while let Some((mut dash, mut gap)) = pairs.next() {
        while dash == 0.0 && !out.is_empty() {
            if let Some(last) = out.last_mut() {
                *last += gap;
            }
            match pairs.next() {
                Some((d, g)) => {
                    dash = d;
                    gap = g;
                }
                None => return out,
            }
        }
        while gap == 0.0 {
            match pairs.next() {
                Some((d, g)) => {
                    dash += d;
                    gap = g;
                }
                None => break,
            }
        }
        out.push(dash);
        out.push(gap);
    }
    out
}

/// Split `line` into the "on" pieces of `pattern`.
///
/// Pieces are returned in arc-length order; each is a substring of `line`.
/// A dash that ends exactly where the next one starts (zero gap after
/// compression) is stitched onto the previous piece.
///
/// A pattern whose interval is within `eps_len` has no visible dash and
/// yields no pieces. More than `MAX_DASH_PERIODS` periods along the line is
/// `DashError::TooDense`.
pub fn dash_polyline(
    line: &[Vector2<f64>],
    pattern: &DashPattern,
    cfg: LineCfg,
) -> Result<Vec<Polyline>, DashError> {
    check_vertices(line)?;
    let total = total_length(line);
    if line.len() < 2 || total <= cfg.eps_len || pattern.interval() <= cfg.eps_len {
        return Ok(Vec::new());
    }
    if (total + pattern.offset()) / pattern.interval() > MAX_DASH_PERIODS {
        return Err(DashError::TooDense {
            interval: pattern.interval(),
            length: total,
        });
    }
    let steps = compress_pattern(pattern.array());
    let mut pieces: Vec<Polyline> = Vec::new();
    let mut pos = -pattern.offset();
    let mut joined = false;
    let mut k = 0usize;
    while pos < total {
        let len = steps[k];
        if k % 2 == 0 {
            let a = pos.max(0.0);
            let b = (pos + len).min(total);
            if b - a > cfg.eps_len {
                let piece = polyline_substring_cfg(line, a, b, cfg)?;
                let last = if joined { pieces.last_mut() } else { None };
                if let Some(last) = last {
                    append_polyline(last, &piece);
                } else if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
        } else {
            joined = len == 0.0;
        }
        let next = pos + len;
        if len > 0.0 && next == pos {
            // absorbed: no further progress along the line
            break;
        }
        pos = next;
        k = (k + 1) % steps.len();
    }
    Ok(pieces)
}
