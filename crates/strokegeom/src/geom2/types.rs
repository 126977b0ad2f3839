//! Basic polyline types and tolerances.
//!
//! - `Polyline`: owned ordered vertex list; inputs are borrowed as slices.
//! - `LineCfg`: centralizes the length epsilon for vertex coincidence.
//! - `LineError`: the only failure kind is invalid (non-finite) input.

use nalgebra::Vector2;

/// Ordered polyline vertices in device space.
pub type Polyline = Vec<Vector2<f64>>;

/// Polyline configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct LineCfg {
    /// Two arc-length positions (or two points) closer than this are the same.
    pub eps_len: f64,
}

impl Default for LineCfg {
    fn default() -> Self {
        Self { eps_len: 1e-9 }
    }
}

impl LineCfg {
    #[inline]
    pub(crate) fn coincident(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        (a - b).norm() <= self.eps_len
    }
}

/// Invalid-argument errors. Degenerate ranges are not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("invalid argument: distance {value} is not finite")]
    NonFiniteDistance { value: f64 },
    #[error("invalid argument: vertex {index} has non-finite coordinates")]
    NonFiniteVertex { index: usize },
}

pub(crate) fn check_distance(value: f64) -> Result<f64, LineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LineError::NonFiniteDistance { value })
    }
}

pub(crate) fn check_vertices(line: &[Vector2<f64>]) -> Result<(), LineError> {
    match line
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(LineError::NonFiniteVertex { index }),
        None => Ok(()),
    }
}
