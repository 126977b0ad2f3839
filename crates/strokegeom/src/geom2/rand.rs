//! Random polylines in 2D (bounded-turn random walk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for polylines used by property
//!   tests and benches of the substring/dash routines.
//!
//! Model
//! - Start at `origin` with a random heading; each step turns by at most
//!   `max_turn` radians and advances by a length drawn from `[step_min, step_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polyline;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(2),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Random-walk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    pub vertex_count: VertexCount,
    /// Step length range; `step_min` is clamped to >= 0 and `step_max` to >= `step_min`.
    pub step_min: f64,
    pub step_max: f64,
    /// Maximum heading change per step, radians. Clamped to [0, π].
    pub max_turn: f64,
    pub origin: Vector2<f64>,
}
impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            step_min: 1.0,
            step_max: 10.0,
            max_turn: std::f64::consts::FRAC_PI_2,
            origin: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on both halves.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random polyline by a bounded-turn walk.
pub fn draw_polyline_walk(cfg: WalkCfg, tok: ReplayToken) -> Polyline {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let lo = cfg.step_min.max(0.0);
    let hi = cfg.step_max.max(lo);
    let turn = cfg.max_turn.clamp(0.0, std::f64::consts::PI);
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut p = cfg.origin;
    let mut out = Vec::with_capacity(n);
    out.push(p);
    for _ in 1..n {
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * turn;
        let step = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        p += Vector2::new(heading.cos(), heading.sin()) * step;
        out.push(p);
    }
    out
}
