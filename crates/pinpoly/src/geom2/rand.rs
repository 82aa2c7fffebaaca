//! Random polygons and query points (uniform boxes + replay tokens).
//!
//! Purpose
//! - Reproducible inputs for the CLI, tests and benchmarks.
//!
//! Model
//! - Polygon: `n` points with each coordinate drawn from
//!   `center ± U(-radius, radius)`, then sorted by angle about their centroid.
//!   Independent draws in a box around a fixed center are star-shaped about
//!   their centroid with high probability, not always.
//! - Query points: uniform in `[0, width) × [0, height)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::order::order_by_angle;

/// Polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PolygonCfg {
    pub vertices: usize,
    /// Half side of the sampling box around `center`.
    pub radius: f64,
    pub center: Vector2<f64>,
}

impl Default for PolygonCfg {
    fn default() -> Self {
        Self {
            vertices: 10,
            radius: 200.0,
            center: Vector2::new(400.0, 400.0),
        }
    }
}

/// Query point sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointsCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for PointsCfg {
    fn default() -> Self {
        Self {
            count: 2000,
            width: 800.0,
            height: 800.0,
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
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Same seed, next index.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw a polygon boundary; returns `(polygon, centroid)`.
///
/// `None` if `vertices < 3` or `radius` is not finite and positive.
pub fn draw_polygon(cfg: PolygonCfg, tok: ReplayToken) -> Option<(Vec<Vector2<f64>>, Vector2<f64>)> {
    if cfg.vertices < 3 || !cfg.radius.is_finite() || cfg.radius <= 0.0 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let r = cfg.radius;
    let pts: Vec<Vector2<f64>> = (0..cfg.vertices)
        .map(|_| {
            Vector2::new(
                cfg.center.x + rng.gen_range(-r..r),
                cfg.center.y + rng.gen_range(-r..r),
            )
        })
        .collect();
    order_by_angle(&pts)
}

/// Draw `cfg.count` query points. Empty if the box has no positive area.
pub fn draw_points(cfg: PointsCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    if !(cfg.width > 0.0 && cfg.height > 0.0) {
        return Vec::new();
    }
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| Vector2::new(rng.gen::<f64>() * cfg.width, rng.gen::<f64>() * cfg.height))
        .collect()
}
