//! Seeded random integer point clouds.
//!
//! Used by property tests, the criterion benches, and `cli gen`. The same
//! `(cfg, seed)` pair always yields the same cloud.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Vec2i;

/// Closed coordinate box `[min, max]²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds2 {
    pub min: i64,
    pub max: i64,
}

impl Bounds2 {
    /// Symmetric box `[-|r|, |r|]²`; `i64::MIN` saturates to `i64::MAX`.
    #[inline]
    pub fn symmetric(r: i64) -> Self {
        let r = i64::try_from(r.unsigned_abs()).unwrap_or(i64::MAX);
        Self { min: -r, max: r }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub bounds: Bounds2,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2::symmetric(1000),
        }
    }
}

/// Draw `cfg.count` points uniformly from `cfg.bounds` (duplicates possible).
pub fn sample_cloud(cfg: CloudCfg, seed: u64) -> Vec<Vec2i> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = if cfg.bounds.min <= cfg.bounds.max {
        (cfg.bounds.min, cfg.bounds.max)
    } else {
        (cfg.bounds.max, cfg.bounds.min)
    };
    (0..cfg.count)
        .map(|_| Vector2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect()
}
