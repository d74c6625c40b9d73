//! Injectable randomness.
//!
//! Every probabilistic decision in the engine (tier draw, inclusion filter,
//! diversion gate) goes through [`RandomSource`], so tests can substitute a
//! scripted sequence and production runs use the seeded [`SimRng`].
//!
//! # Determinism
//!
//! The whole engine is single-threaded and consumes randomness in a fixed
//! order (selection first, then per-agent gates in rotation order), so one
//! `SimRng` seeded from `SimConfig::seed` reproduces a run exactly.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A source of uniform samples plus the two derived draws the engine needs.
///
/// Only [`unit`](Self::unit) is required.  The provided methods are written
/// in terms of it so a scripted implementation controls every outcome.
pub trait RandomSource {
    /// A uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// `true` with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// Pick an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if `weights` is empty or sums to zero.
    fn pick_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| w as u64).sum();
        if total == 0 {
            return None;
        }
        let target = self.unit() * total as f64;
        let mut cumulative = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            cumulative += w as f64;
            if w > 0 && target < cumulative {
                return Some(i);
            }
        }
        // Float rounding at the top edge: fall back to the last live tier.
        weights.iter().rposition(|&w| w > 0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG backed by `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream, e.g. for an external collaborator
    /// that needs its own randomness without perturbing the scheduler's.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        // WeightedIndex rejects empty and all-zero weight sets.
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.0))
    }
}
