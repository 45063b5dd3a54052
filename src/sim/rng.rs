//! Random number source consumed by the simulation
//!
//! All draws are inclusive on both ends, matching how the balance tables are
//! written ("1 in N" means `int_in(1, n) == 1`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws over caller-specified ranges
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;
    /// Uniform real in `[lo, hi]`
    fn real_in(&mut self, lo: f32, hi: f32) -> f32;

    /// True with odds 1-in-`n`
    fn one_in(&mut self, n: i32) -> bool {
        self.int_in(1, n.max(1)) == 1
    }
}

impl RandomSource for Pcg32 {
    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
        self.random_range(lo..=hi)
    }

    fn real_in(&mut self, lo: f32, hi: f32) -> f32 {
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
        self.random_range(lo..=hi)
    }
}

/// Seeded stream for a game session
pub fn seeded(seed: u64) -> Box<dyn RandomSource> {
    Box::new(Pcg32::seed_from_u64(seed))
}

/// Test double that replays queued draws, then answers with the upper bound
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRng {
    ints: std::collections::VecDeque<i32>,
    reals: std::collections::VecDeque<f32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_ints(ints: &[i32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            reals: Default::default(),
        }
    }

    pub(crate) fn boxed(self) -> Box<dyn RandomSource> {
        Box::new(self)
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.ints.pop_front().map(|v| v.clamp(lo, hi)).unwrap_or(hi)
    }

    fn real_in(&mut self, lo: f32, hi: f32) -> f32 {
        self.reals.pop_front().map(|v| v.clamp(lo, hi)).unwrap_or(hi)
    }
}
