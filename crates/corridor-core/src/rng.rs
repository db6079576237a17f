//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The world owns a single `SimRng` seeded from `WorldConfig::seed`.  Every
//! random decision in a run — movement sampling, spawn column selection,
//! activation-order shuffling, taxi pickup rolls — draws from this one
//! stream, so the same seed always reproduces the same run.  Policy code
//! receives the RNG as an explicit `&mut SimRng` argument; tests inject a
//! fixed-seed instance to make sampled outcomes reproducible.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Simulation-level RNG wrapping a seeded `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        use rand::Rng;
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Sample an index from a discrete distribution given by `weights`.
    ///
    /// Weights need not sum to 1 — `WeightedIndex` renormalizes.  Returns
    /// `None` when every weight is zero (or the slice is empty): the caller
    /// treats that as "no viable option" and stays put.
    #[inline]
    pub fn weighted_choice(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.0))
    }
}
