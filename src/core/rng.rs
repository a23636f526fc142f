//! Deterministic random number generation.
//!
//! Every battle owns exactly one `BattleRng`. All randomness in a battle
//! (deck shuffles, enemy decision rolls, rolled enemy max HP) flows through
//! it, so a battle replayed with the same seed and the same player choices
//! produces an identical event log.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG driving all of a battle's randomness.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform value in `[0, 1)`.
    ///
    /// Enemy behavior tables are written against a single uniform roll.
    pub fn roll(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random integer in the given inclusive range.
    ///
    /// Used for rolled enemy max HP (e.g. 50..=56).
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
