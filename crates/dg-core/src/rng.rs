//! Random number generation for dungeon layouts
//!
//! Uses a seeded ChaCha RNG so any layout can be regenerated from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generation random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was built from, so a layout
/// produced with an entropy seed can still be replayed.
#[derive(Debug, Clone)]
pub struct GenRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GenRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Seeded RNG when a seed is given, entropy otherwise
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..n`
    ///
    /// Returns 0 if n is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform integer in `lo..=hi`
    ///
    /// Returns `lo` if the range is empty.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Pick `count` distinct elements uniformly, without replacement
    ///
    /// Partial Fisher-Yates: only the first `count` slots are settled.
    /// Asking for more elements than exist returns all of them.
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let count = count.min(pool.len());
        for i in 0..count {
            let j = i + self.below(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}
