//! Seeded randomness for playouts.
//!
//! A playout driven by `GameRng::new(seed)` always picks the same moves, so
//! a failing random game can be replayed from its seed alone.
//!
//! ```
//! use rust_nttt::core::GameRng;
//!
//! let moves = ["a", "b", "c", "d"];
//! let first: Vec<_> = {
//!     let mut rng = GameRng::new(9);
//!     (0..5).map(|_| rng.pick(&moves)).collect()
//! };
//! let mut rng = GameRng::new(9);
//! let again: Vec<_> = (0..5).map(|_| rng.pick(&moves)).collect();
//! assert_eq!(first, again);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment separating the seeds of successive forks.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this stream started from; logged with each playout.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a fresh stream, e.g. one per playout in a batch.
    ///
    /// The n-th fork of a given seed is always the same stream, and
    /// forking does not advance this stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index below `len`, `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Uniformly pick one of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
