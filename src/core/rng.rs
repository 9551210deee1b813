//! Deterministic random number generation.
//!
//! Every source of randomness in a game (deck shuffles, character
//! assignment, weapon placement) draws from one seeded `GameRng`, so a game
//! replayed from the same seed and the same commands is identical.
//!
//! ```
//! use clueless_engine::core::GameRng;
//!
//! let (mut a, mut b) = (GameRng::new(42), GameRng::new(42));
//! let (mut xs, mut ys) = ([1, 2, 3, 4, 5], [1, 2, 3, 4, 5]);
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use std::hash::Hasher;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Used to keep setup randomness (case file, dealing) separate from
    /// registration randomness (character assignment), so registering an
    /// extra player never changes how the cards fall for a given seed.
    ///
    /// The context seed is an `FxHasher` mix of the seed and the context
    /// bytes, which does not change between compiler releases.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
