//! Process-wide random source for bot move selection.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seeded random source; the seed is kept so a session can be replayed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a source from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source from a fresh random seed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Uses `seed` when given, a random seed otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    /// The seed this source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Picks one item uniformly, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
