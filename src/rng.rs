//! Seedable random number generation shared by every game.
//!
//! Computer opponents, personality draws, and deck shuffles all pull from a
//! [`GameRng`]. Seeding it from configuration makes a whole session
//! reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().r#gen::<u64>();
        debug!(seed, "Seeded RNG from entropy");
        Self::new(seed)
    }

    /// Creates an RNG from an optional configured seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent stream, e.g. one per game component.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.r#gen::<u64>())
    }

    /// Generates a value in `low..=high`.
    pub fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    /// Returns true with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Chooses a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.gen_inclusive(1, 100), b.gen_inclusive(1, 100));
        }
    }

    #[test]
    fn test_inclusive_bounds() {
        let mut rng = GameRng::new(1);
        for _ in 0..200 {
            let n = rng.gen_inclusive(1, 3);
            assert!((1..=3).contains(&n));
        }
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(3);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        assert_eq!(a.fork().seed(), b.fork().seed());
    }
}
