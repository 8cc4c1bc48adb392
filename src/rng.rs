//! Random source for mine placement.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++), which is fast and
//! works on `wasm32`. Entropy is sourced from `getrandom` (browser crypto API
//! in the front-end, the OS everywhere else).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable RNG handed to the game at construction.
///
/// Seed it for deterministic replay in tests, or create it from system
/// entropy for real play.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: SmallRng,
}

impl GameRng {
    /// Create from system entropy.
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in [0, max).
    #[inline(always)]
    pub fn gen_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
