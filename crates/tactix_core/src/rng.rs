//! Seedable randomness for the opening coin flip.

use crate::types::Player;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG owned by the engine.
///
/// The same seed always yields the same sequence of opening players,
/// so tests fix the seed while interactive frontends seed from
/// entropy.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Creates a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a new RNG seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Coin flip for the opening player.
    pub fn flip(&mut self) -> Player {
        if self.inner.r#gen::<bool>() {
            Player::X
        } else {
            Player::O
        }
    }
}
