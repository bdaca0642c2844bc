//! Deterministic chance outcomes for the host.
//!
//! The engine never rolls dice during a transition. A host that needs coin
//! flips asks a `ChanceRoller` for a `ChanceParams` before submitting the
//! attack, so the flips become part of the recorded action and replay
//! exactly.
//!
//! ## Usage
//!
//! ```
//! use rust_ptcg::core::ChanceRoller;
//!
//! let mut roller = ChanceRoller::new(42);
//! let chance = roller.roll(2);
//!
//! assert!(chance.single_coin_flip.is_some());
//! assert!(chance.multiple_coin_flip_heads.unwrap() <= 2);
//!
//! // Same seed, same flips.
//! assert_eq!(ChanceRoller::new(42).roll(2), chance);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{ChanceParams, CoinFlip};

/// Seeded coin flipper.
///
/// Uses ChaCha8 so sequences are identical across platforms.
#[derive(Clone, Debug)]
pub struct ChanceRoller {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ChanceRoller {
    /// Create a roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent, deterministic roller.
    ///
    /// Each fork produces a different sequence; the n-th fork of a given
    /// seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Flip one coin.
    pub fn flip(&mut self) -> CoinFlip {
        if self.inner.gen_bool(0.5) {
            CoinFlip::Heads
        } else {
            CoinFlip::Tails
        }
    }

    /// Roll every kind of chance outcome an attack may read.
    ///
    /// `coin_count` flips are made for the multiple-flip count.
    pub fn roll(&mut self, coin_count: u32) -> ChanceParams {
        let single = self.flip();
        let multiple = (0..coin_count)
            .filter(|_| self.flip() == CoinFlip::Heads)
            .count() as u32;
        let mut continuous = 0;
        while self.flip() == CoinFlip::Heads {
            continuous += 1;
        }

        ChanceParams {
            single_coin_flip: Some(single),
            multiple_coin_flip_heads: Some(multiple),
            continuous_coin_flip_heads: Some(continuous),
            ..ChanceParams::default()
        }
    }
}
