//! Deterministic randomness for countdown delays.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical delay sequence
//! - **Serializable**: O(1) state capture and restore for snapshots
//! - **Context streams**: Independent sequences per game on one seed
//! - **Swappable**: the engine only sees [`DelaySource`]
//!
//! ```
//! use minigame_engine::core::{DelayRange, DelaySource, GameRng};
//!
//! let range = DelayRange::new(1_000, 5_000).unwrap();
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.sample_delay(&range), b.sample_delay(&range));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::DelayRange;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Source of countdown delays for `arm`.
pub trait DelaySource {
    /// Draw a delay uniformly from `range` (`min` inclusive, `max` exclusive).
    ///
    /// An empty range yields `range.min_ms`.
    fn sample_delay(&mut self, range: &DelayRange) -> u64;
}

/// Seedable RNG backing the default delay source.
///
/// Uses ChaCha8 for speed while keeping delays unpredictable to players.
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

    /// Seed from OS entropy, for live play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Useful when one platform seed drives several games: the same
    /// context always produces the same stream from the same seed.
    /// The context is hashed with FNV-1a, so streams stay identical
    /// across builds and platforms.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_hash = context.bytes().fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
        Self::new(self.seed.wrapping_add(context_hash.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    /// Generate a random u64 in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u64>) -> u64 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DelaySource for GameRng {
    fn sample_delay(&mut self, range: &DelayRange) -> u64 {
        if range.min_ms >= range.max_ms {
            return range.min_ms;
        }
        self.gen_range(range.min_ms..range.max_ms)
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position, so restore cost does not depend on how
/// many delays were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Delay source that always returns the same value, clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay(pub u64);

impl DelaySource for FixedDelay {
    fn sample_delay(&mut self, range: &DelayRange) -> u64 {
        if range.min_ms >= range.max_ms {
            return range.min_ms;
        }
        self.0.clamp(range.min_ms, range.max_ms - 1)
    }
}

impl<D: DelaySource + ?Sized> DelaySource for &mut D {
    fn sample_delay(&mut self, range: &DelayRange) -> u64 {
        (**self).sample_delay(range)
    }
}
