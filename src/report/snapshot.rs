//! Save and resume a session.
//!
//! A snapshot pairs the state with the delay RNG position, so a resumed
//! session draws exactly the countdowns the original would have drawn.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, GameState};
use crate::error::SnapshotError;

/// Persistable session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session state.
    pub state: GameState,
    /// Delay RNG position.
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Capture a state and the RNG that drives it.
    #[must_use]
    pub fn capture(state: &GameState, rng: &GameRng) -> Self {
        Self {
            state: state.clone(),
            rng: rng.state(),
        }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes. States that break an invariant are rejected by
    /// `GameState`'s deserializer.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Split back into a state and a live RNG.
    #[must_use]
    pub fn restore(self) -> (GameState, GameRng) {
        let rng = GameRng::from_state(&self.rng);
        (self.state, rng)
    }
}
