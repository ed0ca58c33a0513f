//! Round outcomes: the scored result of one round.

use serde::{Deserialize, Serialize};

/// Result of a completed round.
///
/// Produced once when a round ends and appended to the session history.
/// The measurement unit is game-defined (milliseconds for the reaction
/// test, points for score games).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Measured value for the round.
    pub measurement: u64,

    /// Round number (1-indexed).
    pub round_index: u32,
}

impl RoundOutcome {
    /// Create a new outcome.
    #[must_use]
    pub const fn new(measurement: u64, round_index: u32) -> Self {
        Self {
            measurement,
            round_index,
        }
    }
}
