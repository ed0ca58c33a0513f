//! Game phases.
//!
//! Every mini-game moves through the same five phases. Games attach their
//! own vocabulary via [`GamePhase::label`]; the engine only matches on the
//! variant.

use serde::{Deserialize, Serialize};

/// Discrete mode of a session.
///
/// ```text
///  Idle ──input──▶ Armed ──timer──▶ Active ──input──▶ Idle (next round)
///                   │                  └─────input──▶ Settled (last round)
///                 input
///                   ▼
///                Faulted ──input──▶ Armed
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a round.
    #[default]
    #[serde(rename = "waiting")]
    Idle,
    /// Countdown running; input now is premature.
    #[serde(rename = "ready")]
    Armed,
    /// Stimulus shown; the next input is measured.
    #[serde(rename = "go")]
    Active,
    /// Premature input was detected.
    #[serde(rename = "tooEarly")]
    Faulted,
    /// All rounds complete.
    #[serde(rename = "result")]
    Settled,
}

impl GamePhase {
    /// All phases in lifecycle order.
    pub const ALL: [GamePhase; 5] = [
        GamePhase::Idle,
        GamePhase::Armed,
        GamePhase::Active,
        GamePhase::Faulted,
        GamePhase::Settled,
    ];

    /// Game-facing label, as shown by the reaction test.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GamePhase::Idle => "waiting",
            GamePhase::Armed => "ready",
            GamePhase::Active => "go",
            GamePhase::Faulted => "tooEarly",
            GamePhase::Settled => "result",
        }
    }

    /// True while a countdown timer should be pending.
    #[must_use]
    pub const fn is_counting_down(self) -> bool {
        matches!(self, GamePhase::Armed)
    }

    /// True once every round has been played.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, GamePhase::Settled)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
