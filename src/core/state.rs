//! Session state.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to render a session:
//! - Phase, current round, total rounds
//! - Round history
//! - Activation timestamp and pending countdown
//!
//! States are values. Every transition builds a new `GameState` from the
//! previous one; nothing is updated in place. History is an `im::Vector`,
//! so keeping old states around (undo, snapshots, re-render diffing) costs
//! O(1) per clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::outcome::RoundOutcome;
use super::phase::GamePhase;

/// What the host should do with its countdown timer after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerDirective {
    /// Cancel any pending timer, then fire `activate` after this many ms.
    Schedule(u64),
    /// No timer should be pending.
    Cancel,
}

/// Immutable session state.
///
/// Invariants:
/// - `1 <= current_round <= total_rounds`
/// - `history.len()` equals completed rounds: below `total_rounds` until
///   `Settled`, equal afterwards
/// - `activation_timestamp.is_some()` iff `phase == Active`
///
/// Deserialization runs [`GameState::check_invariants`], so a decoded
/// state is always one the engine could have produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    phase: GamePhase,
    current_round: u32,
    total_rounds: u32,
    history: Vector<RoundOutcome>,
    activation_timestamp: Option<Timestamp>,
    pending_delay: u64,
    faults: u32,
}

impl GameState {
    /// Create the starting state of a session.
    ///
    /// ## Defaults
    ///
    /// - `phase`: `Idle`
    /// - `current_round`: 1
    /// - `history`: empty
    /// - `pending_delay`: 0
    #[must_use]
    pub fn new(total_rounds: u32) -> Self {
        assert!(total_rounds > 0, "Must have at least 1 round");

        Self {
            phase: GamePhase::Idle,
            current_round: 1,
            total_rounds,
            history: Vector::new(),
            activation_timestamp: None,
            pending_delay: 0,
            faults: 0,
        }
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Round being played (1-indexed).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Rounds in this session.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Completed rounds, in round order.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundOutcome> {
        &self.history
    }

    /// When the current round went `Active`.
    #[must_use]
    pub fn activation_timestamp(&self) -> Option<Timestamp> {
        self.activation_timestamp
    }

    /// Countdown sampled by the last `arm`, in ms.
    #[must_use]
    pub fn pending_delay(&self) -> u64 {
        self.pending_delay
    }

    /// Premature inputs this session. Not part of any statistic.
    #[must_use]
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn completed_rounds(&self) -> usize {
        self.history.len()
    }

    /// True when the round in progress is the final one.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.current_round == self.total_rounds
    }

    /// Timer action implied by the current phase.
    #[must_use]
    pub fn timer_directive(&self) -> TimerDirective {
        match self.phase {
            GamePhase::Armed => TimerDirective::Schedule(self.pending_delay),
            GamePhase::Idle | GamePhase::Active | GamePhase::Faulted | GamePhase::Settled => {
                TimerDirective::Cancel
            }
        }
    }

    // === Successor construction ===

    /// Successor in `Armed` with a fresh countdown.
    pub(crate) fn armed(&self, delay: u64) -> Self {
        Self {
            phase: GamePhase::Armed,
            activation_timestamp: None,
            pending_delay: delay,
            ..self.clone()
        }
    }

    /// Successor in `Active`, stamped with `at`.
    pub(crate) fn activated(&self, at: Timestamp) -> Self {
        Self {
            phase: GamePhase::Active,
            activation_timestamp: Some(at),
            ..self.clone()
        }
    }

    /// Successor after a premature input.
    pub(crate) fn faulted(&self) -> Self {
        Self {
            phase: GamePhase::Faulted,
            activation_timestamp: None,
            faults: self.faults.saturating_add(1),
            ..self.clone()
        }
    }

    /// Successor that records `measurement` for the current round and moves
    /// to the next round, or settles after the last one.
    pub(crate) fn with_outcome(&self, measurement: u64) -> Self {
        let mut history = self.history.clone();
        history.push_back(RoundOutcome::new(measurement, self.current_round));

        let (phase, current_round) = if self.is_final_round() {
            (GamePhase::Settled, self.current_round)
        } else {
            (GamePhase::Idle, self.current_round + 1)
        };

        Self {
            phase,
            current_round,
            history,
            activation_timestamp: None,
            ..self.clone()
        }
    }

    // === Validation ===

    /// Check every state invariant.
    ///
    /// States built by the engine always pass; this guards states that
    /// arrive from outside (snapshots, deserialized payloads).
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.total_rounds == 0 {
            return Err("total_rounds is zero");
        }
        if self.current_round == 0 || self.current_round > self.total_rounds {
            return Err("current_round out of range");
        }
        if self.activation_timestamp.is_some() != (self.phase == GamePhase::Active) {
            return Err("activation_timestamp must be set exactly while active");
        }

        let completed = self.history.len();
        let total = self.total_rounds as usize;
        let expected = if self.phase == GamePhase::Settled {
            if self.current_round != self.total_rounds {
                return Err("settled before the final round");
            }
            total
        } else {
            self.current_round as usize - 1
        };
        if completed != expected {
            return Err("history length does not match completed rounds");
        }

        let ordered = self
            .history
            .iter()
            .zip(1u32..)
            .all(|(outcome, index)| outcome.round_index == index);
        if !ordered {
            return Err("history is not in round order");
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        struct Raw {
            phase: GamePhase,
            current_round: u32,
            total_rounds: u32,
            history: Vector<RoundOutcome>,
            activation_timestamp: Option<Timestamp>,
            pending_delay: u64,
            faults: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let state = GameState {
            phase: raw.phase,
            current_round: raw.current_round,
            total_rounds: raw.total_rounds,
            history: raw.history,
            activation_timestamp: raw.activation_timestamp,
            pending_delay: raw.pending_delay,
            faults: raw.faults,
        };
        state.check_invariants().map_err(serde::de::Error::custom)?;
        Ok(state)
    }
}
