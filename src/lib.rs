//! # minigame-engine
//!
//! A phase-driven state machine core for casual mini-games.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `(state, event) -> state`. States are values and
//!    are never edited in place.
//!
//! 2. **Total Transitions**: every `(phase, event)` pair is defined. Events
//!    that make no sense in a phase return the state unchanged.
//!
//! 3. **Injected Effects**: randomness (`DelaySource`) and time (`Clock`)
//!    are parameters, so every session can be replayed exactly in tests.
//!
//! ## Architecture
//!
//! - **Phases**: `Idle → Armed → Active → Idle | Settled`, with `Faulted`
//!   reachable from `Armed` on premature input.
//!
//! - **Timers Stay Outside**: the engine samples the countdown; the host
//!   owns the timer and follows `GameState::timer_directive`.
//!
//! - **Persistent History**: round outcomes live in an `im::Vector`, so
//!   holding on to old states is O(1).
//!
//! ## Modules
//!
//! - `core`: phases, outcomes, state, configuration, RNG, clock
//! - `rules`: `GameStateEngine` and events
//! - `stats`: averages, tiers, percentiles
//! - `report`: summaries, mission reports, snapshots
//! - `games`: presets (reaction test)

pub mod core;
pub mod error;
pub mod games;
pub mod report;
pub mod rules;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock, Timestamp,
    DelayRange, EngineConfig,
    DelaySource, FixedDelay, GameRng, GameRngState,
    GamePhase, RoundOutcome,
    GameState, TimerDirective,
};

pub use crate::error::{ConfigError, SnapshotError};

pub use crate::rules::{initialize, GameEvent, GameStateEngine};

pub use crate::stats::{
    average_measurement, best_measurement,
    Breakpoint, PercentileTable, Tier, TierTable,
};

pub use crate::report::{MissionReport, SessionSnapshot, SessionSummary};

pub use crate::games::reaction::{ReactionGame, ReactionGameBuilder};
