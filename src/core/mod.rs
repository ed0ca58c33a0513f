//! Core engine types: phases, outcomes, state, configuration, RNG, clock.
//!
//! This module contains the building blocks shared by every mini-game.
//! Games configure these via `EngineConfig` rather than modifying the core.

pub mod clock;
pub mod config;
pub mod outcome;
pub mod phase;
pub mod rng;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{DelayRange, EngineConfig};
pub use outcome::RoundOutcome;
pub use phase::GamePhase;
pub use rng::{DelaySource, FixedDelay, GameRng, GameRngState};
pub use state::{GameState, TimerDirective};
