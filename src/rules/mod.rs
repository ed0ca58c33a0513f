//! Transition rules.
//!
//! `GameStateEngine` implements the phase table every mini-game follows:
//! - Which events are meaningful in which phase
//! - How each event builds the successor state
//! - When a session settles
//!
//! Presentation layers call into the engine and read the resulting state;
//! they never edit a `GameState` directly.

pub mod engine;
pub mod event;

pub use engine::{initialize, GameStateEngine};
pub use event::GameEvent;
