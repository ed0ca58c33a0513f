//! Reaction-time test.
//!
//! The reference game for the engine:
//! - The player taps to start a round
//! - After a random 1-5 second countdown the screen turns green
//! - The time until the next tap is the round's measurement
//! - Tapping during the countdown is "too early" and retries the round
//!
//! Five rounds by default; the result screen shows the average, the best
//! round, a tier and a (rough) percentile.

mod game;

pub use game::{
    classify, percentile_estimate, reaction_percentiles, reaction_tiers, ReactionGame,
    ReactionGameBuilder, GAME_ID, WIN_THRESHOLD_MS,
};
