//! The phase-driven state machine shared by every mini-game.
//!
//! `GameStateEngine` owns the two impure inputs of a session, the delay
//! source and the clock, and turns `(state, event)` pairs into successor
//! states:
//! - `arm` samples a countdown
//! - `activate` stamps the moment the stimulus appears
//! - `handle_input` dispatches the player's action on the current phase
//!
//! Transitions are total. A pair with no row in the table returns the input
//! state unchanged and emits a `debug` record, so a misordered call from
//! the presentation layer can never corrupt a session.

use tracing::{debug, trace};

use crate::core::{
    Clock, DelaySource, EngineConfig, GamePhase, GameRng, GameState, SystemClock,
};
use crate::error::ConfigError;

use super::event::GameEvent;

/// Starting state of a session with `total_rounds` rounds.
///
/// ```
/// use minigame_engine::core::GamePhase;
/// use minigame_engine::rules::initialize;
///
/// let state = initialize(3);
/// assert_eq!(state.phase(), GamePhase::Idle);
/// assert_eq!(state.current_round(), 1);
/// assert!(state.history().is_empty());
/// ```
#[must_use]
pub fn initialize(total_rounds: u32) -> GameState {
    GameState::new(total_rounds)
}

/// State machine engine.
///
/// Generic over the delay source `D` and clock `C` so tests can pin both.
/// Live play uses the defaults: a seeded [`GameRng`] and [`SystemClock`].
///
/// ## Implementation Notes
///
/// - States are taken by reference and successors returned by value
/// - `arm` and anything that may arm take `&mut self` (the delay source
///   advances)
/// - The engine never holds a timer; callers follow
///   [`GameState::timer_directive`] after each transition
#[derive(Clone, Debug)]
pub struct GameStateEngine<D = GameRng, C = SystemClock> {
    config: EngineConfig,
    delays: D,
    clock: C,
}

impl GameStateEngine {
    /// Engine for live play: entropy-seeded delays, real clock.
    pub fn live(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy(), SystemClock::new())
    }
}

impl<D: DelaySource, C: Clock> GameStateEngine<D, C> {
    /// Create an engine after validating `config`.
    pub fn new(config: EngineConfig, delays: D, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            delays,
            clock,
        })
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the delay source.
    #[must_use]
    pub fn delays(&self) -> &D {
        &self.delays
    }

    /// Replace the delay source, e.g. when restoring a snapshot.
    pub fn set_delays(&mut self, delays: D) {
        self.delays = delays;
    }

    /// Get the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start a session using the configured round count.
    #[must_use]
    pub fn new_session(&self) -> GameState {
        initialize(self.config.total_rounds)
    }

    /// Start the countdown.
    ///
    /// Valid from `Idle`, or from `Faulted` as a retry of the same round.
    /// The caller must schedule `activate` after `pending_delay` ms.
    pub fn arm(&mut self, state: &GameState) -> GameState {
        match state.phase() {
            GamePhase::Idle | GamePhase::Faulted => {
                let delay = self.delays.sample_delay(&self.config.delay);
                trace!(round = state.current_round(), delay, "armed");
                state.armed(delay)
            }
            GamePhase::Armed | GamePhase::Active | GamePhase::Settled => {
                ignored(state, GameEvent::Arm)
            }
        }
    }

    /// The countdown fired: show the stimulus and start measuring.
    ///
    /// Only valid from `Armed`; a stale timer firing in any other phase is
    /// a no-op.
    pub fn activate(&self, state: &GameState) -> GameState {
        match state.phase() {
            GamePhase::Armed => {
                let now = self.clock.now();
                trace!(round = state.current_round(), at = %now, "activated");
                state.activated(now)
            }
            GamePhase::Idle | GamePhase::Active | GamePhase::Faulted | GamePhase::Settled => {
                ignored(state, GameEvent::Activate)
            }
        }
    }

    /// Dispatch a player action on the current phase.
    ///
    /// | phase | result |
    /// |---|---|
    /// | `Idle` | arm |
    /// | `Armed` | `Faulted`, no round consumed |
    /// | `Active` | record elapsed time, then next round or `Settled` |
    /// | `Faulted` | re-arm the same round |
    /// | `Settled` | fresh session |
    pub fn handle_input(&mut self, state: &GameState) -> GameState {
        match state.phase() {
            GamePhase::Idle | GamePhase::Faulted => self.arm(state),
            GamePhase::Armed => {
                debug!(round = state.current_round(), "premature input");
                state.faulted()
            }
            GamePhase::Active => match state.activation_timestamp() {
                Some(activated_at) => {
                    let measurement = self.clock.now().elapsed_since(activated_at);
                    trace!(round = state.current_round(), measurement, "round complete");
                    state.with_outcome(measurement)
                }
                // Unreachable for engine-built states
                None => ignored(state, GameEvent::Input),
            },
            GamePhase::Settled => initialize(state.total_rounds()),
        }
    }

    /// Apply any event.
    pub fn transition(&mut self, state: &GameState, event: GameEvent) -> GameState {
        match event {
            GameEvent::Input => self.handle_input(state),
            GameEvent::Arm => self.arm(state),
            GameEvent::Activate => self.activate(state),
            GameEvent::Reset => initialize(state.total_rounds()),
        }
    }
}

fn ignored(state: &GameState, event: GameEvent) -> GameState {
    debug!(phase = %state.phase(), %event, "event ignored");
    state.clone()
}
