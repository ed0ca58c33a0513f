//! Reaction game implementation.

use std::sync::OnceLock;

use crate::core::{Clock, EngineConfig, GameRng, GameState, SystemClock};
use crate::error::ConfigError;
use crate::report::{MissionReport, SessionSummary};
use crate::rules::{GameEvent, GameStateEngine};
use crate::stats::{average_measurement, PercentileTable, Tier, TierTable};

/// Ranking key for this game.
pub const GAME_ID: &str = "reaction";

/// Averages below this count as a mission win.
pub const WIN_THRESHOLD_MS: f64 = 300.0;

const PERCENTILE_BREAKPOINTS: [(f64, u8); 7] = [
    (150.0, 99),
    (200.0, 95),
    (250.0, 80),
    (300.0, 60),
    (350.0, 40),
    (400.0, 25),
    (500.0, 10),
];

const PERCENTILE_FLOOR: u8 = 5;

/// Default reaction tiers, fastest first.
#[must_use]
pub fn reaction_tiers() -> TierTable {
    TierTable::from_validated([
        Tier::below(200.0, "Lightning", "Faster than almost everyone. Fighter-pilot reflexes."),
        Tier::below(250.0, "Cheetah", "Excellent reflexes, well above the crowd."),
        Tier::below(300.0, "Quick", "Sharper than most people."),
        Tier::below(400.0, "Average", "Right where most people land."),
        Tier::rest("Sloth", "Take your time. Maybe a coffee first?"),
    ])
}

/// Default percentile breakpoints.
///
/// An approximation for display only; not derived from player data.
#[must_use]
pub fn reaction_percentiles() -> PercentileTable {
    PercentileTable::from_validated(&PERCENTILE_BREAKPOINTS, PERCENTILE_FLOOR)
}

/// Tier for an average reaction time using the default table.
#[must_use]
pub fn classify(average: f64) -> &'static Tier {
    static TIERS: OnceLock<TierTable> = OnceLock::new();
    TIERS.get_or_init(reaction_tiers).classify(average)
}

/// Percentile for an average reaction time using the default table.
#[must_use]
pub fn percentile_estimate(average: f64) -> u8 {
    static PERCENTILES: OnceLock<PercentileTable> = OnceLock::new();
    PERCENTILES
        .get_or_init(reaction_percentiles)
        .estimate(average)
}

/// A reaction test: the engine plus its scoring tables.
#[derive(Clone, Debug)]
pub struct ReactionGame<C = SystemClock> {
    engine: GameStateEngine<GameRng, C>,
    tiers: TierTable,
    percentiles: PercentileTable,
}

/// Builder for creating a ReactionGame.
#[derive(Clone, Debug)]
pub struct ReactionGameBuilder {
    config: EngineConfig,
    tiers: TierTable,
    percentiles: PercentileTable,
}

impl Default for ReactionGameBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            tiers: reaction_tiers(),
            percentiles: reaction_percentiles(),
        }
    }
}

impl ReactionGameBuilder {
    /// Builder with the default 5 rounds and `[1000, 5000)` ms delays.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round count.
    #[must_use]
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.config = self.config.with_rounds(rounds);
        self
    }

    /// Set the countdown range.
    #[must_use]
    pub fn delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.config = self.config.with_delay_range(min_ms, max_ms);
        self
    }

    /// Replace the whole engine configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tier table.
    #[must_use]
    pub fn tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = tiers;
        self
    }

    /// Replace the percentile table.
    #[must_use]
    pub fn percentiles(mut self, percentiles: PercentileTable) -> Self {
        self.percentiles = percentiles;
        self
    }

    /// Build with the real clock.
    pub fn build(self, seed: u64) -> Result<(ReactionGame, GameState), ConfigError> {
        self.build_with_clock(seed, SystemClock::new())
    }

    /// Build the game and its initial state.
    ///
    /// Delays come from the `reaction` stream of `seed`, so one platform seed
    /// can drive several games without correlated countdowns.
    pub fn build_with_clock<C: Clock>(
        self,
        seed: u64,
        clock: C,
    ) -> Result<(ReactionGame<C>, GameState), ConfigError> {
        let rng = GameRng::new(seed).for_context(GAME_ID);
        let engine = GameStateEngine::new(self.config, rng, clock)?;
        let state = engine.new_session();

        let game = ReactionGame {
            engine,
            tiers: self.tiers,
            percentiles: self.percentiles,
        };
        Ok((game, state))
    }
}

impl<C: Clock> ReactionGame<C> {
    /// Get the underlying engine.
    pub fn engine(&self) -> &GameStateEngine<GameRng, C> {
        &self.engine
    }

    /// Get the underlying engine mutably.
    pub fn engine_mut(&mut self) -> &mut GameStateEngine<GameRng, C> {
        &mut self.engine
    }

    /// Get the tier table.
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Get the percentile table.
    pub fn percentiles(&self) -> &PercentileTable {
        &self.percentiles
    }

    /// Apply an event.
    pub fn apply(&mut self, state: &GameState, event: GameEvent) -> GameState {
        self.engine.transition(state, event)
    }

    /// Tier for an average under this game's table.
    pub fn classify(&self, average: f64) -> &Tier {
        self.tiers.classify(average)
    }

    /// Percentile for an average under this game's table.
    pub fn percentile_estimate(&self, average: f64) -> u8 {
        self.percentiles.estimate(average)
    }

    /// Live tier for a session in progress, `None` until a round completes.
    pub fn current_tier(&self, state: &GameState) -> Option<&Tier> {
        if state.history().is_empty() {
            return None;
        }
        Some(self.classify(average_measurement(state.history())))
    }

    /// Live percentile for a session in progress, `None` until a round
    /// completes.
    pub fn current_percentile(&self, state: &GameState) -> Option<u8> {
        if state.history().is_empty() {
            return None;
        }
        Some(self.percentile_estimate(average_measurement(state.history())))
    }

    /// Ranking/share payload for a settled session.
    pub fn summarize(&self, state: &GameState, period: Option<String>) -> Option<SessionSummary> {
        SessionSummary::from_state(state, GAME_ID, period, &self.tiers, &self.percentiles)
    }

    /// Mission report for a settled session. A session is won when the
    /// average beats [`WIN_THRESHOLD_MS`].
    pub fn mission_report(&self, state: &GameState) -> Option<MissionReport> {
        let summary = self.summarize(state, None)?;
        Some(MissionReport::with_win_rule(&summary, |s| s.average < WIN_THRESHOLD_MS))
    }
}
