//! Payloads handed to the ranking, sharing and mission collaborators.
//!
//! The engine produces numbers and classifications only. Formatting share
//! text, submitting scores and tracking missions all happen outside.

use serde::{Deserialize, Serialize};

use crate::core::{GamePhase, GameState};
use crate::stats::{average_measurement, best_measurement, PercentileTable, TierTable};

/// Result of a settled session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Ranking key ("reaction", "memory", ...).
    pub game_id: String,

    /// Optional difficulty or period tag ("daily", "hard").
    pub period: Option<String>,

    /// Rounds played.
    pub rounds: u32,

    /// Mean measurement; the submitted score.
    pub average: f64,

    /// Best single measurement.
    pub best: u64,

    /// Every measurement in round order.
    pub measurements: Vec<u64>,

    /// Premature inputs during the session.
    pub faults: u32,

    /// Tier label for the average.
    pub tier: String,

    /// Tier description for the average.
    pub tier_description: String,

    /// Approximate percentile for the average.
    pub percentile: u8,
}

impl SessionSummary {
    /// Summarize a session.
    ///
    /// Returns `None` unless the session has settled.
    #[must_use]
    pub fn from_state(
        state: &GameState,
        game_id: impl Into<String>,
        period: Option<String>,
        tiers: &TierTable,
        percentiles: &PercentileTable,
    ) -> Option<Self> {
        if state.phase() != GamePhase::Settled {
            return None;
        }

        let history = state.history();
        let average = average_measurement(history);
        let tier = tiers.classify(average);

        Some(Self {
            game_id: game_id.into(),
            period,
            rounds: state.total_rounds(),
            average,
            best: best_measurement(history),
            measurements: history.iter().map(|o| o.measurement).collect(),
            faults: state.faults(),
            tier: tier.label.clone(),
            tier_description: tier.description.clone(),
            percentile: percentiles.estimate(average),
        })
    }
}

/// Session result reported to the mission tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    /// Game identifier.
    pub game_type: String,

    /// Session score.
    pub score: f64,

    /// Whether the session counts as a win, if the game has that notion.
    pub won: Option<bool>,
}

impl MissionReport {
    /// Report for a game without a win condition.
    #[must_use]
    pub fn from_summary(summary: &SessionSummary) -> Self {
        Self {
            game_type: summary.game_id.clone(),
            score: summary.average,
            won: None,
        }
    }

    /// Report for a game that decides wins from its summary.
    #[must_use]
    pub fn with_win_rule(summary: &SessionSummary, won: impl FnOnce(&SessionSummary) -> bool) -> Self {
        Self {
            won: Some(won(summary)),
            ..Self::from_summary(summary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Timestamp;
    use crate::stats::Tier;

    fn settled(measurements: &[u64]) -> GameState {
        let rounds = u32::try_from(measurements.len()).unwrap();
        let mut state = GameState::new(rounds);
        for &m in measurements {
            state = state.armed(1_000).activated(Timestamp(0)).with_outcome(m);
        }
        state
    }

    fn tables() -> (TierTable, PercentileTable) {
        let tiers = TierTable::new([Tier::below(250.0, "Fast", "quick"), Tier::rest("Slow", "slow")]).unwrap();
        let percentiles = PercentileTable::new([(250.0, 80)], 20).unwrap();
        (tiers, percentiles)
    }

    #[test]
    fn test_unsettled_has_no_summary() {
        let (tiers, percentiles) = tables();
        let state = GameState::new(3);
        assert!(SessionSummary::from_state(&state, "reaction", None, &tiers, &percentiles).is_none());
    }

    #[test]
    fn test_summary_fields() {
        let (tiers, percentiles) = tables();
        let state = settled(&[200, 260, 190]);

        let summary =
            SessionSummary::from_state(&state, "reaction", Some("daily".into()), &tiers, &percentiles)
                .unwrap();

        assert_eq!(summary.game_id, "reaction");
        assert_eq!(summary.period.as_deref(), Some("daily"));
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.average, 650.0 / 3.0);
        assert_eq!(summary.best, 190);
        assert_eq!(summary.measurements, vec![200, 260, 190]);
        assert_eq!(summary.tier, "Fast");
        assert_eq!(summary.percentile, 80);
    }

    #[test]
    fn test_mission_reports() {
        let (tiers, percentiles) = tables();
        let state = settled(&[300, 320]);
        let summary = SessionSummary::from_state(&state, "reaction", None, &tiers, &percentiles).unwrap();

        let plain = MissionReport::from_summary(&summary);
        assert_eq!(plain.game_type, "reaction");
        assert_eq!(plain.score, 310.0);
        assert_eq!(plain.won, None);

        let judged = MissionReport::with_win_rule(&summary, |s| s.average < 250.0);
        assert_eq!(judged.won, Some(false));
    }

    #[test]
    fn test_summary_serialization() {
        let (tiers, percentiles) = tables();
        let state = settled(&[220]);
        let summary = SessionSummary::from_state(&state, "reaction", None, &tiers, &percentiles).unwrap();

        let json = serde_json::to_string(&summary).unwrap();
        let back: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }
}
