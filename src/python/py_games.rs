//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameState;
use crate::games::reaction::{ReactionGame, ReactionGameBuilder};
use crate::rules::GameEvent;
use crate::stats::{average_measurement, best_measurement};

use super::py_core::{PyRoundOutcome, PySessionSummary, PyTimerDirective};

/// Python wrapper for ReactionGame.
///
/// Holds the current state; every method applies one event and keeps the
/// successor. Uses the real clock.
#[pyclass(name = "ReactionGame")]
pub struct PyReactionGame {
    game: ReactionGame,
    state: GameState,
}

impl PyReactionGame {
    fn apply(&mut self, event: GameEvent) -> PyTimerDirective {
        self.state = self.game.apply(&self.state, event);
        PyTimerDirective(self.state.timer_directive())
    }
}

#[pymethods]
impl PyReactionGame {
    /// Create a new ReactionGame.
    ///
    /// # Arguments
    /// - rounds: Rounds per session
    /// - seed: RNG seed for the countdown delays
    /// - min_delay_ms / max_delay_ms: Countdown range `[min, max)`
    #[new]
    #[pyo3(signature = (rounds = 5, seed = 42, min_delay_ms = 1000, max_delay_ms = 5000))]
    fn new(rounds: u32, seed: u64, min_delay_ms: u64, max_delay_ms: u64) -> PyResult<Self> {
        let (game, state) = ReactionGameBuilder::new()
            .rounds(rounds)
            .delay_range(min_delay_ms, max_delay_ms)
            .build(seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game, state })
    }

    /// Player input. Returns what to do with the countdown timer.
    fn handle_input(&mut self) -> PyTimerDirective {
        self.apply(GameEvent::Input)
    }

    /// Start the countdown explicitly.
    fn arm(&mut self) -> PyTimerDirective {
        self.apply(GameEvent::Arm)
    }

    /// The countdown timer fired.
    fn activate(&mut self) -> PyTimerDirective {
        self.apply(GameEvent::Activate)
    }

    /// Start a fresh session.
    fn reset(&mut self) -> PyTimerDirective {
        self.apply(GameEvent::Reset)
    }

    /// Current phase label ("waiting", "ready", "go", "tooEarly", "result").
    #[getter]
    fn phase(&self) -> &'static str {
        self.state.phase().label()
    }

    #[getter]
    fn current_round(&self) -> u32 {
        self.state.current_round()
    }

    #[getter]
    fn total_rounds(&self) -> u32 {
        self.state.total_rounds()
    }

    #[getter]
    fn pending_delay(&self) -> u64 {
        self.state.pending_delay()
    }

    #[getter]
    fn faults(&self) -> u32 {
        self.state.faults()
    }

    #[getter]
    fn history(&self) -> Vec<PyRoundOutcome> {
        self.state.history().iter().copied().map(PyRoundOutcome).collect()
    }

    #[getter]
    fn average(&self) -> f64 {
        average_measurement(self.state.history())
    }

    #[getter]
    fn best(&self) -> u64 {
        best_measurement(self.state.history())
    }

    /// Tier label for the current average, `None` before the first round.
    #[getter]
    fn tier(&self) -> Option<String> {
        self.game.current_tier(&self.state).map(|tier| tier.label.clone())
    }

    /// Approximate percentile for the current average, `None` before the
    /// first round.
    #[getter]
    fn percentile(&self) -> Option<u8> {
        self.game.current_percentile(&self.state)
    }

    /// Summary of a settled session, or `None`.
    #[pyo3(signature = (period = None))]
    fn summary(&self, period: Option<String>) -> Option<PySessionSummary> {
        self.game.summarize(&self.state, period).map(PySessionSummary)
    }

    fn __repr__(&self) -> String {
        format!(
            "ReactionGame(round={}/{}, phase={})",
            self.state.current_round(),
            self.state.total_rounds(),
            self.state.phase()
        )
    }
}
