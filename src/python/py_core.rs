//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{RoundOutcome, TimerDirective};
use crate::report::SessionSummary;

/// Python wrapper for RoundOutcome.
#[pyclass(name = "RoundOutcome")]
#[derive(Clone, Debug)]
pub struct PyRoundOutcome(pub RoundOutcome);

#[pymethods]
impl PyRoundOutcome {
    /// Measured value (ms for the reaction test).
    #[getter]
    fn measurement(&self) -> u64 {
        self.0.measurement
    }

    /// Round number (1-indexed).
    #[getter]
    fn round_index(&self) -> u32 {
        self.0.round_index
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundOutcome(round={}, measurement={})",
            self.0.round_index, self.0.measurement
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Timer instruction after a transition.
///
/// `delay_ms` is `None` when any pending timer should be cancelled.
#[pyclass(name = "TimerDirective")]
#[derive(Clone, Debug)]
pub struct PyTimerDirective(pub TimerDirective);

#[pymethods]
impl PyTimerDirective {
    /// Delay to schedule, or `None` to cancel.
    #[getter]
    fn delay_ms(&self) -> Option<u64> {
        match self.0 {
            TimerDirective::Schedule(ms) => Some(ms),
            TimerDirective::Cancel => None,
        }
    }

    fn __repr__(&self) -> String {
        match self.0 {
            TimerDirective::Schedule(ms) => format!("TimerDirective(schedule={ms})"),
            TimerDirective::Cancel => "TimerDirective(cancel)".to_string(),
        }
    }
}

/// Python wrapper for SessionSummary.
#[pyclass(name = "SessionSummary")]
#[derive(Clone, Debug)]
pub struct PySessionSummary(pub SessionSummary);

#[pymethods]
impl PySessionSummary {
    #[getter]
    fn game_id(&self) -> String {
        self.0.game_id.clone()
    }

    #[getter]
    fn average(&self) -> f64 {
        self.0.average
    }

    #[getter]
    fn best(&self) -> u64 {
        self.0.best
    }

    #[getter]
    fn tier(&self) -> String {
        self.0.tier.clone()
    }

    #[getter]
    fn tier_description(&self) -> String {
        self.0.tier_description.clone()
    }

    #[getter]
    fn percentile(&self) -> u8 {
        self.0.percentile
    }

    #[getter]
    fn measurements(&self) -> Vec<u64> {
        self.0.measurements.clone()
    }

    /// JSON payload for the ranking collaborator.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionSummary(game={}, average={:.1}, tier={})",
            self.0.game_id, self.0.average, self.0.tier
        )
    }
}
