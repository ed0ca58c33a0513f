//! Engine configuration.
//!
//! Games configure the engine at startup by providing:
//! - `total_rounds`: how many scored rounds make a session
//! - `DelayRange`: bounds of the randomized countdown before `Active`
//!
//! Configuration is built with `with_*` methods or loaded from JSON, and is
//! validated before the engine accepts it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Half-open countdown range `[min_ms, max_ms)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelayRange {
    /// Shortest delay (inclusive).
    pub min_ms: u64,
    /// Longest delay (exclusive).
    pub max_ms: u64,
}

impl DelayRange {
    /// Create a validated range.
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, ConfigError> {
        let range = Self { min_ms, max_ms };
        range.validate()?;
        Ok(range)
    }

    /// Check the range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ms >= self.max_ms {
            return Err(ConfigError::EmptyDelayRange {
                min_ms: self.min_ms,
                max_ms: self.max_ms,
            });
        }
        Ok(())
    }

    /// Check whether a delay lies in the range.
    #[must_use]
    pub fn contains(&self, delay_ms: u64) -> bool {
        (self.min_ms..self.max_ms).contains(&delay_ms)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: 1_000,
            max_ms: 5_000,
        }
    }
}

impl std::fmt::Display for DelayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}ms, {}ms)", self.min_ms, self.max_ms)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rounds per session (at least 1).
    pub total_rounds: u32,

    /// Countdown range sampled by `arm`.
    pub delay: DelayRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            delay: DelayRange::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given round count and default delays.
    #[must_use]
    pub fn new(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            ..Self::default()
        }
    }

    /// Set the round count.
    #[must_use]
    pub fn with_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    /// Set the countdown range.
    #[must_use]
    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.delay = DelayRange { min_ms, max_ms };
        self
    }

    /// Check all fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        self.delay.validate()
    }

    /// Parse and validate a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
