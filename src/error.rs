//! Error types for the fallible edges of the engine.
//!
//! Transitions themselves never fail. Errors only arise when building
//! configuration (rounds, delay ranges, scoring tables) or when encoding
//! and decoding session snapshots.

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A session needs at least one round.
    #[error("total rounds must be at least 1")]
    ZeroRounds,

    /// The delay range `[min, max)` is empty.
    #[error("delay range [{min_ms}, {max_ms}) is empty")]
    EmptyDelayRange {
        /// Lower bound (inclusive).
        min_ms: u64,
        /// Upper bound (exclusive).
        max_ms: u64,
    },

    /// A scoring table has no entries.
    #[error("{table} table has no entries")]
    EmptyTable {
        /// Which table.
        table: &'static str,
    },

    /// Bucket upper bounds are not strictly increasing.
    #[error("{table} table bound at index {index} is not strictly increasing")]
    UnorderedBounds {
        /// Which table.
        table: &'static str,
        /// Offending entry.
        index: usize,
    },

    /// Only the last tier may be unbounded, and it must be.
    #[error("tier table must end with exactly one unbounded tier")]
    UnboundedTier,

    /// Percentiles must lie in `0..=100` and never increase with the average.
    #[error("percentile at index {index} is invalid: {value}")]
    InvalidPercentile {
        /// Offending entry.
        index: usize,
        /// Offending value.
        value: u8,
    },

    /// Malformed configuration document.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Snapshot encode/decode errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Binary encoding failed, or the decoded state breaks a state
    /// invariant.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
