//! Derived metrics over a session history.
//!
//! - `summary`: average and best measurement
//! - `tiers`: named buckets for result screens
//! - `percentile`: coarse percentile flavor text

pub mod percentile;
pub mod summary;
pub mod tiers;

pub use percentile::{Breakpoint, PercentileTable};
pub use summary::{average_measurement, best_measurement};
pub use tiers::{Tier, TierTable};
