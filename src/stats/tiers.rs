//! Classification of an average into named tiers.
//!
//! A `TierTable` is an ordered list of half-open buckets from best to worst:
//! `[0, b1)`, `[b1, b2)`, ..., `[bn, ∞)`. The table is validated when built,
//! so `classify` is total over every input and monotonic: a lower average
//! never lands in a worse tier.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// One bucket of a tier table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Exclusive upper bound. `None` only for the last tier.
    pub upper_bound: Option<f64>,

    /// Short name ("Lightning").
    pub label: String,

    /// One-line description for result screens.
    pub description: String,
}

impl Tier {
    /// A bounded tier covering everything below `upper_bound`.
    pub fn below(upper_bound: f64, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            label: label.into(),
            description: description.into(),
        }
    }

    /// The catch-all last tier.
    pub fn rest(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            upper_bound: None,
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Ordered, exhaustive set of tiers (best first).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TierTable {
    /// Most tables have a handful of tiers.
    tiers: SmallVec<[Tier; 6]>,
}

impl TierTable {
    /// Build and validate a table.
    ///
    /// Requires at least one tier, strictly increasing finite bounds, and
    /// exactly one unbounded tier in last position.
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Result<Self, ConfigError> {
        let tiers: SmallVec<[Tier; 6]> = tiers.into_iter().collect();
        let (last, bounded) = tiers
            .split_last()
            .ok_or(ConfigError::EmptyTable { table: "tier" })?;

        if last.upper_bound.is_some() {
            return Err(ConfigError::UnboundedTier);
        }

        let mut previous = 0.0;
        for (index, tier) in bounded.iter().enumerate() {
            let bound = tier.upper_bound.ok_or(ConfigError::UnboundedTier)?;
            if !bound.is_finite() || bound <= previous {
                return Err(ConfigError::UnorderedBounds { table: "tier", index });
            }
            previous = bound;
        }

        Ok(Self { tiers })
    }

    /// Build a table known to be valid at compile time.
    pub(crate) fn from_validated(tiers: impl IntoIterator<Item = Tier>) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }

    /// Tier containing `average`.
    ///
    /// Negative and NaN inputs are treated as 0, so every input maps to
    /// exactly one tier.
    #[must_use]
    pub fn classify(&self, average: f64) -> &Tier {
        &self.tiers[self.rank(average)]
    }

    /// Rank of the tier containing `average` (0 = best).
    #[must_use]
    pub fn rank(&self, average: f64) -> usize {
        let average = if average.is_nan() { 0.0 } else { average.max(0.0) };
        self.tiers
            .iter()
            .position(|tier| tier.upper_bound.map_or(true, |bound| average < bound))
            .unwrap_or(self.tiers.len() - 1)
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Iterate tiers best first.
    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }
}

impl<'de> Deserialize<'de> for TierTable {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        struct Raw {
            tiers: Vec<Tier>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TierTable::new(raw.tiers).map_err(serde::de::Error::custom)
    }
}
