//! Coarse percentile estimate for an average.
//!
//! This is flavor text, not statistics: the table is a fixed lookup chosen
//! by the game, and no population data is consulted. It shares the tier
//! table's contract: total over `[0, ∞)` and monotonic (a lower average
//! never yields a lower percentile).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// One breakpoint: averages below `below` score `percentile`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Exclusive upper bound of the average.
    pub below: f64,
    /// Percentile for averages under the bound.
    pub percentile: u8,
}

/// Ordered breakpoints plus a floor for everything beyond the last one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PercentileTable {
    breakpoints: SmallVec<[Breakpoint; 8]>,
    floor: u8,
}

impl PercentileTable {
    /// Build and validate a table.
    ///
    /// Bounds must be finite and strictly increasing; percentiles must be
    /// at most 100, non-increasing, and not below `floor`.
    pub fn new(
        breakpoints: impl IntoIterator<Item = (f64, u8)>,
        floor: u8,
    ) -> Result<Self, ConfigError> {
        let breakpoints: SmallVec<[Breakpoint; 8]> = breakpoints
            .into_iter()
            .map(|(below, percentile)| Breakpoint { below, percentile })
            .collect();

        if floor > 100 {
            return Err(ConfigError::InvalidPercentile {
                index: breakpoints.len(),
                value: floor,
            });
        }

        let mut previous_bound = 0.0;
        let mut previous_percentile = 100;
        for (index, point) in breakpoints.iter().enumerate() {
            if !point.below.is_finite() || point.below <= previous_bound {
                return Err(ConfigError::UnorderedBounds {
                    table: "percentile",
                    index,
                });
            }
            if point.percentile > previous_percentile || point.percentile < floor {
                return Err(ConfigError::InvalidPercentile {
                    index,
                    value: point.percentile,
                });
            }
            previous_bound = point.below;
            previous_percentile = point.percentile;
        }

        Ok(Self { breakpoints, floor })
    }

    /// Build a table known to be valid at compile time.
    pub(crate) fn from_validated(breakpoints: &[(f64, u8)], floor: u8) -> Self {
        Self {
            breakpoints: breakpoints
                .iter()
                .map(|&(below, percentile)| Breakpoint { below, percentile })
                .collect(),
            floor,
        }
    }

    /// Estimated percentile (0..=100) for `average`.
    ///
    /// Negative and NaN inputs are treated as 0.
    #[must_use]
    pub fn estimate(&self, average: f64) -> u8 {
        let average = if average.is_nan() { 0.0 } else { average.max(0.0) };
        self.breakpoints
            .iter()
            .find(|point| average < point.below)
            .map_or(self.floor, |point| point.percentile)
    }

    /// Percentile for averages past the last breakpoint.
    #[must_use]
    pub fn floor(&self) -> u8 {
        self.floor
    }

    /// Iterate breakpoints in ascending bound order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }
}

impl<'de> Deserialize<'de> for PercentileTable {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        struct Raw {
            breakpoints: Vec<Breakpoint>,
            floor: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        PercentileTable::new(
            raw.breakpoints.into_iter().map(|p| (p.below, p.percentile)),
            raw.floor,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PercentileTable {
        PercentileTable::new([(100.0, 90), (200.0, 50)], 10).unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = table();
        assert_eq!(table.estimate(0.0), 90);
        assert_eq!(table.estimate(99.0), 90);
        assert_eq!(table.estimate(100.0), 50);
        assert_eq!(table.estimate(250.0), 10);
        assert_eq!(table.estimate(f64::INFINITY), 10);
        assert_eq!(table.estimate(-1.0), 90);
        assert_eq!(table.estimate(f64::NAN), 90);
    }

    #[test]
    fn test_floor_only_table() {
        let table = PercentileTable::new(Vec::<(f64, u8)>::new(), 50).unwrap();
        assert_eq!(table.estimate(1.0), 50);
        assert_eq!(table.floor(), 50);
    }

    #[test]
    fn test_invalid_tables() {
        assert!(matches!(
            PercentileTable::new([(100.0, 50), (200.0, 60)], 0),
            Err(ConfigError::InvalidPercentile { index: 1, value: 60 })
        ));
        assert!(matches!(
            PercentileTable::new([(100.0, 101)], 0),
            Err(ConfigError::InvalidPercentile { index: 0, .. })
        ));
        assert!(matches!(
            PercentileTable::new([(200.0, 90), (100.0, 50)], 0),
            Err(ConfigError::UnorderedBounds { index: 1, .. })
        ));
        assert!(matches!(
            PercentileTable::new([(100.0, 20)], 30),
            Err(ConfigError::InvalidPercentile { index: 0, value: 20 })
        ));
        assert!(PercentileTable::new(Vec::<(f64, u8)>::new(), 101).is_err());
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let json = serde_json::to_string(&table()).unwrap();
        let back: PercentileTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table());

        let bad = r#"{"breakpoints":[{"below":10.0,"percentile":10},{"below":20.0,"percentile":20}],"floor":0}"#;
        assert!(serde_json::from_str::<PercentileTable>(bad).is_err());
    }
}
