//! Aggregates over a session history.
//!
//! Both functions return zero for an empty history so a results screen can
//! render before any round completes.

use crate::core::RoundOutcome;

/// Arithmetic mean of all measurements (`0.0` when empty).
///
/// ```
/// use minigame_engine::core::RoundOutcome;
/// use minigame_engine::stats::average_measurement;
///
/// let history = [RoundOutcome::new(100, 1), RoundOutcome::new(300, 2)];
/// assert_eq!(average_measurement(&history), 200.0);
/// ```
#[must_use]
pub fn average_measurement<'a, I>(history: I) -> f64
where
    I: IntoIterator<Item = &'a RoundOutcome>,
{
    let (sum, count) = history
        .into_iter()
        .fold((0u128, 0u64), |(sum, count), outcome| {
            (sum + u128::from(outcome.measurement), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Smallest measurement (`0` when empty).
#[must_use]
pub fn best_measurement<'a, I>(history: I) -> u64
where
    I: IntoIterator<Item = &'a RoundOutcome>,
{
    history
        .into_iter()
        .map(|outcome| outcome.measurement)
        .min()
        .unwrap_or(0)
}
