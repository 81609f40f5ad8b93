//! Spaced-repetition interval matching.

use crate::constants::{SPACED_INTERVALS, SPACED_INTERVAL_TOLERANCE};

/// The canonical interval that `days` falls within (±20%), if any.
pub fn matched_interval(days: i64) -> Option<u32> {
    if days < 0 {
        return None;
    }
    SPACED_INTERVALS.into_iter().find(|&interval| {
        let tolerance = f64::from(interval) * SPACED_INTERVAL_TOLERANCE;
        (days as f64 - f64::from(interval)).abs() <= tolerance
    })
}

/// Human-readable name for a review interval, e.g. `"7-day review"`.
pub fn interval_label(interval: u32) -> String {
    format!("{interval}-day review")
}
