use lattice_core::concept::Rating;
use lattice_core::constants::{SPACED_INTERVALS, SPACED_INTERVAL_TOLERANCE};
use lattice_core::spaced;
use proptest::prelude::*;

proptest! {
    #[test]
    fn rating_always_lands_in_range(raw in any::<u8>()) {
        let rating = Rating::new(raw);
        prop_assert!((1..=5).contains(&rating.value()));
        prop_assert!(rating.fraction() >= 0.2 && rating.fraction() <= 1.0);
        prop_assert_eq!(rating.is_effective(), rating.value() >= Rating::EFFECTIVE);
    }

    #[test]
    fn in_range_ratings_pass_through(raw in 1u8..=5) {
        prop_assert_eq!(Rating::new(raw).value(), raw);
    }

    #[test]
    fn matched_interval_stays_within_tolerance(days in 0i64..=400) {
        if let Some(interval) = spaced::matched_interval(days) {
            prop_assert!(SPACED_INTERVALS.contains(&interval));
            let tolerance = f64::from(interval) * SPACED_INTERVAL_TOLERANCE;
            prop_assert!((days as f64 - f64::from(interval)).abs() <= tolerance);
        }
    }

    #[test]
    fn canonical_intervals_match_themselves(idx in 0usize..SPACED_INTERVALS.len()) {
        let interval = SPACED_INTERVALS[idx];
        prop_assert_eq!(spaced::matched_interval(i64::from(interval)), Some(interval));
    }

    #[test]
    fn negative_days_never_match(days in i64::MIN..0) {
        prop_assert_eq!(spaced::matched_interval(days), None);
    }
}
