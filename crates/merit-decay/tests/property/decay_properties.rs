use chrono::{Duration, Utc};
use merit_decay::{time_weight, TimeDecay, DEFAULT_DECAY_FACTOR_MS};
use proptest::prelude::*;

// ── Monotonically non-increasing with age ────────────────────────────────

proptest! {
    #[test]
    fn monotonically_non_increasing(
        younger_hours in 0i64..20_000,
        extra_hours in 0i64..20_000,
    ) {
        let now = Utc::now();
        let younger = time_weight(now - Duration::hours(younger_hours), now, DEFAULT_DECAY_FACTOR_MS);
        let older = time_weight(
            now - Duration::hours(younger_hours + extra_hours),
            now,
            DEFAULT_DECAY_FACTOR_MS,
        );
        prop_assert!(older <= younger, "older {} > younger {}", older, younger);
    }
}

// ── Bounded below by the floor, above by one for past items ─────────────

proptest! {
    #[test]
    fn bounded_for_past_items(age_minutes in 0i64..10_000_000, factor_days in 0.5f64..365.0) {
        let now = Utc::now();
        let decay = TimeDecay::with_factor_ms(factor_days * 86_400_000.0).unwrap();
        let w = decay.weight(now - Duration::minutes(age_minutes), now);
        prop_assert!((0.1..=1.0).contains(&w), "out of bounds: {}", w);
    }
}

// ── Very old items sit exactly on the floor ─────────────────────────────

proptest! {
    #[test]
    fn very_old_items_hit_floor(age_days in 70i64..100_000) {
        let now = Utc::now();
        let w = time_weight(now - Duration::days(age_days), now, DEFAULT_DECAY_FACTOR_MS);
        prop_assert_eq!(w, 0.1);
    }
}
