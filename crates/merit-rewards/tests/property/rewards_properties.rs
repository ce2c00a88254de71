use merit_core::models::{OriginalityScore, QualityScores, Tier};
use merit_rewards::{calculate_feedback_xp, calculate_tier, tier_progress, xp_breakdown};
use proptest::prelude::*;

fn arb_scores() -> impl Strategy<Value = QualityScores> {
    (1i64..=10, 1i64..=10, 1i64..=10, 1i64..=10, 1i64..=10)
        .prop_map(|(r, d, e, c, t)| QualityScores::new(r, d, e, c, t).unwrap())
}

// ── Originality 1 always earns nothing ──────────────────────────────────

proptest! {
    #[test]
    fn duplicate_always_zero(scores in arb_scores()) {
        prop_assert_eq!(calculate_feedback_xp(&scores, OriginalityScore::new(1)), 0);
    }
}

// ── Everything else lands in [200, 500] ─────────────────────────────────

proptest! {
    #[test]
    fn non_duplicate_bounded(scores in arb_scores(), originality in 2u8..=10) {
        let xp = calculate_feedback_xp(&scores, OriginalityScore::new(originality));
        prop_assert!((200..=500).contains(&xp), "out of bounds: {}", xp);
    }
}

// ── Penalty applies exactly when originality is 2, 3 or 4 ───────────────

proptest! {
    #[test]
    fn penalty_iff_low_originality(scores in arb_scores(), originality in 2u8..=10) {
        let b = xp_breakdown(&scores, OriginalityScore::new(originality));
        prop_assert_eq!(b.penalty_applied, originality < 5);
    }
}

// ── Raising any quality score never lowers XP ───────────────────────────

proptest! {
    #[test]
    fn monotone_in_quality(scores in arb_scores(), originality in 1u8..=10, dim in 0usize..5) {
        let mut better = scores;
        match dim {
            0 => better.relevance = (better.relevance + 1).min(10),
            1 => better.depth = (better.depth + 1).min(10),
            2 => better.evidence = (better.evidence + 1).min(10),
            3 => better.constructiveness = (better.constructiveness + 1).min(10),
            _ => better.tone = (better.tone + 1).min(10),
        }
        let o = OriginalityScore::new(originality);
        prop_assert!(calculate_feedback_xp(&better, o) >= calculate_feedback_xp(&scores, o));
    }
}

// ── Tiers never go down as XP grows ─────────────────────────────────────

proptest! {
    #[test]
    fn tier_monotone(a in 0u64..100_000, b in 0u64..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calculate_tier(lo) <= calculate_tier(hi));
    }
}

// ── Progress is consistent with the tier table ──────────────────────────

proptest! {
    #[test]
    fn progress_consistent(xp in 0u64..1_000_000) {
        let p = tier_progress(xp);
        prop_assert_eq!(p.current.tier, calculate_tier(xp));
        prop_assert!(p.progress_percentage <= 100);
        match p.next {
            Some(next) => {
                prop_assert_eq!(p.xp_to_next_tier, next.min_xp - xp);
                prop_assert!(p.xp_to_next_tier >= 1);
            }
            None => {
                prop_assert_eq!(p.current.tier, Tier::Diamond);
                prop_assert_eq!(p.xp_to_next_tier, 0);
                prop_assert_eq!(p.progress_percentage, 100);
            }
        }
    }
}
