use merit_originality::{
    originality_breakdown, originality_from_similarities, originality_score, SimilaritySample,
};
use proptest::prelude::*;

// ── Monotonically non-increasing in similarity ──────────────────────────

proptest! {
    #[test]
    fn monotonically_non_increasing(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let score_lo = originality_from_similarities(&[lo]);
        let score_hi = originality_from_similarities(&[hi]);
        prop_assert!(
            score_hi <= score_lo,
            "sim {} scored {} but sim {} scored {}",
            hi, score_hi, lo, score_lo
        );
    }
}

// ── Always within [1, 10] ────────────────────────────────────────────────

proptest! {
    #[test]
    fn bounded_one_to_ten(
        samples in prop::collection::vec((-1.0f64..=1.0, 0.1f64..=2.0), 0..50),
    ) {
        let samples: Vec<SimilaritySample> = samples
            .into_iter()
            .map(|(s, w)| SimilaritySample::new(s, w))
            .collect();
        let score = originality_score(&samples).unwrap().value();
        prop_assert!((1..=10).contains(&score), "out of bounds: {}", score);
    }
}

// ── Uniform scaling of weights does not change the score ────────────────

proptest! {
    #[test]
    fn invariant_under_weight_scaling(
        samples in prop::collection::vec((0.0f64..=1.0, 0.1f64..=1.0), 1..20),
        factor in 1u32..8,
    ) {
        let base: Vec<SimilaritySample> = samples
            .iter()
            .map(|&(s, w)| SimilaritySample::new(s, w))
            .collect();
        // Power-of-two scaling keeps the weighted average bit-identical.
        let scale = f64::from(1u32 << factor);
        let scaled: Vec<SimilaritySample> = samples
            .iter()
            .map(|&(s, w)| SimilaritySample::new(s, w * scale))
            .collect();
        prop_assert_eq!(originality_score(&base).unwrap(), originality_score(&scaled).unwrap());
    }
}

// ── Identical histories of any size average like a single sample ──────────

proptest! {
    #[test]
    fn repeated_sample_averages_like_one(
        sim in -1.0f64..=1.0,
        weight in 0.1f64..1e300,
        n in 1usize..30,
    ) {
        let one = originality_breakdown(&[SimilaritySample::new(sim, weight)]).unwrap();
        let many = originality_breakdown(&vec![SimilaritySample::new(sim, weight); n]).unwrap();
        let (a, b) = (one.weighted_average.unwrap(), many.weighted_average.unwrap());
        prop_assert!((a - sim).abs() < 1e-12, "single sample averaged to {}", a);
        prop_assert!((a - b).abs() < 1e-12, "{} copies averaged to {} vs {}", n, b, a);
    }
}
