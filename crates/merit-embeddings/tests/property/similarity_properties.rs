use merit_embeddings::cosine_similarity;
use proptest::prelude::*;

fn arb_vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, len)
}

fn non_degenerate(v: &[f32]) -> bool {
    v.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>() > 1e-6
}

// ── Self-similarity is one ───────────────────────────────────────────────

proptest! {
    #[test]
    fn self_similarity_is_one(v in arb_vector(32)) {
        prop_assume!(non_degenerate(&v));
        let sim = cosine_similarity(&v, &v).unwrap();
        prop_assert!((sim - 1.0).abs() < 1e-9, "self similarity was {}", sim);
    }
}

// ── Commutative ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn symmetric(a in arb_vector(24), b in arb_vector(24)) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }
}

// ── Bounded to [-1, 1], never NaN ────────────────────────────────────────

proptest! {
    #[test]
    fn bounded_and_finite(a in arb_vector(16), b in arb_vector(16)) {
        let sim = cosine_similarity(&a, &b).unwrap();
        prop_assert!(sim.is_finite());
        prop_assert!((-1.0..=1.0).contains(&sim), "out of bounds: {}", sim);
    }
}

// ── Unequal lengths always fail ──────────────────────────────────────────

proptest! {
    #[test]
    fn unequal_lengths_fail(
        a in prop::collection::vec(-1.0f32..1.0, 0..40),
        b in prop::collection::vec(-1.0f32..1.0, 0..40),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert!(cosine_similarity(&a, &b).is_err());
    }
}
