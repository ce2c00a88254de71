//! Golden dataset tests for the originality schedule.

use merit_originality::{originality_breakdown, SimilaritySample};
use test_fixtures::load_fixture_value;

#[test]
fn golden_schedule_cases() {
    let fixture = load_fixture_value("golden/originality/schedule_cases.json");
    let cases = fixture["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap_or("?");
        let samples: Vec<SimilaritySample> = case["samples"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| {
                SimilaritySample::new(
                    s["similarity"].as_f64().unwrap(),
                    s["weight"].as_f64().unwrap(),
                )
            })
            .collect();

        let breakdown = originality_breakdown(&samples).unwrap();

        assert_eq!(
            u64::from(breakdown.score.value()),
            case["expected_score"].as_u64().unwrap(),
            "case '{}': score mismatch (raw {})",
            name,
            breakdown.raw
        );

        let expected_bucket = case["expected_bucket"].as_str();
        let actual_bucket = breakdown.bucket.map(|b| format!("{b:?}"));
        assert_eq!(
            actual_bucket.as_deref(),
            expected_bucket,
            "case '{}': bucket mismatch",
            name
        );
        assert_eq!(breakdown.samples_used, samples.len(), "case '{}'", name);
    }
}
