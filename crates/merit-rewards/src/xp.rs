use merit_core::constants::{
    ANTI_FARMING_MULTIPLIER, ANTI_FARMING_ORIGINALITY, MAX_FEEDBACK_XP, MAX_SCORE, MIN_FEEDBACK_XP,
    MIN_SCORE, XP_DIMENSIONS, ZERO_XP_ORIGINALITY,
};
use merit_core::models::{OriginalityScore, QualityScores};
use serde::{Deserialize, Serialize};

/// XP gained per point of average score above 1.
const XP_PER_POINT: f64 = (MAX_FEEDBACK_XP - MIN_FEEDBACK_XP) as f64
    / (MAX_SCORE - MIN_SCORE) as f64;

/// Each intermediate value of a feedback XP computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpBreakdown {
    /// Originality was at or below the duplicate floor; nothing else was computed.
    pub zero_rule: bool,
    /// Mean of the five quality scores and originality.
    pub average: Option<f64>,
    /// XP from the linear rescale, before any penalty.
    pub linear_xp: Option<f64>,
    pub penalty_applied: bool,
    pub xp: u32,
}

/// XP for one feedback item.
///
/// 1. originality ≤ 1 → 0.
/// 2. average of all six dimensions, rescaled from [1, 10] to [200, 500].
/// 3. originality < 5 → halved.
/// 4. clamped to [200, 500] and rounded.
///
/// Sub-scores are clamped into [1, 10] on the way in.
pub fn calculate_feedback_xp(scores: &QualityScores, originality: OriginalityScore) -> u32 {
    xp_breakdown(scores, originality).xp
}

/// XP for a feedback item whose judge verdict may be missing.
///
/// No verdict means no reward, whatever the originality.
pub fn feedback_xp_for(scores: Option<&QualityScores>, originality: OriginalityScore) -> u32 {
    scores.map_or(0, |s| calculate_feedback_xp(s, originality))
}

/// Compute XP with a full breakdown of each step.
pub fn xp_breakdown(scores: &QualityScores, originality: OriginalityScore) -> XpBreakdown {
    if originality.value() <= ZERO_XP_ORIGINALITY {
        return XpBreakdown {
            zero_rule: true,
            average: None,
            linear_xp: None,
            penalty_applied: false,
            xp: 0,
        };
    }

    let total = scores.sanitized().sum() + u32::from(originality.value());
    let average = f64::from(total) / f64::from(XP_DIMENSIONS);
    let linear = f64::from(MIN_FEEDBACK_XP) + (average - 1.0) * XP_PER_POINT;

    let penalty_applied = originality.value() < ANTI_FARMING_ORIGINALITY;
    let penalized = if penalty_applied {
        linear * ANTI_FARMING_MULTIPLIER
    } else {
        linear
    };

    // The floor is applied after the penalty: 200 is guaranteed for any
    // non-duplicate feedback that got a verdict.
    let xp = penalized
        .clamp(f64::from(MIN_FEEDBACK_XP), f64::from(MAX_FEEDBACK_XP))
        .round() as u32;

    XpBreakdown {
        zero_rule: false,
        average: Some(average),
        linear_xp: Some(linear),
        penalty_applied,
        xp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(r: i64, d: i64, e: i64, c: i64, t: i64) -> QualityScores {
        QualityScores::new(r, d, e, c, t).unwrap()
    }

    #[test]
    fn reference_scenario_awards_417() {
        let xp = calculate_feedback_xp(&scores(8, 7, 6, 8, 9), OriginalityScore::new(7));
        assert_eq!(xp, 417);
    }

    #[test]
    fn perfect_scores_award_500() {
        let xp = calculate_feedback_xp(&scores(10, 10, 10, 10, 10), OriginalityScore::new(10));
        assert_eq!(xp, 500);
    }

    #[test]
    fn duplicate_awards_zero_even_with_perfect_scores() {
        let xp = calculate_feedback_xp(&scores(10, 10, 10, 10, 10), OriginalityScore::new(1));
        assert_eq!(xp, 0);
    }

    #[test]
    fn all_ones_is_zero_not_floor() {
        // originality 1 short-circuits before the 200 floor.
        assert_eq!(
            calculate_feedback_xp(&scores(1, 1, 1, 1, 1), OriginalityScore::new(1)),
            0
        );
    }

    #[test]
    fn originality_two_is_penalized_but_floored() {
        let b = xp_breakdown(&scores(1, 1, 1, 1, 1), OriginalityScore::new(2));
        assert!(!b.zero_rule);
        assert!(b.penalty_applied);
        assert_eq!(b.xp, 200);
    }

    #[test]
    fn penalty_halves_high_average() {
        // avg = (10×5 + 4) / 6 = 9 → 200 + 8 × 33.33 = 466.67 → ×0.5 = 233.33 → 233
        let b = xp_breakdown(&scores(10, 10, 10, 10, 10), OriginalityScore::new(4));
        assert!(b.penalty_applied);
        assert_eq!(b.average, Some(9.0));
        assert_eq!(b.xp, 233);
    }

    #[test]
    fn originality_five_is_not_penalized() {
        let b = xp_breakdown(&scores(5, 5, 5, 5, 5), OriginalityScore::new(5));
        assert!(!b.penalty_applied);
        // avg 5 → 200 + 4 × 33.33 = 333.33
        assert_eq!(b.xp, 333);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let raw = QualityScores {
            relevance: 0,
            depth: 50,
            evidence: 10,
            constructiveness: 10,
            tone: 10,
        };
        let expected = calculate_feedback_xp(&scores(1, 10, 10, 10, 10), OriginalityScore::new(10));
        assert_eq!(calculate_feedback_xp(&raw, OriginalityScore::new(10)), expected);
    }

    #[test]
    fn missing_verdict_awards_nothing() {
        assert_eq!(feedback_xp_for(None, OriginalityScore::MAX), 0);
        let s = scores(8, 7, 6, 8, 9);
        assert_eq!(feedback_xp_for(Some(&s), OriginalityScore::new(7)), 417);
    }
}
