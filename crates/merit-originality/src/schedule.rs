//! Five-bucket piecewise-linear map from average similarity to raw originality.
//!
//! ```text
//! avg ≥ 0.95         → 1
//! 0.85 ≤ avg < 0.95  → 1 + (0.95 − avg) × 20    (1, 3]
//! 0.70 ≤ avg < 0.85  → 3 + (0.85 − avg) × 20    (3, 6]
//! 0.50 ≤ avg < 0.70  → 6 + (0.70 − avg) × 15    (6, 9]
//! avg < 0.50         → 9 + (0.50 − avg) × 2     (9, 10]
//! ```
//!
//! Cut points and slopes are tuned values; changing any of them changes
//! scores for existing feedback.

use serde::{Deserialize, Serialize};

pub const DUPLICATE_THRESHOLD: f64 = 0.95;
pub const NEAR_DUPLICATE_THRESHOLD: f64 = 0.85;
pub const DERIVATIVE_THRESHOLD: f64 = 0.70;
pub const RELATED_THRESHOLD: f64 = 0.50;

/// Which segment of the schedule an average similarity falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBucket {
    /// avg ≥ 0.95
    Duplicate,
    /// 0.85 ≤ avg < 0.95
    NearDuplicate,
    /// 0.70 ≤ avg < 0.85
    Derivative,
    /// 0.50 ≤ avg < 0.70
    Related,
    /// avg < 0.50
    Novel,
}

impl SimilarityBucket {
    pub fn classify(avg: f64) -> Self {
        if avg >= DUPLICATE_THRESHOLD {
            Self::Duplicate
        } else if avg >= NEAR_DUPLICATE_THRESHOLD {
            Self::NearDuplicate
        } else if avg >= DERIVATIVE_THRESHOLD {
            Self::Derivative
        } else if avg >= RELATED_THRESHOLD {
            Self::Related
        } else {
            Self::Novel
        }
    }
}

/// Unrounded originality for a weighted average similarity.
pub fn raw_originality(avg: f64) -> f64 {
    match SimilarityBucket::classify(avg) {
        SimilarityBucket::Duplicate => 1.0,
        SimilarityBucket::NearDuplicate => 1.0 + (DUPLICATE_THRESHOLD - avg) * 20.0,
        SimilarityBucket::Derivative => 3.0 + (NEAR_DUPLICATE_THRESHOLD - avg) * 20.0,
        SimilarityBucket::Related => 6.0 + (DERIVATIVE_THRESHOLD - avg) * 15.0,
        SimilarityBucket::Novel => 9.0 + (RELATED_THRESHOLD - avg) * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_points_belong_to_the_lower_originality_bucket() {
        assert_eq!(SimilarityBucket::classify(0.95), SimilarityBucket::Duplicate);
        assert_eq!(SimilarityBucket::classify(0.85), SimilarityBucket::NearDuplicate);
        assert_eq!(SimilarityBucket::classify(0.70), SimilarityBucket::Derivative);
        assert_eq!(SimilarityBucket::classify(0.50), SimilarityBucket::Related);
        assert_eq!(SimilarityBucket::classify(0.4999), SimilarityBucket::Novel);
    }

    #[test]
    fn segment_values_at_cut_points() {
        assert_eq!(raw_originality(0.95), 1.0);
        assert!((raw_originality(0.85) - 3.0).abs() < 1e-9);
        assert!((raw_originality(0.70) - 6.0).abs() < 1e-9);
        assert!((raw_originality(0.50) - 9.0).abs() < 1e-9);
        assert!((raw_originality(0.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn negative_similarity_overshoots_ten() {
        // Clamping happens in the scorer, not here.
        assert!(raw_originality(-1.0) > 10.0);
    }
}
