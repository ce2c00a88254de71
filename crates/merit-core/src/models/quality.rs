use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::errors::{MeritResult, ScoringError};

/// The five judge-assigned quality dimensions, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityScores {
    pub relevance: u8,
    pub depth: u8,
    pub evidence: u8,
    pub constructiveness: u8,
    pub tone: u8,
}

impl QualityScores {
    /// Dimension names, in field order.
    pub const DIMENSIONS: [&'static str; 5] =
        ["relevance", "depth", "evidence", "constructiveness", "tone"];

    /// Build from values that must already lie in [1, 10].
    ///
    /// # Errors
    /// `ScoreOutOfRange` naming the first offending dimension.
    pub fn new(
        relevance: i64,
        depth: i64,
        evidence: i64,
        constructiveness: i64,
        tone: i64,
    ) -> MeritResult<Self> {
        let values = [relevance, depth, evidence, constructiveness, tone];
        for (dimension, value) in Self::DIMENSIONS.iter().zip(values) {
            if !(i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
                return Err(ScoringError::ScoreOutOfRange {
                    dimension: (*dimension).to_string(),
                    value,
                }
                .into());
            }
        }
        Ok(Self::from_array(values.map(|v| v as u8)))
    }

    /// Build from arbitrary integers, clamping each into [1, 10].
    pub fn clamped(
        relevance: i64,
        depth: i64,
        evidence: i64,
        constructiveness: i64,
        tone: i64,
    ) -> Self {
        let values = [relevance, depth, evidence, constructiveness, tone];
        Self::from_array(values.map(clamp_score))
    }

    /// Re-check a value that bypassed the constructors (e.g. deserialized).
    pub fn validate(&self) -> MeritResult<()> {
        let [r, d, e, c, t] = self.to_array().map(i64::from);
        Self::new(r, d, e, c, t).map(|_| ())
    }

    /// Copy of `self` with every dimension forced into [1, 10].
    pub fn sanitized(&self) -> Self {
        Self::from_array(self.to_array().map(|v| v.clamp(MIN_SCORE, MAX_SCORE)))
    }

    /// Values in `DIMENSIONS` order.
    pub fn to_array(&self) -> [u8; 5] {
        [
            self.relevance,
            self.depth,
            self.evidence,
            self.constructiveness,
            self.tone,
        ]
    }

    /// Sum of the five dimensions.
    pub fn sum(&self) -> u32 {
        self.to_array().iter().map(|&v| u32::from(v)).sum()
    }

    fn from_array([relevance, depth, evidence, constructiveness, tone]: [u8; 5]) -> Self {
        Self {
            relevance,
            depth,
            evidence,
            constructiveness,
            tone,
        }
    }
}

fn clamp_score(value: i64) -> u8 {
    value.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8
}

/// A complete judge verdict: scores plus a short natural-language summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityAssessment {
    pub scores: QualityScores,
    pub summary: String,
}
