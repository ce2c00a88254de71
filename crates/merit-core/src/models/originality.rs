use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// How novel a piece of feedback is relative to prior feedback, in [1, 10].
///
/// 10 means no comparable history or highly dissimilar content; 1 means a
/// near-duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OriginalityScore(u8);

impl OriginalityScore {
    /// Lowest originality: a near-duplicate.
    pub const MIN: Self = Self(MIN_SCORE);
    /// Highest originality, also used when there is nothing to compare against.
    pub const MAX: Self = Self(MAX_SCORE);

    /// Create a new score, clamping to [1, 10].
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Round a raw schedule value to the nearest integer and clamp to [1, 10].
    ///
    /// Non-finite input maps to `MAX`.
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::MAX;
        }
        let rounded = raw.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
        Self(rounded as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for OriginalityScore {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for OriginalityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OriginalityScore> for u8 {
    fn from(score: OriginalityScore) -> Self {
        score.0
    }
}
