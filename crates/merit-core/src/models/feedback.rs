use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{OriginalityScore, QualityAssessment};

/// A new piece of feedback awaiting evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub content: String,
    /// Project description the feedback responds to; forwarded to the judge.
    pub project_context: String,
    /// Whether the feedback carries an attachment (screenshot, recording).
    pub has_media: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Previously accepted feedback, as supplied by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalFeedback {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Stored embedding. `None` when embedding failed at the time it was saved.
    pub embedding: Option<Vec<f32>>,
}

/// Outcome of scoring one feedback item.
///
/// `quality == None` means the judge produced nothing usable; `xp` is then 0
/// and the feedback is stored unscored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeedbackEvaluation {
    pub feedback_id: String,
    pub originality: OriginalityScore,
    /// Number of history records that contributed a similarity sample.
    pub compared_against: u32,
    pub quality: Option<QualityAssessment>,
    pub xp: u32,
    /// Embedding of the new feedback, handed back so the caller can persist it.
    #[serde(skip)]
    pub embedding: Option<Vec<f32>>,
}

impl FeedbackEvaluation {
    /// Whether the judge produced a usable verdict.
    pub fn is_scored(&self) -> bool {
        self.quality.is_some()
    }
}
