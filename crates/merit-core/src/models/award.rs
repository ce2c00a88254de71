use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What earned an XP award.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AwardSource {
    Feedback { feedback_id: String },
    ProjectCreation { project_id: String },
}

impl std::fmt::Display for AwardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwardSource::Feedback { feedback_id } => write!(f, "feedback:{feedback_id}"),
            AwardSource::ProjectCreation { project_id } => write!(f, "project:{project_id}"),
        }
    }
}

/// One entry of a user's XP audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct XpAward {
    pub id: String,
    pub user_id: String,
    pub source: AwardSource,
    pub amount: u32,
    /// Global, strictly increasing submission order.
    pub sequence: u64,
    /// The user's cumulative XP after this award.
    pub total_after: u64,
    pub awarded_at: DateTime<Utc>,
}
