mod award;
mod feedback;
mod originality;
mod quality;
mod tier;

pub use award::{AwardSource, XpAward};
pub use feedback::{FeedbackEvaluation, FeedbackSubmission, HistoricalFeedback};
pub use originality::OriginalityScore;
pub use quality::{QualityAssessment, QualityScores};
pub use tier::{Tier, TierConfig, TierProgress};
