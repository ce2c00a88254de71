//! # merit-core
//!
//! Foundation crate for the Merit feedback reward engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MeritConfig;
pub use errors::{MeritError, MeritResult};
pub use models::{
    AwardSource, FeedbackEvaluation, HistoricalFeedback, OriginalityScore, QualityAssessment,
    QualityScores, Tier, TierConfig, TierProgress, XpAward,
};
