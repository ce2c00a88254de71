//! # merit-originality
//!
//! Turns a set of historical similarity scores, optionally time-weighted,
//! into a single originality score in [1, 10]. The schedule penalizes
//! near-duplicates much more steeply than it rewards novelty.

pub mod history;
pub mod schedule;
pub mod scorer;

pub use history::samples_from_history;
pub use schedule::{raw_originality, SimilarityBucket};
pub use scorer::{
    originality_breakdown, originality_from_similarities, originality_score,
    OriginalityBreakdown, SimilaritySample,
};
