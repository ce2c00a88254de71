mod embedding_error;
mod judge_error;
mod merit_error;
mod scoring_error;

pub use embedding_error::EmbeddingError;
pub use judge_error::JudgeError;
pub use merit_error::{MeritError, MeritResult};
pub use scoring_error::ScoringError;
