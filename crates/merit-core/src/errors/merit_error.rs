use super::{EmbeddingError, JudgeError, ScoringError};

/// Top-level error for every Merit operation.
#[derive(Debug, thiserror::Error)]
pub enum MeritError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("judge error: {0}")]
    JudgeError(#[from] JudgeError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("job already in flight for key: {key}")]
    AlreadyInFlight { key: String },

    #[error("{source_key} already awarded to user {user_id}")]
    AlreadyAwarded { user_id: String, source_key: String },
}

/// Result alias used across the workspace.
pub type MeritResult<T> = Result<T, MeritError>;
