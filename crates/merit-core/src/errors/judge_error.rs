/// Failures of the external quality judge or of its response.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("judge unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("judge timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed judge response: {reason}")]
    MalformedResponse { reason: String },

    #[error("judge response missing score: {dimension}")]
    MissingScore { dimension: String },

    #[error("judge score for {dimension} is not a number")]
    NonNumericScore { dimension: String },
}
