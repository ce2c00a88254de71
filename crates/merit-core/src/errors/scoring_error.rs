/// Input contract violations in the scoring functions.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("{dimension} score {value} outside [1, 10]")]
    ScoreOutOfRange { dimension: String, value: i64 },

    #[error("invalid similarity weight: {value}")]
    InvalidWeight { value: f64 },
}
