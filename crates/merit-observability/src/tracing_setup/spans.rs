//! Span definitions per operation: evaluation, embedding, originality, judge, award.

/// Create an evaluation span covering one feedback submission.
#[macro_export]
macro_rules! evaluation_span {
    ($feedback_id:expr, $history_len:expr) => {
        tracing::info_span!(
            "merit.evaluation",
            feedback_id = %$feedback_id,
            history = $history_len
        )
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimensions:expr) => {
        tracing::info_span!("merit.embedding", provider = %$provider, dimensions = $dimensions)
    };
}

/// Create an originality span.
#[macro_export]
macro_rules! originality_span {
    ($samples:expr) => {
        tracing::info_span!("merit.originality", samples = $samples)
    };
}

/// Create a judge span.
#[macro_export]
macro_rules! judge_span {
    ($judge:expr, $has_media:expr) => {
        tracing::info_span!("merit.judge", judge = %$judge, has_media = $has_media)
    };
}

/// Create an award span.
#[macro_export]
macro_rules! award_span {
    ($user_id:expr) => {
        tracing::info_span!("merit.award", user_id = %$user_id)
    };
}
