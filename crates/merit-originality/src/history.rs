//! Builds time-weighted similarity samples from stored feedback history.

use chrono::{DateTime, Utc};
use merit_core::errors::MeritResult;
use merit_core::models::HistoricalFeedback;
use merit_decay::TimeDecay;
use merit_embeddings::similarities_against;
use tracing::debug;

use crate::scorer::SimilaritySample;

/// Compare `embedding` against every history record that has a stored
/// embedding, weighting each similarity by the record's age.
///
/// Records without an embedding contribute nothing.
///
/// # Errors
/// `DimensionMismatch` if any stored embedding differs in width from `embedding`.
pub fn samples_from_history<'a>(
    embedding: &[f32],
    history: impl IntoIterator<Item = &'a HistoricalFeedback>,
    decay: &TimeDecay,
    now: DateTime<Utc>,
) -> MeritResult<Vec<SimilaritySample>> {
    let mut total = 0usize;
    let comparable: Vec<&HistoricalFeedback> = history
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|h| h.embedding.is_some())
        .collect();
    let vectors: Vec<&[f32]> = comparable
        .iter()
        .filter_map(|h| h.embedding.as_deref())
        .collect();

    let similarities = similarities_against(embedding, &vectors)?;

    debug!(
        history = total,
        compared = comparable.len(),
        "built similarity samples"
    );

    Ok(comparable
        .iter()
        .zip(similarities)
        .map(|(record, similarity)| {
            SimilaritySample::new(similarity, decay.weight(record.created_at, now))
        })
        .collect())
}
