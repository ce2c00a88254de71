//! Cosine similarity between two embeddings.
//!
//! Vectors must have equal length. A zero-magnitude vector carries no
//! direction, so any comparison involving one yields `0.0` instead of NaN.

use merit_core::errors::{EmbeddingError, MeritResult};
use rayon::prelude::*;

/// Below this many comparisons the rayon fan-out costs more than it saves.
const PARALLEL_THRESHOLD: usize = 64;

/// Cosine similarity: `a·b / (|a| |b|)`, accumulated in f64.
///
/// Returns a value in [-1.0, 1.0]. Returns `0.0` when either vector has zero
/// magnitude (including the empty vector).
///
/// # Errors
/// `DimensionMismatch` if `a.len() != b.len()`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> MeritResult<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .into());
    }

    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON || !denom.is_finite() {
        return Ok(0.0);
    }
    Ok((dot / denom).clamp(-1.0, 1.0))
}

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> MeritResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// Similarity of `query` against each candidate, in candidate order.
///
/// Fails on the first candidate whose width differs from `query`.
pub fn similarities_against(query: &[f32], candidates: &[&[f32]]) -> MeritResult<Vec<f64>> {
    if candidates.len() < PARALLEL_THRESHOLD {
        return candidates
            .iter()
            .map(|c| cosine_similarity(query, c))
            .collect();
    }
    candidates
        .par_iter()
        .map(|c| cosine_similarity(query, c))
        .collect()
}
