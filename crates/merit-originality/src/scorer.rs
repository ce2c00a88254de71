use merit_core::errors::{MeritResult, ScoringError};
use merit_core::models::OriginalityScore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::{raw_originality, SimilarityBucket};

/// One historical comparison: cosine similarity and its time-decay weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySample {
    pub similarity: f64,
    pub weight: f64,
}

impl SimilaritySample {
    pub fn new(similarity: f64, weight: f64) -> Self {
        Self { similarity, weight }
    }

    /// A sample with uniform weight 1.0.
    pub fn unweighted(similarity: f64) -> Self {
        Self::new(similarity, 1.0)
    }
}

/// Every intermediate value of an originality computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginalityBreakdown {
    /// Samples that carried a usable similarity.
    pub samples_used: usize,
    /// Samples dropped because their similarity was not finite.
    pub samples_skipped: usize,
    /// `None` when there was nothing to compare against.
    pub weighted_average: Option<f64>,
    pub bucket: Option<SimilarityBucket>,
    pub raw: f64,
    pub score: OriginalityScore,
}

/// Originality score for a set of weighted similarity samples.
///
/// An empty set (or one where every similarity is NaN) scores 10: with no
/// history there is nothing to be a duplicate of.
///
/// # Errors
/// `InvalidWeight` if any weight is negative or not finite.
pub fn originality_score(samples: &[SimilaritySample]) -> MeritResult<OriginalityScore> {
    originality_breakdown(samples).map(|b| b.score)
}

/// Originality score treating every similarity with uniform weight.
pub fn originality_from_similarities(similarities: &[f64]) -> OriginalityScore {
    let samples: Vec<SimilaritySample> = similarities
        .iter()
        .copied()
        .map(SimilaritySample::unweighted)
        .collect();
    // Unit weights always validate.
    originality_score(&samples).unwrap_or(OriginalityScore::MAX)
}

/// Compute originality with a full breakdown of each step.
pub fn originality_breakdown(samples: &[SimilaritySample]) -> MeritResult<OriginalityBreakdown> {
    if let Some(bad) = samples
        .iter()
        .find(|s| !s.weight.is_finite() || s.weight < 0.0)
    {
        return Err(ScoringError::InvalidWeight { value: bad.weight }.into());
    }

    // NaN similarity means an upstream vector had no direction: no signal.
    let usable: Vec<&SimilaritySample> = samples
        .iter()
        .filter(|s| s.similarity.is_finite())
        .collect();
    let used = usable.len();
    let skipped = samples.len() - used;
    let max_weight = usable.iter().map(|s| s.weight).fold(0.0, f64::max);

    if used == 0 || max_weight <= 0.0 {
        debug!(skipped, "no usable history, originality is maximal");
        return Ok(OriginalityBreakdown {
            samples_used: used,
            samples_skipped: skipped,
            weighted_average: None,
            bucket: None,
            raw: f64::from(OriginalityScore::MAX.value()),
            score: OriginalityScore::MAX,
        });
    }

    // Weights are rescaled into [0, 1] so the sums stay finite however large
    // individual weights are.
    let (weighted_sum, weight_total) = usable.iter().fold((0.0, 0.0), |(sum, total), s| {
        let w = s.weight / max_weight;
        (sum + s.similarity * w, total + w)
    });
    let avg = weighted_sum / weight_total;
    let bucket = SimilarityBucket::classify(avg);
    let raw = raw_originality(avg);
    let score = OriginalityScore::from_raw(raw);

    debug!(
        samples = used,
        skipped,
        weighted_average = avg,
        bucket = ?bucket,
        score = score.value(),
        "originality scored"
    );

    Ok(OriginalityBreakdown {
        samples_used: used,
        samples_skipped: skipped,
        weighted_average: Some(avg),
        bucket: Some(bucket),
        raw,
        score,
    })
}
