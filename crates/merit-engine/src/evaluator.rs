//! FeedbackEvaluator — scores one submission end to end.

use std::time::Duration;

use chrono::{DateTime, Utc};
use merit_core::config::MeritConfig;
use merit_core::errors::{EmbeddingError, JudgeError, MeritResult};
use merit_core::models::{
    FeedbackEvaluation, FeedbackSubmission, HistoricalFeedback, OriginalityScore,
    QualityAssessment,
};
use merit_core::traits::{EmbeddingProvider, JudgeRequest, QualityJudge};
use merit_decay::TimeDecay;
use merit_embeddings::validate_dimensions;
use merit_observability::{embedding_span, evaluation_span, judge_span, originality_span};
use merit_originality::{originality_breakdown, samples_from_history};
use merit_rewards::feedback_xp_for;
use tracing::{debug, info, warn, Instrument};

use crate::bounded::with_timeout;

/// Orchestrates embedding, originality, judging and XP for one submission.
pub struct FeedbackEvaluator<E, J> {
    embedder: E,
    judge: J,
    provider: String,
    decay: TimeDecay,
    dimensions: usize,
    embed_timeout: Duration,
    judge_timeout: Duration,
    history_window: usize,
}

impl<E: EmbeddingProvider, J: QualityJudge> FeedbackEvaluator<E, J> {
    /// # Errors
    /// `ConfigError` if the decay constant is not positive.
    pub fn new(embedder: E, judge: J, config: &MeritConfig) -> MeritResult<Self> {
        let decay = TimeDecay::from_config(&config.decay)?;
        info!(
            provider = %config.embedding.provider,
            embedder = embedder.name(),
            judge = judge.name(),
            dims = config.embedding.dimensions,
            decay_factor_days = config.decay.decay_factor_days,
            "FeedbackEvaluator initialized"
        );
        Ok(Self {
            embedder,
            judge,
            provider: config.embedding.provider.clone(),
            decay,
            dimensions: config.embedding.dimensions,
            embed_timeout: Duration::from_millis(config.embedding.timeout_ms),
            judge_timeout: Duration::from_millis(config.judge.timeout_ms),
            history_window: config.engine.history_window,
        })
    }

    /// Evaluate against the current time.
    pub async fn evaluate(
        &self,
        submission: &FeedbackSubmission,
        history: &[HistoricalFeedback],
    ) -> MeritResult<FeedbackEvaluation> {
        self.evaluate_at(submission, history, Utc::now()).await
    }

    /// Evaluate with an explicit "now" for time weighting.
    ///
    /// Embedding and judge failures are absorbed: the evaluation still
    /// succeeds, with maximal originality or with no verdict and 0 XP.
    ///
    /// # Errors
    /// `DimensionMismatch` if a stored history embedding has a different
    /// width than the new one.
    pub async fn evaluate_at(
        &self,
        submission: &FeedbackSubmission,
        history: &[HistoricalFeedback],
        now: DateTime<Utc>,
    ) -> MeritResult<FeedbackEvaluation> {
        let span = evaluation_span!(submission.id, history.len());
        self.run(submission, history, now).instrument(span).await
    }

    async fn run(
        &self,
        submission: &FeedbackSubmission,
        history: &[HistoricalFeedback],
        now: DateTime<Utc>,
    ) -> MeritResult<FeedbackEvaluation> {
        let request = JudgeRequest {
            feedback: submission.content.clone(),
            project_context: submission.project_context.clone(),
            has_media: submission.has_media,
        };

        // Embedding and judging are independent; run them together.
        let (embedding, quality) =
            tokio::join!(self.embed(&submission.content), self.assess(&request));

        let (originality, compared_against) = match embedding.as_deref() {
            Some(vector) => self.originality(vector, history, now)?,
            None => (OriginalityScore::MAX, 0),
        };

        let xp = feedback_xp_for(quality.as_ref().map(|q| &q.scores), originality);

        info!(
            originality = originality.value(),
            compared_against,
            scored = quality.is_some(),
            xp,
            "feedback evaluated"
        );

        Ok(FeedbackEvaluation {
            feedback_id: submission.id.clone(),
            originality,
            compared_against,
            quality,
            xp,
            embedding,
        })
    }

    async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let timeout_ms = self.embed_timeout.as_millis() as u64;
        let call = with_timeout(self.embed_timeout, self.embedder.embed(text), || {
            EmbeddingError::Timeout { timeout_ms }.into()
        })
        .instrument(embedding_span!(self.embedder.name(), self.dimensions));

        let vector = match call.await {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    provider = %self.provider,
                    error = %e,
                    "embedding unavailable, treating feedback as fully original"
                );
                return None;
            }
        };
        if let Err(e) = validate_dimensions(&vector, self.dimensions) {
            warn!(
                provider = %self.provider,
                error = %e,
                "provider returned wrong-width embedding, discarding it"
            );
            return None;
        }
        Some(vector)
    }

    async fn assess(&self, request: &JudgeRequest) -> Option<QualityAssessment> {
        let timeout_ms = self.judge_timeout.as_millis() as u64;
        let call = with_timeout(self.judge_timeout, self.judge.judge(request), || {
            JudgeError::Timeout { timeout_ms }.into()
        })
        .instrument(judge_span!(self.judge.name(), request.has_media));

        match call.await {
            Ok(mut assessment) => {
                let sanitized = assessment.scores.sanitized();
                if sanitized != assessment.scores {
                    warn!("judge scores outside [1, 10], clamping");
                    assessment.scores = sanitized;
                }
                Some(assessment)
            }
            Err(e) => {
                warn!(error = %e, "no quality verdict, feedback stays unscored");
                None
            }
        }
    }

    fn originality(
        &self,
        embedding: &[f32],
        history: &[HistoricalFeedback],
        now: DateTime<Utc>,
    ) -> MeritResult<(OriginalityScore, u32)> {
        let _span = originality_span!(history.len()).entered();

        // Most recent records first, up to the configured window.
        let mut recent: Vec<&HistoricalFeedback> = history.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(self.history_window);

        let samples = samples_from_history(embedding, recent, &self.decay, now)?;
        let breakdown = originality_breakdown(&samples)?;
        debug!(
            weighted_average = ?breakdown.weighted_average,
            bucket = ?breakdown.bucket,
            raw = breakdown.raw,
            "originality breakdown"
        );
        let compared = u32::try_from(breakdown.samples_used).unwrap_or(u32::MAX);
        Ok((breakdown.score, compared))
    }
}
