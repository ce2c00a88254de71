use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::MeritResult;
use crate::models::QualityAssessment;

/// Everything the judge sees about one feedback item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeRequest {
    pub feedback: String,
    pub project_context: String,
    pub has_media: bool,
}

/// External LLM-based quality judge.
///
/// Must return five scores in [1, 10] plus a short summary. Any error is a
/// hard failure for that feedback item: no score is stored and no XP is
/// awarded.
pub trait QualityJudge: Send + Sync {
    fn judge(
        &self,
        request: &JudgeRequest,
    ) -> impl Future<Output = MeritResult<QualityAssessment>> + Send;

    /// Human-readable judge name.
    fn name(&self) -> &str;
}
