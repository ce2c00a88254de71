//! `QualityJudge` backed by any text-completion LLM client.

use std::future::Future;

use merit_core::config::JudgeConfig;
use merit_core::errors::MeritResult;
use merit_core::models::QualityAssessment;
use merit_core::traits::{JudgeRequest, QualityJudge};
use tracing::debug;

use crate::{parse_response, render_prompt};

/// Raw text completion. Implemented by the HTTP client of whichever LLM
/// vendor the deployment uses.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, prompt: &str) -> impl Future<Output = MeritResult<String>> + Send;

    fn model(&self) -> &str;
}

/// Renders the judge prompt, sends it, and parses the reply.
pub struct LlmJudge<C> {
    client: C,
    summary_max_chars: usize,
}

impl<C: CompletionClient> LlmJudge<C> {
    pub fn new(client: C, config: &JudgeConfig) -> Self {
        Self {
            client,
            summary_max_chars: config.summary_max_chars,
        }
    }
}

impl<C: CompletionClient> QualityJudge for LlmJudge<C> {
    async fn judge(&self, request: &JudgeRequest) -> MeritResult<QualityAssessment> {
        let prompt = render_prompt(request);
        let reply = self.client.complete(&prompt).await?;
        debug!(model = self.client.model(), reply_len = reply.len(), "judge replied");
        parse_response(&reply, self.summary_max_chars)
    }

    fn name(&self) -> &str {
        self.client.model()
    }
}
