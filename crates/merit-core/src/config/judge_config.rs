use serde::{Deserialize, Serialize};

use super::defaults;

/// LLM quality judge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Upper bound on a single judge call, in milliseconds.
    pub timeout_ms: u64,
    /// Summaries longer than this are truncated (in chars).
    pub summary_max_chars: usize,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_JUDGE_TIMEOUT_MS,
            summary_max_chars: defaults::DEFAULT_SUMMARY_MAX_CHARS,
        }
    }
}
