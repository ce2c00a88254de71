use serde::{Deserialize, Serialize};

use super::defaults;

/// Evaluation pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of most recent history records compared per submission.
    pub history_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
        }
    }
}
