use serde::{Deserialize, Serialize};

use super::defaults;

/// Reward configuration.
///
/// Only the project-creation award is tunable. The feedback XP schedule is
/// fixed so that scores stay comparable across deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub project_creation_xp: u32,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            project_creation_xp: defaults::DEFAULT_PROJECT_CREATION_XP,
        }
    }
}
