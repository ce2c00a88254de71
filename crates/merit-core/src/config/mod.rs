//! Layered configuration for every Merit subsystem.
//!
//! Each section deserializes with `#[serde(default)]`, so a partial TOML
//! document only overrides the keys it names.

pub mod decay_config;
pub mod defaults;
pub mod embedding_config;
pub mod engine_config;
pub mod judge_config;
pub mod observability_config;
pub mod rewards_config;

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use embedding_config::EmbeddingConfig;
pub use engine_config::EngineConfig;
pub use judge_config::JudgeConfig;
pub use observability_config::ObservabilityConfig;
pub use rewards_config::RewardsConfig;

use crate::errors::{MeritError, MeritResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeritConfig {
    pub embedding: EmbeddingConfig,
    pub decay: DecayConfig,
    pub judge: JudgeConfig,
    pub rewards: RewardsConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl MeritConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(source: &str) -> MeritResult<Self> {
        toml::from_str(source).map_err(|e| MeritError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MeritResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| MeritError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> MeritResult<String> {
        toml::to_string(self).map_err(|e| MeritError::ConfigError(e.to_string()))
    }
}
