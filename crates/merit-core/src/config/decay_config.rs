use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MS_PER_DAY;

/// Time-decay weighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Decay constant in days. A history item this old weighs `e^-1`.
    pub decay_factor_days: f64,
}

impl DecayConfig {
    /// Decay constant in milliseconds, the unit the weighting formula works in.
    pub fn decay_factor_ms(&self) -> f64 {
        self.decay_factor_days * MS_PER_DAY
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            decay_factor_days: defaults::DEFAULT_DECAY_FACTOR_DAYS,
        }
    }
}
