use chrono::{DateTime, Utc};
use merit_core::config::DecayConfig;
use merit_core::errors::{MeritError, MeritResult};

use crate::weight;

/// Time-decay weighting with a configured decay constant.
#[derive(Debug, Clone, Copy)]
pub struct TimeDecay {
    decay_factor_ms: f64,
}

impl TimeDecay {
    /// Create with the default 30-day decay constant.
    pub fn new() -> Self {
        Self {
            decay_factor_ms: weight::DEFAULT_DECAY_FACTOR_MS,
        }
    }

    /// Create with a custom decay constant in milliseconds.
    ///
    /// # Errors
    /// `ConfigError` unless the factor is finite and positive.
    pub fn with_factor_ms(decay_factor_ms: f64) -> MeritResult<Self> {
        if !decay_factor_ms.is_finite() || decay_factor_ms <= 0.0 {
            return Err(MeritError::ConfigError(format!(
                "decay factor must be a positive number of milliseconds, got {decay_factor_ms}"
            )));
        }
        Ok(Self { decay_factor_ms })
    }

    /// Create from the `[decay]` config section.
    pub fn from_config(config: &DecayConfig) -> MeritResult<Self> {
        Self::with_factor_ms(config.decay_factor_ms())
    }

    pub fn decay_factor_ms(&self) -> f64 {
        self.decay_factor_ms
    }

    /// Weight of an item created at `timestamp`, seen from `now`.
    pub fn weight(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        weight::time_weight(timestamp, now, self.decay_factor_ms)
    }

    /// Weight of an item created at `timestamp`, seen from the current time.
    pub fn weight_now(&self, timestamp: DateTime<Utc>) -> f64 {
        self.weight(timestamp, Utc::now())
    }
}

impl Default for TimeDecay {
    fn default() -> Self {
        Self::new()
    }
}
