use chrono::{DateTime, Utc};
use merit_core::constants::{MIN_TIME_WEIGHT, MS_PER_DAY};

/// Default decay constant: 30 days in milliseconds.
pub const DEFAULT_DECAY_FACTOR_MS: f64 = 30.0 * MS_PER_DAY;

/// Time-decay weight: `max(0.1, e^(-age / decay_factor_ms))`.
///
/// `age` is `now - timestamp` in milliseconds. Timestamps in the future give
/// a negative age and therefore a weight above 1.0. There is no upper cap
/// beyond `f64::MAX`: the weight is always finite, even for timestamps far
/// enough ahead that the exponential overflows.
pub fn time_weight(timestamp: DateTime<Utc>, now: DateTime<Utc>, decay_factor_ms: f64) -> f64 {
    let age_ms = (now - timestamp).num_milliseconds() as f64;
    // f64::max discards NaN, so a degenerate factor lands on the floor.
    (-age_ms / decay_factor_ms)
        .exp()
        .max(MIN_TIME_WEIGHT)
        .min(f64::MAX)
}
