//! # merit-decay
//!
//! Converts the age of a historical feedback item into a similarity weight:
//! `max(0.1, e^(-age / decayFactor))`. Recent history counts fully, old
//! history fades toward the 0.1 floor but never disappears.

pub mod engine;
pub mod weight;

pub use engine::TimeDecay;
pub use weight::{time_weight, DEFAULT_DECAY_FACTOR_MS};
