//! # merit-engine
//!
//! Runs one feedback submission through the whole reward pipeline:
//!
//! ```text
//! embed (timeout) ─► similarity × time weight vs history ─► originality ─┐
//! judge (timeout) ───────────────────────────────────────────────────────┴► XP
//! ```
//!
//! The scoring math is synchronous and lives in the leaf crates. This crate
//! owns the async boundary: every external call is timeout-bounded and
//! collapses to "no signal" on failure. A missing embedding is treated
//! generously (maximal originality); a missing verdict is treated
//! conservatively (no XP).

pub mod bounded;
pub mod evaluator;
pub mod inflight;

pub use evaluator::FeedbackEvaluator;
pub use inflight::{InFlightPermit, InFlightSet};
