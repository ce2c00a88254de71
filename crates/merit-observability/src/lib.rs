//! # merit-observability
//!
//! Tracing subscriber setup (`MERIT_LOG` filter, JSON or pretty output) and
//! the span macros used around each scoring operation.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
