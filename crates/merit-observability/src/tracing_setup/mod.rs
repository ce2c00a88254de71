//! Tracing setup — structured logging with per-operation spans.

pub mod spans;

use merit_core::config::ObservabilityConfig;
use merit_core::errors::{MeritError, MeritResult};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "MERIT_LOG";

/// Install the global tracing subscriber.
///
/// `MERIT_LOG` takes precedence over `config.log_level`.
///
/// # Errors
/// `ConfigError` if the filter does not parse or a global subscriber is
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> MeritResult<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };
    install(filter, config.json)
}

/// Install the global subscriber with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> MeritResult<()> {
    install(parse_filter(filter)?, json)
}

fn parse_filter(directives: &str) -> MeritResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| MeritError::ConfigError(format!("invalid log filter {directives:?}: {e}")))
}

fn install(filter: EnvFilter, json: bool) -> MeritResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| MeritError::ConfigError(format!("tracing already initialized: {e}")))
}
