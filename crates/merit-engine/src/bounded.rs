//! Timeout wrapper for calls to external services.

use std::future::Future;
use std::time::Duration;

use merit_core::errors::{MeritError, MeritResult};

/// Await `operation` for at most `timeout`.
///
/// On expiry the operation's future is dropped, cancelling it, and
/// `on_timeout` supplies the error.
pub async fn with_timeout<T, Fut>(
    timeout: Duration,
    operation: Fut,
    on_timeout: impl FnOnce() -> MeritError,
) -> MeritResult<T>
where
    Fut: Future<Output = MeritResult<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout()),
    }
}
