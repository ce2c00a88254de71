//! InFlightSet — per-key exclusion for background jobs via DashSet.
//!
//! Used to keep at most one summary-generation job per project running. The
//! key is released when the permit drops, which covers success, error,
//! panic unwinding, and cancellation of the owning future.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashSet;
use merit_core::errors::{MeritError, MeritResult};
use tracing::debug;

/// Set of keys with a job currently running. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct InFlightSet {
    keys: Arc<DashSet<String>>,
}

/// Proof that the holder owns `key`. Dropping it releases the key.
#[derive(Debug)]
pub struct InFlightPermit {
    keys: Arc<DashSet<String>>,
    key: String,
}

impl InFlightPermit {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.keys.remove(&self.key);
        debug!(key = %self.key, "in-flight key released");
    }
}

impl InFlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`. Returns `None` if a job for it is already running.
    pub fn try_acquire(&self, key: &str) -> Option<InFlightPermit> {
        if self.keys.insert(key.to_string()) {
            debug!(key, "in-flight key acquired");
            Some(InFlightPermit {
                keys: Arc::clone(&self.keys),
                key: key.to_string(),
            })
        } else {
            None
        }
    }

    /// Run `job` while holding `key`.
    ///
    /// # Errors
    /// `AlreadyInFlight` without running `job` if the key is taken; otherwise
    /// whatever `job` returns.
    pub async fn run_exclusive<T, Fut>(&self, key: &str, job: Fut) -> MeritResult<T>
    where
        Fut: Future<Output = MeritResult<T>>,
    {
        let _permit = self
            .try_acquire(key)
            .ok_or_else(|| MeritError::AlreadyInFlight {
                key: key.to_string(),
            })?;
        job.await
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
