use std::future::Future;

use crate::errors::MeritResult;

/// External embedding generation service.
///
/// Implementations perform network I/O; callers bound every call with a
/// timeout and treat any failure as "no similarity signal".
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> impl Future<Output = MeritResult<Vec<f32>>> + Send;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
