// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";

// --- Decay ---
pub const DEFAULT_DECAY_FACTOR_DAYS: f64 = 30.0;

// --- Judge ---
pub const DEFAULT_JUDGE_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 280;

// --- Rewards ---
pub const DEFAULT_PROJECT_CREATION_XP: u32 = crate::constants::PROJECT_CREATION_XP;

// --- Engine ---
pub const DEFAULT_HISTORY_WINDOW: usize = 500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
