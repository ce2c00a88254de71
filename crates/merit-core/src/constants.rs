/// Merit engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest value any quality dimension (including originality) can take.
pub const MIN_SCORE: u8 = 1;

/// Highest value any quality dimension (including originality) can take.
pub const MAX_SCORE: u8 = 10;

/// Number of dimensions averaged by the XP calculator (five judged + originality).
pub const XP_DIMENSIONS: u32 = 6;

/// Guaranteed minimum XP for any accepted, non-duplicate feedback.
pub const MIN_FEEDBACK_XP: u32 = 200;

/// Maximum XP a single feedback item can earn.
pub const MAX_FEEDBACK_XP: u32 = 500;

/// Originality at or below this earns nothing (near-duplicate spam).
pub const ZERO_XP_ORIGINALITY: u8 = 1;

/// Originality strictly below this halves the XP award.
pub const ANTI_FARMING_ORIGINALITY: u8 = 5;

/// Multiplier applied when the anti-farming penalty triggers.
pub const ANTI_FARMING_MULTIPLIER: f64 = 0.5;

/// XP awarded for creating a project.
pub const PROJECT_CREATION_XP: u32 = 200;

/// Floor for time-decay weights; no historical item is ever fully ignored.
pub const MIN_TIME_WEIGHT: f64 = 0.1;

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 86_400_000.0;
