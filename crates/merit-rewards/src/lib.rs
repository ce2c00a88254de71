//! # merit-rewards
//!
//! XP for feedback quality, tier progression over cumulative XP, and an
//! in-memory ledger that accumulates awards per user.
//!
//! Feedback XP lies in [200, 500] for accepted feedback and is exactly 0 for
//! near-duplicates (originality 1). Low originality (< 5) halves the award
//! before the 200 floor is applied.

pub mod ledger;
pub mod tier;
pub mod xp;

pub use ledger::XpLedger;
pub use tier::{calculate_tier, project_creation_xp, tier_config, tier_progress, TIERS};
pub use xp::{calculate_feedback_xp, feedback_xp_for, xp_breakdown, XpBreakdown};
