//! Tier table and progress toward the next tier.

use merit_core::constants::PROJECT_CREATION_XP;
use merit_core::models::{Tier, TierConfig, TierProgress};

/// Tier intervals in ascending order. Together they partition `[0, ∞)`.
pub const TIERS: [TierConfig; 5] = [
    TierConfig {
        tier: Tier::Bronze,
        min_xp: 0,
        max_xp: Some(999),
    },
    TierConfig {
        tier: Tier::Silver,
        min_xp: 1_000,
        max_xp: Some(4_999),
    },
    TierConfig {
        tier: Tier::Gold,
        min_xp: 5_000,
        max_xp: Some(11_999),
    },
    TierConfig {
        tier: Tier::Platinum,
        min_xp: 12_000,
        max_xp: Some(24_999),
    },
    TierConfig {
        tier: Tier::Diamond,
        min_xp: 25_000,
        max_xp: None,
    },
];

/// Interval for a tier.
pub fn tier_config(tier: Tier) -> TierConfig {
    TIERS
        .iter()
        .copied()
        .find(|c| c.tier == tier)
        .unwrap_or(TIERS[0])
}

/// Tier whose interval contains `xp`. Falls back to bronze if none does.
pub fn calculate_tier(xp: u64) -> Tier {
    current_config(xp).tier
}

/// Current tier, next tier, and how far `xp` is through the current one.
pub fn tier_progress(xp: u64) -> TierProgress {
    let current = current_config(xp);
    let next = TIERS.iter().copied().find(|c| c.min_xp > current.min_xp);

    let (progress_percentage, xp_to_next_tier) = match (current.max_xp, next) {
        (Some(max), Some(next)) => {
            let span = (max - current.min_xp + 1) as f64;
            let into = xp.saturating_sub(current.min_xp) as f64;
            let pct = (into / span * 100.0).round().clamp(0.0, 100.0) as u8;
            (pct, next.min_xp.saturating_sub(xp))
        }
        _ => (100, 0),
    };

    TierProgress {
        xp,
        current,
        next,
        progress_percentage,
        xp_to_next_tier,
    }
}

/// XP awarded for creating a project.
pub fn project_creation_xp() -> u32 {
    PROJECT_CREATION_XP
}

fn current_config(xp: u64) -> TierConfig {
    TIERS
        .iter()
        .copied()
        .find(|c| c.contains(xp))
        .unwrap_or(TIERS[0])
}
