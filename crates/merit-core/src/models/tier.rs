use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Reputation band derived from cumulative XP. Ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 5] = [
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
            Tier::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive XP interval of a tier. `max_xp == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierConfig {
    pub tier: Tier,
    pub min_xp: u64,
    pub max_xp: Option<u64>,
}

impl TierConfig {
    /// Whether `xp` falls inside this tier's interval.
    pub fn contains(&self, xp: u64) -> bool {
        xp >= self.min_xp && self.max_xp.map_or(true, |max| xp <= max)
    }
}

/// Where a user stands within their current tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TierProgress {
    pub xp: u64,
    pub current: TierConfig,
    pub next: Option<TierConfig>,
    /// Percent through the current tier's span, 0–100. Always 100 at the top tier.
    pub progress_percentage: u8,
    /// XP still needed to reach the next tier. 0 at the top tier.
    pub xp_to_next_tier: u64,
}
