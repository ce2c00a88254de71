//! XpLedger — concurrent per-user XP accumulation via DashMap.
//!
//! Each user's total and audit trail sit behind one map entry, so concurrent
//! awards for the same user serialize on that entry and never lose updates.
//! A global sequence number, taken while the entry is held, orders every
//! award in submission order.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use merit_core::config::RewardsConfig;
use merit_core::errors::{MeritError, MeritResult};
use merit_core::models::{AwardSource, FeedbackEvaluation, Tier, TierProgress, XpAward};
use merit_observability::award_span;
use tracing::{debug, info};

use crate::tier;

#[derive(Debug, Default)]
struct UserAccount {
    xp: u64,
    awards: Vec<XpAward>,
    sources: HashSet<AwardSource>,
}

/// Thread-safe store of cumulative user XP.
pub struct XpLedger {
    accounts: DashMap<String, UserAccount>,
    sequence: AtomicU64,
    project_creation_xp: u32,
}

impl XpLedger {
    /// Create an empty ledger with the default project-creation award.
    pub fn new() -> Self {
        Self::with_config(&RewardsConfig::default())
    }

    /// Create an empty ledger using the `[rewards]` config section.
    pub fn with_config(config: &RewardsConfig) -> Self {
        Self {
            accounts: DashMap::new(),
            sequence: AtomicU64::new(0),
            project_creation_xp: config.project_creation_xp,
        }
    }

    /// Credit XP for accepted feedback.
    ///
    /// A zero amount is not an award: nothing is recorded and `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    /// `AlreadyAwarded` if this feedback was already credited to the user.
    pub fn award_feedback(
        &self,
        user_id: &str,
        feedback_id: &str,
        amount: u32,
    ) -> MeritResult<Option<XpAward>> {
        if amount == 0 {
            debug!(user_id, feedback_id, "zero XP, nothing to record");
            return Ok(None);
        }
        let source = AwardSource::Feedback {
            feedback_id: feedback_id.to_string(),
        };
        self.award(user_id, source, amount).map(Some)
    }

    /// Credit the evaluation's XP to `user_id`.
    pub fn record_evaluation(
        &self,
        user_id: &str,
        evaluation: &FeedbackEvaluation,
    ) -> MeritResult<Option<XpAward>> {
        self.award_feedback(user_id, &evaluation.feedback_id, evaluation.xp)
    }

    /// Credit the fixed project-creation award.
    ///
    /// # Errors
    /// `AlreadyAwarded` if this project was already credited to the user.
    pub fn award_project_creation(&self, user_id: &str, project_id: &str) -> MeritResult<XpAward> {
        let source = AwardSource::ProjectCreation {
            project_id: project_id.to_string(),
        };
        self.award(user_id, source, self.project_creation_xp)
    }

    /// Cumulative XP for a user; 0 for unknown users.
    pub fn xp(&self, user_id: &str) -> u64 {
        self.accounts.get(user_id).map(|a| a.xp).unwrap_or(0)
    }

    /// Tier derived from the user's current XP.
    pub fn tier(&self, user_id: &str) -> Tier {
        tier::calculate_tier(self.xp(user_id))
    }

    /// Progress derived from the user's current XP.
    pub fn progress(&self, user_id: &str) -> TierProgress {
        tier::tier_progress(self.xp(user_id))
    }

    /// A user's awards in the order they were granted.
    pub fn history(&self, user_id: &str) -> Vec<XpAward> {
        self.accounts
            .get(user_id)
            .map(|a| a.awards.clone())
            .unwrap_or_default()
    }

    /// Top `limit` users by XP, ties broken by user id.
    pub fn leaderboard(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .accounts
            .iter()
            .map(|r| (r.key().clone(), r.value().xp))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }

    /// Number of users with at least one award.
    pub fn user_count(&self) -> usize {
        self.accounts.len()
    }

    fn award(&self, user_id: &str, source: AwardSource, amount: u32) -> MeritResult<XpAward> {
        let _span = award_span!(user_id).entered();
        let mut account = self.accounts.entry(user_id.to_string()).or_default();

        if account.sources.contains(&source) {
            return Err(MeritError::AlreadyAwarded {
                user_id: user_id.to_string(),
                source_key: source.to_string(),
            });
        }

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        account.xp = account.xp.saturating_add(u64::from(amount));

        let award = XpAward {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            source: source.clone(),
            amount,
            sequence,
            total_after: account.xp,
            awarded_at: Utc::now(),
        };
        account.sources.insert(source);
        account.awards.push(award.clone());

        info!(
            user_id,
            source = %award.source,
            amount,
            total = award.total_after,
            sequence,
            "XP awarded"
        );
        Ok(award)
    }
}

impl Default for XpLedger {
    fn default() -> Self {
        Self::new()
    }
}
