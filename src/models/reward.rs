//! Season reward progress derivation.

use serde::{Deserialize, Serialize};

use super::{RankedQueueRecord, Tier};

/// A player's season reward state, derived once at construction.
///
/// `reward_ready` is a one-shot boolean: the next reward level is unlocked
/// either because the player has no reward level yet, or because their rank
/// has outgrown the current level (each level spans three tiers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRewardProgress {
    /// Current reward level (0 when none earned yet)
    pub level: u32,

    /// Wins banked toward the next reward level
    pub wins: u32,

    /// Whether wins currently count toward the next level
    pub reward_ready: bool,
}

impl SeasonRewardProgress {
    /// Derive progress from the provider's reward counters and the player's
    /// highest tier across all queues.
    ///
    /// Absent counters default to zero; missing reward data is a normal
    /// condition for fresh accounts, not an error.
    pub fn new(level: Option<u32>, wins: Option<u32>, highest_tier: Tier) -> Self {
        let level = level.unwrap_or(0);
        let wins = wins.unwrap_or(0);
        let reward_ready = level == 0 || level * 3 < u32::from(highest_tier.index());

        Self {
            level,
            wins,
            reward_ready,
        }
    }
}

/// Highest stored tier across a player's queue records.
///
/// Records still carrying the unranked sentinel contribute nothing.
pub fn highest_tier(records: &[RankedQueueRecord]) -> Tier {
    records
        .iter()
        .map(|record| record.tier)
        .max()
        .unwrap_or(Tier::UNRANKED)
}
