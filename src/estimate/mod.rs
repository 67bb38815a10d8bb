//! Tier/division estimation engine.
//!
//! Resolves a record's tier and division (band search when the stored tier
//! is the unranked sentinel) and computes signed point distances to the four
//! adjacent ladder boundaries:
//! - division above / below
//! - tier above / below
//!
//! All four distances are independent; a missing band blanks one field and
//! never aborts the others.

mod search;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakdown::{Band, BreakdownTable, QueueBreakdown};
use crate::models::{Division, RankedQueueRecord, Tier};

/// Resolved tier/division plus signed point distances to the adjacent
/// boundaries. Ephemeral; derived per estimation, never persisted.
///
/// `None` means "not computable" (missing band data or a ladder extreme) and
/// the presentation layer must treat it as not displayable, never as zero.
/// When present, the down fields are always `<= -1` and the up fields always
/// `>= 1`: a boundary already crossed is reported as the nearest non-zero
/// distance in the semantically correct direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEstimate {
    /// Resolved tier, authoritative for this calculation
    pub tier: Tier,

    /// Resolved division
    pub division: Division,

    /// Points until demotion to the division below
    pub div_down: Option<i32>,

    /// Points until promotion to the division above
    pub div_up: Option<i32>,

    /// Points until demotion to the tier below
    pub tier_down: Option<i32>,

    /// Points until promotion to the tier above
    pub tier_up: Option<i32>,
}

impl TierEstimate {
    /// Derive estimates for one record against its queue's breakdown.
    ///
    /// Pure and side-effect free apart from debug logging on band-lookup
    /// misses; safe to call concurrently against a shared snapshot.
    pub fn derive(record: &RankedQueueRecord, breakdown: &QueueBreakdown) -> Self {
        let (tier, division) = search::resolve_rank(record, breakdown);
        let skill = record.skill;
        let tier_max = record.tier_max;

        let div_down = if tier.is_unranked() || (tier == Tier::FLOOR && division == Division::I) {
            None
        } else {
            lookup(breakdown, tier, division, "div_down")
                .map(|band| clamp_down(points_to(band.low, skill)))
        };

        let div_up = if tier == tier_max {
            None
        } else if tier.is_unranked() && division == Division::I {
            // Still-unranked edge: distance to the second division's floor.
            lookup(breakdown, tier, Division::II, "div_up")
                .map(|band| clamp_up(points_to(band.low, skill)))
        } else if tier.is_unranked() {
            None
        } else {
            lookup(breakdown, tier, division, "div_up")
                .map(|band| clamp_up(points_to(band.high, skill)))
        };

        let tier_down = if tier.is_unranked() || tier == Tier::FLOOR {
            None
        } else {
            lookup(breakdown, tier, Division::I, "tier_down")
                .map(|band| clamp_down(points_to(band.low, skill)))
        };

        let tier_up = if tier.is_unranked() || tier == tier_max {
            None
        } else {
            lookup(breakdown, tier, Division::IV, "tier_up")
                .map(|band| clamp_up(points_to(band.high, skill)))
        };

        Self {
            tier,
            division,
            div_down,
            div_up,
            tier_down,
            tier_up,
        }
    }

    /// Derive estimates using a full table snapshot, treating an unknown
    /// queue as an empty breakdown.
    pub fn derive_from_table(record: &RankedQueueRecord, table: &BreakdownTable) -> Self {
        match table.queue(record.queue_id) {
            Some(breakdown) => Self::derive(record, breakdown),
            None => Self::derive(record, &QueueBreakdown::new()),
        }
    }
}

/// Points from `skill` to an edge, rounded toward positive infinity.
fn points_to(edge: f64, skill: f64) -> i32 {
    (edge - skill).ceil() as i32
}

/// A demotion boundary already reached reads as one point below.
fn clamp_down(points: i32) -> i32 {
    if points >= 0 {
        -1
    } else {
        points
    }
}

/// A promotion boundary already reached reads as one point above.
fn clamp_up(points: i32) -> i32 {
    if points <= 0 {
        1
    } else {
        points
    }
}

fn lookup(breakdown: &QueueBreakdown, tier: Tier, division: Division, field: &str) -> Option<Band> {
    let band = breakdown.lookup(tier, division);
    if band.is_none() {
        debug!(
            tier = tier.index(),
            division = division.index(),
            field,
            "no band data, estimate not computable"
        );
    }
    band
}
