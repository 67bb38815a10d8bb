//! Skill-rating breakdown table: per-queue `(tier, division)` bands.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Division, PayloadError, QueueId, Tier};

/// One `(tier, division)` skill-rating interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

/// Which edge of a band a skill rating sits nearer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Nearer the band's `low` edge (the rating sits below the band)
    Low,
    /// Nearer the band's `high` edge (the rating sits above the band)
    High,
}

impl Band {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive containment on both edges.
    pub fn contains(&self, skill: f64) -> bool {
        skill >= self.low && skill <= self.high
    }

    /// Distance from `skill` to the nearer edge, and which edge that is.
    ///
    /// The `low` edge wins an exact tie.
    pub fn nearest_edge(&self, skill: f64) -> (f64, Edge) {
        let to_low = (self.low - skill).abs();
        let to_high = (self.high - skill).abs();

        if to_low <= to_high {
            (to_low, Edge::Low)
        } else {
            (to_high, Edge::High)
        }
    }
}

/// The band table for a single queue.
///
/// Bands are keyed and iterated in ascending `(tier, division)` order, which
/// makes the resolver's nearest-band tie-break deterministic. An empty
/// breakdown is the normal state for a queue the provider has not backfilled.
#[derive(Debug, Clone, Default)]
pub struct QueueBreakdown {
    bands: BTreeMap<(Tier, Division), Band>,
}

impl QueueBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a band. Intended for table construction; the published table
    /// is read-only.
    pub fn insert(&mut self, tier: Tier, division: Division, band: Band) {
        self.bands.insert((tier, division), band);
    }

    /// Look up the band for `(tier, division)`.
    ///
    /// Absence is a normal, expected condition and never an error.
    pub fn lookup(&self, tier: Tier, division: Division) -> Option<Band> {
        self.bands.get(&(tier, division)).copied()
    }

    /// True when the provider has no band data for this queue.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Bands in ascending `(tier, division)` order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, Division, Band)> + '_ {
        self.bands
            .iter()
            .map(|(&(tier, division), &band)| (tier, division, band))
    }
}

/// One refresh cycle's breakdown tables for every queue.
///
/// Rebuilt wholesale on each provider refresh and published as an immutable
/// snapshot; see [`BreakdownStore`](crate::breakdown::BreakdownStore).
#[derive(Debug, Clone)]
pub struct BreakdownTable {
    /// When this snapshot was fetched from the provider
    pub fetched_at: DateTime<Utc>,

    queues: BTreeMap<QueueId, QueueBreakdown>,
}

impl BreakdownTable {
    /// An empty table, used before the first provider refresh lands.
    pub fn empty() -> Self {
        Self {
            fetched_at: Utc::now(),
            queues: BTreeMap::new(),
        }
    }

    pub fn new(queues: BTreeMap<QueueId, QueueBreakdown>) -> Self {
        Self {
            fetched_at: Utc::now(),
            queues,
        }
    }

    /// Decode a table from the provider's raw JSON payload.
    ///
    /// The payload shape is `queue_id -> tier -> division -> [low, high]`.
    /// A division index outside 0..=3 fails the decode; interval ordering is
    /// the provider's contract and is not validated here.
    pub fn from_json(payload: &str) -> Result<Self, PayloadError> {
        let raw: RawBreakdownPayload = serde_json::from_str(payload)?;

        let mut queues = BTreeMap::new();
        for (queue_id, tiers) in raw {
            let mut breakdown = QueueBreakdown::new();
            for (tier, divisions) in tiers {
                for (index, (low, high)) in divisions {
                    let division =
                        Division::from_index(index).ok_or(PayloadError::InvalidDivision(index))?;
                    breakdown.insert(Tier::new(tier), division, Band::new(low, high));
                }
            }
            queues.insert(QueueId::new(queue_id), breakdown);
        }

        Ok(Self::new(queues))
    }

    /// The band table for one queue, `None` when the provider has never
    /// reported this queue.
    pub fn queue(&self, queue_id: QueueId) -> Option<&QueueBreakdown> {
        self.queues.get(&queue_id)
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

type RawBreakdownPayload = BTreeMap<u32, BTreeMap<u8, BTreeMap<u8, (f64, f64)>>>;
