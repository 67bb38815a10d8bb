//! Per-queue player state and raw provider payload decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Division, Tier};

/// Identifier of one independently ranked matchmaking queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(u32);

impl QueueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QueueId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Payload decoding errors.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to parse payload: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Division index out of range: {0}")]
    InvalidDivision(u8),
}

/// A player's state in one ranked queue, as reported by the provider.
///
/// Immutable for the lifetime of one estimation. `tier` may be the
/// [`Tier::UNRANKED`] sentinel, in which case the resolver performs band
/// search instead of trusting the stored tier/division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedQueueRecord {
    /// Queue this record belongs to
    pub queue_id: QueueId,

    /// Stored tier (`UNRANKED` when the provider has no authoritative tier)
    pub tier: Tier,

    /// Stored division within the tier
    pub division: Division,

    /// Continuous skill rating driving ladder placement
    pub skill: f64,

    /// Rating deviation (uncertainty) around the skill rating
    pub rating_deviation: f64,

    /// Current win streak (negative for a loss streak)
    pub win_streak: i32,

    /// Matches played this season in this queue
    pub matches_played: u32,

    /// Highest tier index this queue's ladder reaches
    pub tier_max: Tier,
}

impl RankedQueueRecord {
    /// Decode a record from the provider's raw JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, PayloadError> {
        let raw: RawQueuePayload = serde_json::from_str(payload)?;
        raw.into_record()
    }
}

/// Raw per-queue payload as the statistics provider reports it.
///
/// Tier, division and the counters may be absent for legacy or placement
/// data; absent fields default rather than failing the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQueuePayload {
    pub queue_id: u32,

    #[serde(default)]
    pub tier: u8,

    #[serde(default)]
    pub division: u8,

    #[serde(default)]
    pub skill: f64,

    #[serde(default)]
    pub rating_deviation: f64,

    #[serde(default)]
    pub win_streak: i32,

    #[serde(default)]
    pub matches_played: u32,

    #[serde(default = "default_tier_max")]
    pub tier_max: u8,
}

fn default_tier_max() -> u8 {
    22
}

impl RawQueuePayload {
    /// Convert into a typed record.
    ///
    /// The only rejection is a division index the type system cannot
    /// represent; everything else was defaulted during deserialization.
    pub fn into_record(self) -> Result<RankedQueueRecord, PayloadError> {
        let division = Division::from_index(self.division)
            .ok_or(PayloadError::InvalidDivision(self.division))?;

        Ok(RankedQueueRecord {
            queue_id: QueueId::new(self.queue_id),
            tier: Tier::new(self.tier),
            division,
            skill: self.skill,
            rating_deviation: self.rating_deviation,
            win_streak: self.win_streak,
            matches_played: self.matches_played,
            tier_max: Tier::new(self.tier_max),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_record_from_full_payload() {
        let record = RankedQueueRecord::from_json(
            r#"{
                "queue_id": 11,
                "tier": 14,
                "division": 2,
                "skill": 1342.5,
                "rating_deviation": 61.0,
                "win_streak": 4,
                "matches_played": 120,
                "tier_max": 22
            }"#,
        )
        .unwrap();

        assert_eq!(record.queue_id, QueueId::new(11));
        assert_eq!(record.tier, Tier::new(14));
        assert_eq!(record.division, Division::III);
        assert_eq!(record.skill, 1342.5);
        assert_eq!(record.win_streak, 4);
        assert_eq!(record.tier_max, Tier::new(22));
    }

    #[test]
    fn test_record_defaults_missing_fields() {
        let record = RankedQueueRecord::from_json(r#"{"queue_id": 13}"#).unwrap();

        assert_eq!(record.tier, Tier::UNRANKED);
        assert_eq!(record.division, Division::I);
        assert_eq!(record.skill, 0.0);
        assert_eq!(record.win_streak, 0);
        assert_eq!(record.matches_played, 0);
        assert_eq!(record.tier_max, Tier::new(22));
    }

    #[test]
    fn test_record_rejects_out_of_range_division() {
        let result = RankedQueueRecord::from_json(r#"{"queue_id": 10, "division": 4}"#);
        assert!(matches!(result, Err(PayloadError::InvalidDivision(4))));
    }

    #[test]
    fn test_record_rejects_malformed_json() {
        let result = RankedQueueRecord::from_json("not json");
        assert!(matches!(result, Err(PayloadError::ParseError(_))));
    }

    #[test]
    fn test_queue_id_display() {
        assert_eq!(format!("{}", QueueId::new(10)), "10");
    }
}
