//! Bounded tier and division index types.

use serde::{Deserialize, Serialize};

/// Ladder names for the standard 22-tier ranked ladder, indexed by tier.
const TIER_NAMES: [&str; 23] = [
    "Unranked",
    "Bronze I",
    "Bronze II",
    "Bronze III",
    "Silver I",
    "Silver II",
    "Silver III",
    "Gold I",
    "Gold II",
    "Gold III",
    "Platinum I",
    "Platinum II",
    "Platinum III",
    "Diamond I",
    "Diamond II",
    "Diamond III",
    "Champion I",
    "Champion II",
    "Champion III",
    "Grand Champion I",
    "Grand Champion II",
    "Grand Champion III",
    "Supersonic Legend",
];

/// A coarse rank band on the ladder.
///
/// Tier `0` is the sentinel for "unranked/placement": the provider has no
/// authoritative tier for the player and the resolver falls back to band
/// search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    /// The unranked/placement sentinel.
    pub const UNRANKED: Tier = Tier(0);

    /// The lowest real tier on any ladder.
    pub const FLOOR: Tier = Tier(1);

    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// True when this is the "authoritative tier unknown" sentinel.
    pub fn is_unranked(self) -> bool {
        self.0 == 0
    }

    /// The tier one step up the ladder, clamped at `ceiling`.
    pub fn above(self, ceiling: Tier) -> Tier {
        Tier(self.0.saturating_add(1).min(ceiling.0))
    }

    /// The tier one step down the ladder, clamped at the ladder floor.
    pub fn below(self) -> Tier {
        Tier(self.0.saturating_sub(1).max(Self::FLOOR.0))
    }

    /// Human-readable ladder name for this tier.
    ///
    /// Tiers beyond the standard ladder fall back to a numeric form.
    pub fn display_name(self) -> String {
        TIER_NAMES
            .get(self.0 as usize)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| format!("Tier {}", self.0))
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<u8> for Tier {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// A sub-band within a tier.
///
/// Every tier carries up to four divisions; the top tier of a queue may be
/// published as a single band (division I only), which is a property of the
/// breakdown table, not of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    /// All divisions in ascending order.
    pub const ALL: [Division; 4] = [Division::I, Division::II, Division::III, Division::IV];

    /// Zero-based index (0..=3).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Division for a zero-based index, `None` when out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Division::I),
            1 => Some(Division::II),
            2 => Some(Division::III),
            3 => Some(Division::IV),
            _ => None,
        }
    }
}

impl Default for Division {
    fn default() -> Self {
        Division::I
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Division::I => write!(f, "I"),
            Division::II => write!(f, "II"),
            Division::III => write!(f, "III"),
            Division::IV => write!(f, "IV"),
        }
    }
}

impl From<Division> for u8 {
    fn from(division: Division) -> u8 {
        division.index()
    }
}

impl TryFrom<u8> for Division {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Division::from_index(index).ok_or_else(|| format!("division index out of range: {index}"))
    }
}
