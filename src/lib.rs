//! # Rank Ladder
//!
//! Tier/division estimation engine for ranked matchmaking queues.
//!
//! Given a player's continuous skill rating in one queue, the engine infers
//! the discrete tier and division when the provider reports the unranked
//! sentinel, and computes signed point distances to the four adjacent ladder
//! boundaries. Estimation is pure and synchronous: callers hand in an
//! immutable breakdown snapshot and a per-queue record, and get derived
//! values back.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (tiers, divisions, queue records,
//!   season reward progress)
//! - **breakdown**: The provider's skill-rating band table and its atomic
//!   snapshot store
//! - **estimate**: Tier/division resolution and boundary-distance
//!   calculation
//!
//! ## Example
//!
//! ```
//! use rank_ladder::breakdown::{Band, QueueBreakdown};
//! use rank_ladder::estimate::TierEstimate;
//! use rank_ladder::{Division, QueueId, RankedQueueRecord, Tier};
//!
//! let mut breakdown = QueueBreakdown::new();
//! breakdown.insert(Tier::new(7), Division::II, Band::new(700.0, 760.0));
//!
//! let record = RankedQueueRecord {
//!     queue_id: QueueId::new(11),
//!     tier: Tier::new(7),
//!     division: Division::II,
//!     skill: 730.0,
//!     rating_deviation: 60.0,
//!     win_streak: 2,
//!     matches_played: 87,
//!     tier_max: Tier::new(22),
//! };
//!
//! let estimate = TierEstimate::derive(&record, &breakdown);
//! assert_eq!(estimate.div_up, Some(30));
//! assert_eq!(estimate.div_down, Some(-30));
//! ```

pub mod breakdown;
pub mod estimate;
pub mod models;

pub use models::*;
