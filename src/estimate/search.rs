//! Nearest-band search for records without an authoritative tier.

use crate::breakdown::{Edge, QueueBreakdown};
use crate::models::{Division, RankedQueueRecord, Tier};

/// The minimum-distance candidate tracked during a scan.
struct Nearest {
    distance: f64,
    tier: Tier,
    division: Division,
    edge: Edge,
}

/// Resolve a record's tier and division against its queue breakdown.
///
/// A stored tier other than the unranked sentinel is authoritative and
/// passes through untouched. For sentinel records the queue's bands are
/// scanned in ascending `(tier, division)` order: the first band containing
/// the skill rating wins outright; otherwise the band with the nearest edge
/// decides, stepped one division toward that edge. Strictly-smaller distance
/// is required to displace a candidate, so equidistant bands resolve to the
/// smallest `(tier, division)`.
pub(crate) fn resolve_rank(
    record: &RankedQueueRecord,
    breakdown: &QueueBreakdown,
) -> (Tier, Division) {
    if !record.tier.is_unranked() {
        return (record.tier, record.division);
    }
    if breakdown.is_empty() {
        // No data to search; trust the stored sentinel unchanged.
        return (record.tier, record.division);
    }

    let mut nearest: Option<Nearest> = None;
    for (tier, division, band) in breakdown.iter() {
        if band.contains(record.skill) {
            return (tier, division);
        }

        let (distance, edge) = band.nearest_edge(record.skill);
        if nearest.as_ref().map_or(true, |n| distance < n.distance) {
            nearest = Some(Nearest {
                distance,
                tier,
                division,
                edge,
            });
        }
    }

    match nearest {
        Some(n) => step(n.tier, n.division, n.edge, record.tier_max),
        None => (record.tier, record.division),
    }
}

/// Step one division toward the nearer edge, wrapping across tiers and
/// clamping at the ladder extremes.
fn step(tier: Tier, division: Division, edge: Edge, tier_max: Tier) -> (Tier, Division) {
    match edge {
        Edge::Low => match division {
            // Below the tier's first division: previous tier's last, but
            // never below the ladder floor.
            Division::I => {
                if tier <= Tier::FLOOR {
                    (Tier::FLOOR, Division::I)
                } else {
                    (tier.below(), Division::IV)
                }
            }
            Division::II => (tier, Division::I),
            Division::III => (tier, Division::II),
            Division::IV => (tier, Division::III),
        },
        Edge::High => match division {
            Division::I => (tier, Division::II),
            Division::II => (tier, Division::III),
            Division::III => (tier, Division::IV),
            // Past the tier's last division: next tier's first, capped at
            // the queue's top tier.
            Division::IV => (tier.above(tier_max), Division::I),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::breakdown::Band;
    use crate::models::QueueId;

    fn unranked_record(skill: f64, tier_max: u8) -> RankedQueueRecord {
        RankedQueueRecord {
            queue_id: QueueId::new(10),
            tier: Tier::UNRANKED,
            division: Division::I,
            skill,
            rating_deviation: 80.0,
            win_streak: 0,
            matches_played: 0,
            tier_max: Tier::new(tier_max),
        }
    }

    fn breakdown(entries: &[(u8, Division, f64, f64)]) -> QueueBreakdown {
        let mut breakdown = QueueBreakdown::new();
        for &(tier, division, low, high) in entries {
            breakdown.insert(Tier::new(tier), division, Band::new(low, high));
        }
        breakdown
    }

    #[test]
    fn test_authoritative_tier_passes_through() {
        let mut record = unranked_record(1500.0, 19);
        record.tier = Tier::new(5);
        record.division = Division::III;

        // Breakdown contents are irrelevant for authoritative records.
        let bands = breakdown(&[(9, Division::I, 0.0, 10.0)]);
        assert_eq!(
            resolve_rank(&record, &bands),
            (Tier::new(5), Division::III)
        );
    }

    #[test]
    fn test_containment_wins_immediately() {
        let record = unranked_record(125.0, 19);
        let bands = breakdown(&[
            (1, Division::I, 100.0, 150.0),
            (1, Division::II, 150.0, 200.0),
        ]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(1), Division::I));
    }

    #[test]
    fn test_containment_is_edge_inclusive() {
        let bands = breakdown(&[(2, Division::III, 400.0, 450.0)]);

        let record = unranked_record(400.0, 19);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(2), Division::III));

        let record = unranked_record(450.0, 19);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(2), Division::III));
    }

    #[test]
    fn test_nearest_high_edge_steps_up_a_division() {
        // Gap between divisions; 210 sits nearer div I's high than div III's low.
        let record = unranked_record(210.0, 19);
        let bands = breakdown(&[
            (1, Division::I, 100.0, 200.0),
            (1, Division::III, 300.0, 400.0),
        ]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(1), Division::II));
    }

    #[test]
    fn test_nearest_low_edge_steps_down_a_division() {
        let record = unranked_record(290.0, 19);
        let bands = breakdown(&[
            (1, Division::I, 100.0, 200.0),
            (1, Division::III, 300.0, 400.0),
        ]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(1), Division::II));
    }

    #[test]
    fn test_below_ladder_clamps_to_floor() {
        // Nearest edge is tier 1 division I's low; stepping down would leave
        // the ladder, so the result clamps to tier 1 division I.
        let record = unranked_record(50.0, 19);
        let bands = breakdown(&[(1, Division::I, 100.0, 200.0)]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(1), Division::I));
    }

    #[test]
    fn test_low_edge_wraps_to_previous_tier() {
        let record = unranked_record(495.0, 19);
        let bands = breakdown(&[(3, Division::I, 500.0, 550.0)]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(2), Division::IV));
    }

    #[test]
    fn test_high_edge_wraps_to_next_tier() {
        let record = unranked_record(560.0, 19);
        let bands = breakdown(&[(3, Division::IV, 500.0, 550.0)]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(4), Division::I));
    }

    #[test]
    fn test_above_ladder_clamps_to_tier_max() {
        let record = unranked_record(2000.0, 3);
        let bands = breakdown(&[(3, Division::IV, 500.0, 550.0)]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(3), Division::I));
    }

    #[test]
    fn test_above_ladder_clamps_at_u8_ceiling() {
        // A ladder whose top tier is the full u8 range must still clamp
        // cleanly when the skill sits above the last band's high edge.
        let record = unranked_record(250.0, u8::MAX);
        let bands = breakdown(&[(u8::MAX, Division::IV, 100.0, 200.0)]);
        assert_eq!(
            resolve_rank(&record, &bands),
            (Tier::new(u8::MAX), Division::I)
        );
    }

    #[test]
    fn test_equidistant_bands_resolve_to_smallest_key() {
        // 250 is 50 points from div I's high and 50 from div III's low; the
        // scan keeps the first candidate, so div I's high edge decides.
        let record = unranked_record(250.0, 19);
        let bands = breakdown(&[
            (1, Division::I, 100.0, 200.0),
            (1, Division::III, 300.0, 400.0),
        ]);
        assert_eq!(resolve_rank(&record, &bands), (Tier::new(1), Division::II));
    }

    #[test]
    fn test_empty_breakdown_keeps_sentinel() {
        let record = unranked_record(1234.0, 19);
        assert_eq!(
            resolve_rank(&record, &QueueBreakdown::new()),
            (Tier::UNRANKED, Division::I)
        );
    }
}
