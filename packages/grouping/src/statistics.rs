//! Per-group statistics.
//!
//! Completion and defect counts have no real data source yet. They come
//! from a [`CompletionPolicy`]; the shipped policy is a pair of fixed
//! placeholder ratios carried by [`StatisticsPolicy`].

use broend_map_grouping_models::GroupStatistics;
use broend_map_point_models::Point;
use serde::{Deserialize, Serialize};

/// Source of completion and defect counts for a group.
pub trait CompletionPolicy {
    /// Number of completed wells among `members`.
    fn completed_count(&self, members: &[Point]) -> usize;

    /// Number of defective wells among `members`.
    fn defective_count(&self, members: &[Point]) -> usize;
}

/// Tunables for [`compute_statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsPolicy {
    /// Wells at or below this parking distance (meters) count as near
    /// parking.
    pub near_parking_threshold_m: f64,
    /// Placeholder share of wells counted as completed.
    pub completed_ratio: f64,
    /// Placeholder share of wells counted as defective.
    pub defective_ratio: f64,
}

impl Default for StatisticsPolicy {
    fn default() -> Self {
        Self {
            near_parking_threshold_m: 10.0,
            completed_ratio: 0.6,
            defective_ratio: 0.05,
        }
    }
}

impl CompletionPolicy for StatisticsPolicy {
    fn completed_count(&self, members: &[Point]) -> usize {
        ratio_of(members.len(), self.completed_ratio)
    }

    fn defective_count(&self, members: &[Point]) -> usize {
        ratio_of(members.len(), self.defective_ratio)
    }
}

/// `floor(count * ratio)`, never negative.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn ratio_of(count: usize, ratio: f64) -> usize {
    (count as f64 * ratio).floor().max(0.0) as usize
}

/// Computes statistics for one group's members using the policy's own
/// placeholder completion ratios.
#[must_use]
pub fn compute_statistics(members: &[Point], policy: &StatisticsPolicy) -> GroupStatistics {
    compute_statistics_with(members, policy.near_parking_threshold_m, policy)
}

/// Computes statistics with an explicit completion source.
#[must_use]
pub fn compute_statistics_with(
    members: &[Point],
    near_parking_threshold_m: f64,
    completion: &dyn CompletionPolicy,
) -> GroupStatistics {
    let total_count = members.len();
    let near_parking_count = members
        .iter()
        .filter(|p| p.parking_distance_m <= near_parking_threshold_m)
        .count();
    let completed_count = completion.completed_count(members);
    let defective_count = completion.defective_count(members);

    GroupStatistics {
        total_count,
        near_parking_count,
        completed_count,
        defective_count,
        completed_percent: percent(completed_count, total_count),
    }
}

/// `round(part / total * 100)` capped to 100, or 0 when `total` is 0.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well(parking_distance_m: f64) -> Point {
        Point {
            id: 1,
            street_name: "Main St".to_string(),
            street_code: "0001".to_string(),
            cluster_id: None,
            latitude: 55.0,
            longitude: 12.0,
            status: "done".to_string(),
            well_type: None,
            parking_distance_m,
            recorded_at: None,
        }
    }

    struct AllDone;

    impl CompletionPolicy for AllDone {
        fn completed_count(&self, members: &[Point]) -> usize {
            members.len()
        }

        fn defective_count(&self, _members: &[Point]) -> usize {
            0
        }
    }

    #[test]
    fn empty_group_is_all_zero() {
        let stats = compute_statistics(&[], &StatisticsPolicy::default());
        assert_eq!(stats, GroupStatistics::default());
    }

    #[test]
    fn near_parking_threshold_is_inclusive() {
        let members = vec![well(10.0), well(10.01), well(0.0)];
        let stats = compute_statistics(&members, &StatisticsPolicy::default());
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.near_parking_count, 2);
    }

    #[test]
    fn placeholder_ratios_floor() {
        let members: Vec<Point> = (0..7).map(|_| well(50.0)).collect();
        let stats = compute_statistics(&members, &StatisticsPolicy::default());
        // 7 * 0.6 = 4.2, 7 * 0.05 = 0.35
        assert_eq!(stats.completed_count, 4);
        assert_eq!(stats.defective_count, 0);
        // round(4 / 7 * 100) = round(57.14)
        assert_eq!(stats.completed_percent, 57);
    }

    #[test]
    fn completed_percent_matches_formula_for_many_sizes() {
        let policy = StatisticsPolicy::default();
        for n in 1..=200usize {
            let members: Vec<Point> = (0..n).map(|_| well(1.0)).collect();
            let stats = compute_statistics(&members, &policy);
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let expected = ((n as f64 * 0.6).floor() / n as f64 * 100.0).round() as u8;
            assert_eq!(stats.completed_percent, expected, "n = {n}");
            assert!(stats.completed_percent <= 100);
        }
    }

    #[test]
    fn completion_policy_is_swappable() {
        let members = vec![well(1.0), well(1.0)];
        let stats = compute_statistics_with(&members, 10.0, &AllDone);
        assert_eq!(stats.completed_count, 2);
        assert_eq!(stats.completed_percent, 100);
    }
}
