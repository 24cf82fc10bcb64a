#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street grouping for wells.
//!
//! Partitions the loaded wells by street name into [`Group`]s, attaches
//! per-group statistics and a centroid, and filters and orders the result
//! for the list view. Everything here is a pure function of its inputs and
//! is recomputed in full whenever the wells or the filter change.

pub mod collation;
pub mod filter;
pub mod statistics;

use std::collections::BTreeMap;

use broend_map_grouping_models::{Centroid, Group, GroupFilter};
use broend_map_point_models::Point;

use crate::statistics::{StatisticsPolicy, compute_statistics};

/// Partitions `points` by street name.
///
/// Groups come out in first-seen street order; members keep source order.
/// A group's street code is taken from its first member.
#[must_use]
pub fn group_points(points: &[Point], policy: &StatisticsPolicy) -> Vec<Group> {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut buckets: Vec<Vec<Point>> = Vec::new();

    for point in points {
        let slot = *index.entry(point.street_name.as_str()).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(point.clone());
    }

    buckets
        .into_iter()
        .filter_map(|members| {
            let first = members.first()?;
            Some(Group {
                street_name: first.street_name.clone(),
                street_code: first.street_code.clone(),
                statistics: compute_statistics(&members, policy),
                centroid: centroid(&members),
                members,
            })
        })
        .collect()
}

/// Groups, filters, and sorts `points` in one pass: the list the
/// dashboard shows.
#[must_use]
pub fn grouped_and_filtered(
    points: &[Point],
    filter: &GroupFilter,
    policy: &StatisticsPolicy,
) -> Vec<Group> {
    filter::filter_groups(group_points(points, policy), filter)
}

/// Mean latitude and longitude of `members`, or the origin if empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(members: &[Point]) -> Centroid {
    if members.is_empty() {
        return Centroid::default();
    }

    let n = members.len() as f64;
    let (sum_lat, sum_lng) = members.iter().fold((0.0, 0.0), |(lat, lng), p| {
        (lat + p.latitude, lng + p.longitude)
    });

    Centroid {
        latitude: sum_lat / n,
        longitude: sum_lng / n,
    }
}
