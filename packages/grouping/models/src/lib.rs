#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street group (brøndgruppe) types.
//!
//! A [`Group`] collects the wells of one street together with derived
//! [`GroupStatistics`] and a [`Centroid`]. [`GroupFilter`] holds the
//! user-controlled criteria the list view filters groups by, and
//! [`FilterUpdate`] is the partial form the UI sends to change them.

use std::collections::BTreeMap;

use broend_map_point_models::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-group counts and percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    /// Number of wells in the group.
    pub total_count: usize,
    /// Wells within the near-parking threshold.
    pub near_parking_count: usize,
    /// Wells counted as completed (placeholder ratio, see the statistics
    /// policy).
    pub completed_count: usize,
    /// Wells counted as defective (placeholder ratio).
    pub defective_count: usize,
    /// `completed_count / total_count` as a rounded percentage, 0 for an
    /// empty group.
    pub completed_percent: u8,
}

/// Mean coordinate of a group's wells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Centroid {
    /// Mean latitude.
    pub latitude: f64,
    /// Mean longitude.
    pub longitude: f64,
}

/// The wells of one street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Street name shared by every member.
    pub street_name: String,
    /// Street code of the first member.
    pub street_code: String,
    /// Members in source order.
    pub members: Vec<Point>,
    /// Derived statistics.
    pub statistics: GroupStatistics,
    /// Mean member coordinate.
    pub centroid: Centroid,
}

impl Group {
    /// Returns the most common cluster id among the members.
    ///
    /// Members without a cluster are ignored. On a tie the cluster seen
    /// first in member order wins. Returns `None` if no member has a
    /// cluster.
    #[must_use]
    pub fn dominant_cluster(&self) -> Option<i64> {
        let mut counts: BTreeMap<i64, (usize, usize)> = BTreeMap::new();
        for (idx, cluster) in self
            .members
            .iter()
            .filter_map(|p| p.cluster_id)
            .enumerate()
        {
            counts.entry(cluster).or_insert((0, idx)).0 += 1;
        }

        counts
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                count_a.cmp(count_b).then(first_b.cmp(first_a))
            })
            .map(|(cluster, _)| cluster)
    }

    /// Whether any member's status is in `statuses`.
    #[must_use]
    pub fn has_any_status(&self, statuses: &[String]) -> bool {
        self.members
            .iter()
            .any(|p| statuses.iter().any(|s| *s == p.status))
    }
}

/// Totals over a (filtered) group list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// Number of groups.
    pub total_groups: usize,
    /// Sum of the groups' well counts.
    pub total_points: usize,
}

impl GroupSummary {
    /// Reduces a group list to its totals.
    #[must_use]
    pub fn of(groups: &[Group]) -> Self {
        Self {
            total_groups: groups.len(),
            total_points: groups.iter().map(|g| g.statistics.total_count).sum(),
        }
    }
}

/// A date window used to filter overlay datasets by project period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Window start, open if absent.
    pub start: Option<DateTime<Utc>>,
    /// Window end, open if absent.
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Whether a project running from `project_start` to `project_end`
    /// overlaps this window.
    ///
    /// A missing project bound never excludes the project.
    #[must_use]
    pub fn admits(
        &self,
        project_start: Option<DateTime<Utc>>,
        project_end: Option<DateTime<Utc>>,
    ) -> bool {
        let after_start = match (self.start, project_end) {
            (Some(start), Some(end)) => end >= start,
            _ => true,
        };
        let before_end = match (self.end, project_start) {
            (Some(end), Some(start)) => start <= end,
            _ => true,
        };
        after_start && before_end
    }
}

/// User-controlled group filter criteria.
///
/// Absent (or empty) criteria impose no constraint; the default filter is
/// the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupFilter {
    /// Case-insensitive substring of the street name.
    pub text_search: Option<String>,
    /// Inclusive lower bound on a group's well count.
    pub min_size: Option<usize>,
    /// A group passes if any member has one of these statuses.
    pub status_allow_list: Option<Vec<String>>,
    /// Overlay date window. Not applied to groups.
    pub date_range: Option<DateRange>,
}

impl GroupFilter {
    /// The text search, if it constrains anything.
    #[must_use]
    pub fn active_text_search(&self) -> Option<&str> {
        self.text_search.as_deref().filter(|s| !s.is_empty())
    }

    /// The minimum size, if it constrains anything.
    #[must_use]
    pub fn active_min_size(&self) -> Option<usize> {
        self.min_size.filter(|n| *n > 0)
    }

    /// The status allow-list, if it constrains anything.
    #[must_use]
    pub fn active_status_allow_list(&self) -> Option<&[String]> {
        self.status_allow_list
            .as_deref()
            .filter(|statuses| !statuses.is_empty())
    }

    /// Whether no criterion constrains the group list.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.active_text_search().is_none()
            && self.active_min_size().is_none()
            && self.active_status_allow_list().is_none()
    }

    /// Merges a partial update into this filter. Fields the update leaves
    /// untouched keep their value.
    pub fn apply_update(&mut self, update: FilterUpdate) {
        update.text_search.apply(&mut self.text_search);
        update.min_size.apply(&mut self.min_size);
        update.status_allow_list.apply(&mut self.status_allow_list);
        update.date_range.apply(&mut self.date_range);
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Change to a single filter field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the field as it is.
    #[default]
    Keep,
    /// Replace the field's value.
    Set(T),
    /// Remove the field's value.
    Clear,
}

impl<T> FieldUpdate<T> {
    fn apply(self, field: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *field = Some(value),
            Self::Clear => *field = None,
        }
    }
}

/// A partial [`GroupFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// Text search change.
    pub text_search: FieldUpdate<String>,
    /// Minimum size change.
    pub min_size: FieldUpdate<usize>,
    /// Status allow-list change.
    pub status_allow_list: FieldUpdate<Vec<String>>,
    /// Date range change.
    pub date_range: FieldUpdate<DateRange>,
}

impl FilterUpdate {
    /// Sets the text search.
    #[must_use]
    pub fn text_search(mut self, search: impl Into<String>) -> Self {
        self.text_search = FieldUpdate::Set(search.into());
        self
    }

    /// Sets the minimum size.
    #[must_use]
    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = FieldUpdate::Set(min_size);
        self
    }

    /// Sets the status allow-list.
    #[must_use]
    pub fn status_allow_list<S: Into<String>>(
        mut self,
        statuses: impl IntoIterator<Item = S>,
    ) -> Self {
        self.status_allow_list =
            FieldUpdate::Set(statuses.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the date range.
    #[must_use]
    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = FieldUpdate::Set(range);
        self
    }

    /// Clears the text search.
    #[must_use]
    pub fn clear_text_search(mut self) -> Self {
        self.text_search = FieldUpdate::Clear;
        self
    }

    /// Clears the minimum size.
    #[must_use]
    pub fn clear_min_size(mut self) -> Self {
        self.min_size = FieldUpdate::Clear;
        self
    }

    /// Clears the status allow-list.
    #[must_use]
    pub fn clear_status_allow_list(mut self) -> Self {
        self.status_allow_list = FieldUpdate::Clear;
        self
    }

    /// Clears the date range.
    #[must_use]
    pub fn clear_date_range(mut self) -> Self {
        self.date_range = FieldUpdate::Clear;
        self
    }
}
