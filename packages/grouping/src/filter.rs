//! Group filtering and ordering.
//!
//! Active criteria are AND-ed together. The result is always sorted by
//! street name in Danish order, so identical inputs give identical output.

use broend_map_grouping_models::{Group, GroupFilter};

use crate::collation::collation_key;

/// Whether `group` passes every active criterion of `filter`.
#[must_use]
pub fn matches(group: &Group, filter: &GroupFilter) -> bool {
    let text_ok = filter.active_text_search().is_none_or(|search| {
        group
            .street_name
            .to_lowercase()
            .contains(&search.to_lowercase())
    });
    let size_ok = filter
        .active_min_size()
        .is_none_or(|min_size| group.statistics.total_count >= min_size);
    let status_ok = filter
        .active_status_allow_list()
        .is_none_or(|statuses| group.has_any_status(statuses));

    text_ok && size_ok && status_ok
}

/// Keeps the groups that pass `filter` and sorts them by street name.
#[must_use]
pub fn filter_groups(mut groups: Vec<Group>, filter: &GroupFilter) -> Vec<Group> {
    let before = groups.len();
    groups.retain(|g| matches(g, filter));
    log::debug!("Filter kept {} of {before} groups", groups.len());
    sort_groups(&mut groups);
    groups
}

/// Sorts groups by street name in Danish order.
pub fn sort_groups(groups: &mut [Group]) {
    groups.sort_by_cached_key(|g| collation_key(&g.street_name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use broend_map_grouping_models::FilterUpdate;
    use broend_map_point_models::Point;

    use crate::group_points;
    use crate::statistics::StatisticsPolicy;

    fn well(id: i64, street: &str, status: &str) -> Point {
        Point {
            id,
            street_name: street.to_string(),
            street_code: format!("{id:04}"),
            cluster_id: None,
            latitude: 55.0,
            longitude: 12.0,
            status: status.to_string(),
            well_type: None,
            parking_distance_m: 5.0,
            recorded_at: None,
        }
    }

    fn scenario() -> Vec<Group> {
        let points = vec![
            well(1, "Main St", "done"),
            well(2, "Side St", "pending"),
            well(3, "Main St", "done"),
            well(4, "Main St", "defect"),
            well(5, "Side St", "pending"),
        ];
        group_points(&points, &StatisticsPolicy::default())
    }

    fn names(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(|g| g.street_name.as_str()).collect()
    }

    fn filter_of(update: FilterUpdate) -> GroupFilter {
        let mut filter = GroupFilter::default();
        filter.apply_update(update);
        filter
    }

    #[test]
    fn identity_filter_returns_sorted_groups() {
        let mut expected = scenario();
        sort_groups(&mut expected);
        let result = filter_groups(scenario(), &GroupFilter::default());
        assert_eq!(result, expected);
        assert_eq!(names(&result), vec!["Main St", "Side St"]);
    }

    #[test]
    fn min_size_is_inclusive() {
        let result = filter_groups(scenario(), &filter_of(FilterUpdate::default().min_size(3)));
        assert_eq!(names(&result), vec!["Main St"]);
    }

    #[test]
    fn text_search_is_case_insensitive() {
        let result = filter_groups(
            scenario(),
            &filter_of(FilterUpdate::default().text_search("side")),
        );
        assert_eq!(names(&result), vec!["Side St"]);

        let result = filter_groups(
            scenario(),
            &filter_of(FilterUpdate::default().text_search("MAIN")),
        );
        assert_eq!(names(&result), vec!["Main St"]);
    }

    #[test]
    fn text_search_folds_danish_letters() {
        let groups = group_points(
            &[well(1, "Ørestads Boulevard", "done"), well(2, "Nørregade", "done")],
            &StatisticsPolicy::default(),
        );
        let result = filter_groups(groups, &filter_of(FilterUpdate::default().text_search("ØRE")));
        assert_eq!(names(&result), vec!["Ørestads Boulevard"]);
    }

    #[test]
    fn status_allow_list_matches_any_member() {
        let result = filter_groups(
            scenario(),
            &filter_of(FilterUpdate::default().status_allow_list(["defect"])),
        );
        assert_eq!(names(&result), vec!["Main St"]);

        let result = filter_groups(
            scenario(),
            &filter_of(FilterUpdate::default().status_allow_list(["missing"])),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn criteria_compose_in_any_order() {
        let text = filter_of(FilterUpdate::default().text_search("st"));
        let size = filter_of(FilterUpdate::default().min_size(3));
        let both = filter_of(FilterUpdate::default().text_search("st").min_size(3));

        let together = filter_groups(scenario(), &both);
        let text_then_size = filter_groups(filter_groups(scenario(), &text), &size);
        let size_then_text = filter_groups(filter_groups(scenario(), &size), &text);

        assert_eq!(together, text_then_size);
        assert_eq!(together, size_then_text);
        assert_eq!(names(&together), vec!["Main St"]);
    }

    #[test]
    fn empty_search_and_status_list_are_ignored() {
        let filter = filter_of(
            FilterUpdate::default()
                .text_search("")
                .status_allow_list(Vec::<String>::new()),
        );
        assert_eq!(filter_groups(scenario(), &filter).len(), 2);
    }

    #[test]
    fn sorting_is_deterministic() {
        let first = filter_groups(scenario(), &GroupFilter::default());
        let second = filter_groups(scenario(), &GroupFilter::default());
        assert_eq!(first, second);
    }
}
