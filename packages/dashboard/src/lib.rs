#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The brønd map dashboard context.
//!
//! [`Dashboard`] owns every input the map and list views depend on: the
//! load state of the well collection, the group filter, the selected
//! cluster, and configuration. Derived views (groups, summary, hulls,
//! point features) are recomputed in full from the current snapshot on
//! every call, so a reader never observes a half-updated view.
//!
//! Each input change bumps [`Dashboard::revision`], which a rendering
//! layer can compare against to decide when to redraw.

pub mod config;
pub mod output;
pub mod selection;

use broend_map_grouping::grouped_and_filtered;
use broend_map_grouping_models::{FilterUpdate, Group, GroupFilter, GroupSummary};
use broend_map_point_models::Point;
use broend_map_source::LoadState;
use broend_map_spatial::{HullAlgorithm, HullFeature, TinHull};

pub use config::{ConfigError, DashboardConfig};
pub use selection::SelectionState;

/// Explicitly constructed dashboard state shared by the list and map
/// views.
pub struct Dashboard {
    config: DashboardConfig,
    load_state: LoadState,
    filter: GroupFilter,
    selection: SelectionState,
    hull_algorithm: Box<dyn HullAlgorithm>,
    revision: u64,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("load_state", &self.load_state.status())
            .field("filter", &self.filter)
            .field("selection", &self.selection)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    /// Creates a dashboard with no wells loaded yet.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            load_state: LoadState::Pending,
            filter: GroupFilter::default(),
            selection: SelectionState::default(),
            hull_algorithm: Box::new(TinHull),
            revision: 0,
        }
    }

    /// Replaces the hull algorithm used by [`Self::hull_features`].
    #[must_use]
    pub fn with_hull_algorithm(mut self, algorithm: impl HullAlgorithm + 'static) -> Self {
        self.hull_algorithm = Box::new(algorithm);
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// Replaces the load state of the well collection.
    pub fn set_load_state(&mut self, state: LoadState) {
        log::debug!("Load state -> {}", state.status());
        self.load_state = state;
        self.bump();
    }

    /// Replaces the loaded wells with a new snapshot.
    pub fn reload(&mut self, points: Vec<Point>) {
        self.set_load_state(LoadState::loaded(points));
    }

    /// Merges a partial update into the current filter.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.filter.apply_update(update);
        log::debug!("Filter updated: {:?}", self.filter);
        self.bump();
    }

    /// Resets the filter to the identity.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.bump();
    }

    /// Selects a cluster, or clears the selection with `None`.
    pub fn select_cluster(&mut self, cluster_id: Option<i64>) {
        self.selection.select(cluster_id);
        self.bump();
    }

    /// Selects the cluster most of `group`'s wells belong to.
    ///
    /// Returns the selected cluster. A group whose wells carry no cluster
    /// leaves the selection unchanged and returns `None`.
    pub fn zoom_to_group(&mut self, group: &Group) -> Option<i64> {
        let cluster = group.dominant_cluster()?;
        self.select_cluster(Some(cluster));
        Some(cluster)
    }

    // ── Views ───────────────────────────────────────────────────────

    /// The selected cluster id.
    #[must_use]
    pub const fn selected_cluster(&self) -> Option<i64> {
        self.selection.current()
    }

    /// The current filter.
    #[must_use]
    pub const fn filter(&self) -> &GroupFilter {
        &self.filter
    }

    /// The wells of the current snapshot; empty while pending or after a
    /// failed load.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.load_state.points()
    }

    /// Street groups passing the filter, in Danish street-name order.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        grouped_and_filtered(self.points(), &self.filter, &self.config.statistics)
    }

    /// Totals over [`Self::groups`].
    #[must_use]
    pub fn summary(&self) -> GroupSummary {
        GroupSummary::of(&self.groups())
    }

    /// Cluster hulls over every loaded well. The group filter does not
    /// apply.
    #[must_use]
    pub fn hull_features(&self) -> Vec<HullFeature> {
        broend_map_spatial::build_hulls(
            self.points(),
            &self.config.hull,
            self.hull_algorithm.as_ref(),
        )
    }

    /// [`Self::hull_features`] as a `GeoJSON` `FeatureCollection`.
    #[must_use]
    pub fn hull_collection(&self) -> geojson::FeatureCollection {
        broend_map_spatial::hull_collection(&self.hull_features())
    }

    /// Every loaded well as a `GeoJSON` point feature.
    #[must_use]
    pub fn point_collection(&self) -> geojson::FeatureCollection {
        output::point_collection(self.points())
    }

    /// Whether the well collection is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// The load failure message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.load_state.error()
    }

    /// Whether a well snapshot is loaded.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.load_state.has_value()
    }

    /// Number of input changes so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    const fn bump(&mut self) {
        self.revision += 1;
    }
}
