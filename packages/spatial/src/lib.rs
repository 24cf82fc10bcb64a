#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cluster hull polygons for the map.
//!
//! Partitions wells by cluster id and wraps each cluster of three or more
//! wells in a polygon: a concave hull whose edge limit adapts to the
//! cluster's spread, falling back to the convex hull. Clusters that yield
//! no area are left out. Output is ordered by cluster id, so a fixed
//! input always gives the same features.

pub mod hull;

use std::collections::BTreeMap;

use broend_map_point_models::Point;
use geo::{BoundingRect, MultiPoint, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

pub use hull::{HullAlgorithm, TinHull};

/// Hull construction tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    /// Edge limit (km) used when the cluster has no spread.
    pub default_max_edge_km: f64,
    /// Lower clamp for the adaptive edge limit (km).
    pub min_max_edge_km: f64,
    /// Upper clamp for the adaptive edge limit (km).
    pub max_max_edge_km: f64,
    /// Multiplier from bounding-box diagonal (degrees) to edge limit (km).
    pub spread_factor: f64,
    /// Smallest cluster that gets a hull. Never below 3.
    pub min_points: usize,
    /// Number of display colors; `color_index` cycles through them.
    pub palette_size: i64,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            default_max_edge_km: 0.12,
            min_max_edge_km: 0.08,
            max_max_edge_km: 0.2,
            spread_factor: 8.0,
            min_points: 3,
            palette_size: 12,
        }
    }
}

impl HullConfig {
    /// Edge limit for a cluster whose bounding-box diagonal is `spread`
    /// degrees.
    #[must_use]
    pub fn max_edge_for_spread(&self, spread: f64) -> f64 {
        if spread > 0.0 {
            (spread * self.spread_factor)
                .max(self.min_max_edge_km)
                .min(self.max_max_edge_km)
        } else {
            self.default_max_edge_km
        }
    }

    /// Palette slot for a cluster key. Always in `0..palette_size`.
    #[must_use]
    pub fn color_index(&self, cluster_key: i64) -> i64 {
        cluster_key.rem_euclid(self.palette_size.max(1))
    }
}

/// The polygon drawn for one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct HullFeature {
    /// Cluster id, or [`broend_map_point_models::UNCLUSTERED`].
    pub cluster_key: i64,
    /// Hull outline. Multi-part hulls are cut down to their first part.
    pub polygon: Polygon<f64>,
    /// Wells in the cluster.
    pub member_count: usize,
    /// Display palette slot.
    pub color_index: i64,
}

impl HullFeature {
    /// Converts to a `GeoJSON` feature with `id`, `antal_broende`, and
    /// `color_index` properties.
    #[must_use]
    pub fn to_geojson(&self) -> geojson::Feature {
        let mut properties = geojson::JsonObject::new();
        properties.insert("id".to_string(), self.cluster_key.into());
        properties.insert("antal_broende".to_string(), self.member_count.into());
        properties.insert("color_index".to_string(), self.color_index.into());

        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(&self.polygon))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Builds one hull per cluster of at least `config.min_points` wells.
///
/// Wells without a cluster id are pooled under the unclustered sentinel
/// and treated like any other cluster.
#[must_use]
pub fn build_hulls(
    points: &[Point],
    config: &HullConfig,
    algorithm: &dyn HullAlgorithm,
) -> Vec<HullFeature> {
    let mut clusters: BTreeMap<i64, Vec<geo::Point<f64>>> = BTreeMap::new();
    for p in points {
        clusters
            .entry(p.cluster_key())
            .or_default()
            .push(geo::Point::new(p.longitude, p.latitude));
    }

    let total = clusters.len();
    let features: Vec<HullFeature> = clusters
        .into_iter()
        .filter_map(|(key, members)| build_cluster_hull(key, members, config, algorithm))
        .collect();

    log::debug!("Built {} hulls from {total} clusters", features.len());
    features
}

/// Builds hulls as a `GeoJSON` `FeatureCollection`.
#[must_use]
pub fn hull_collection(features: &[HullFeature]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(HullFeature::to_geojson).collect(),
        foreign_members: None,
    }
}

fn build_cluster_hull(
    cluster_key: i64,
    members: Vec<geo::Point<f64>>,
    config: &HullConfig,
    algorithm: &dyn HullAlgorithm,
) -> Option<HullFeature> {
    let member_count = members.len();
    if member_count < config.min_points.max(3) {
        log::debug!("Cluster {cluster_key}: {member_count} wells, too few for a hull");
        return None;
    }

    let points = MultiPoint::new(members);
    let spread = points
        .bounding_rect()
        .map_or(0.0, |rect| rect.width().hypot(rect.height()));
    let max_edge_km = config.max_edge_for_spread(spread);

    let polygon = if let Some(polygon) = algorithm
        .concave_hull(&points, max_edge_km)
        .and_then(first_polygon)
    {
        log::debug!("Cluster {cluster_key}: concave hull (max edge {max_edge_km:.3} km)");
        polygon
    } else if let Some(polygon) = algorithm.convex_hull(&points) {
        log::debug!("Cluster {cluster_key}: convex hull fallback");
        polygon
    } else {
        log::debug!("Cluster {cluster_key}: no hull, points span no area");
        return None;
    };

    Some(HullFeature {
        cluster_key,
        polygon,
        member_count,
        color_index: config.color_index(cluster_key),
    })
}

/// Keeps only the first part of a multi-part hull.
fn first_polygon(multi: MultiPolygon<f64>) -> Option<Polygon<f64>> {
    multi.0.into_iter().next()
}
