#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Well (brønd) point types.
//!
//! A [`Point`] is one well record as loaded from the source feature
//! collection. Points are immutable once built; a reload replaces the whole
//! set. [`PointProperties`] mirrors the flat attribute record carried by
//! each source feature, using the source's own field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Cluster key used for points that carry no `cluster_id`.
///
/// Unclustered points are pooled under this sentinel rather than dropped,
/// so they can still form a hull of their own. Its hull feature carries
/// `id = -1`; its `color_index` wraps to the last palette slot (11 with
/// the default 12 colors), never a negative index.
pub const UNCLUSTERED: i64 = -1;

/// A single well record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Unique well identifier.
    pub id: i64,
    /// Street name the well is grouped under.
    pub street_name: String,
    /// Street code of the well's street.
    pub street_code: String,
    /// Secondary grouping key used for hull computation, if assigned.
    pub cluster_id: Option<i64>,
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
    /// Object status as reported by the source (e.g. `"Gældende"`).
    pub status: String,
    /// Well type, when known.
    pub well_type: Option<String>,
    /// Distance in meters to the nearest parking reference.
    pub parking_distance_m: f64,
    /// When the well was registered, if the source date parsed.
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Point {
    /// Returns the cluster key, substituting [`UNCLUSTERED`] for a missing
    /// cluster id.
    #[must_use]
    pub fn cluster_key(&self) -> i64 {
        self.cluster_id.unwrap_or(UNCLUSTERED)
    }
}

/// Raw attribute record of a well feature, named as in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointProperties {
    /// Unique well identifier.
    pub id: i64,
    /// Upstream object identifier. Absent if missing or mistyped.
    #[serde(default, deserialize_with = "lenient")]
    pub fot_id: Option<i64>,
    /// Object status.
    #[serde(default)]
    pub objekt_status: String,
    /// Well type.
    #[serde(default)]
    pub broendtype: Option<String>,
    /// Street code.
    #[serde(default)]
    pub vej_kode: String,
    /// Street name.
    #[serde(default)]
    pub vej_navn: String,
    /// Distance to the street centerline in meters. Absent if missing or
    /// mistyped.
    #[serde(default, deserialize_with = "lenient")]
    pub vej_distance_m: Option<f64>,
    /// Distance to the nearest parking reference in meters.
    pub p_plads_distance_m: f64,
    /// Cluster identifier.
    #[serde(default)]
    pub cluster_id: Option<i64>,
    /// Registration date (ISO 8601).
    #[serde(default)]
    pub registreringfra_dato: Option<String>,
}

/// A value of the expected type, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum Lenient<T> {
    Value(T),
    Other(serde::de::IgnoredAny),
}

/// Deserializes an optional attribute, mapping a value of the wrong type
/// to `None` instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Other(_)) | None => None,
    })
}
