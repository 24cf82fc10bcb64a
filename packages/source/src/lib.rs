#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Well data loading and the point store.
//!
//! Reads the wells `GeoJSON` `FeatureCollection`, normalizes each feature
//! into a [`Point`], and tracks the outcome of the load as a
//! [`LoadState`]. Loading is the only fallible boundary of the pipeline:
//! a failed load is recorded as state and every downstream computation
//! sees an empty point set.

pub mod normalize;
pub mod parsing;
pub mod store;

use std::path::Path;

use broend_map_point_models::Point;

pub use store::{LoadState, LoadStatus};

/// Errors that can occur while loading well data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The document parsed but has the wrong shape.
    #[error("Format error: {message}")]
    Format {
        /// Description of what went wrong.
        message: String,
    },
}

/// Parses a `GeoJSON` `FeatureCollection` string into points.
///
/// Features without a point geometry or with malformed attributes are
/// skipped and logged.
///
/// # Errors
///
/// Returns [`SourceError`] if the string is not `GeoJSON` or is not a
/// `FeatureCollection`.
pub fn parse_feature_collection(input: &str) -> Result<Vec<Point>, SourceError> {
    let geojson: geojson::GeoJson = input.parse()?;

    let geojson::GeoJson::FeatureCollection(collection) = geojson else {
        return Err(SourceError::Format {
            message: "Expected a GeoJSON FeatureCollection".to_string(),
        });
    };

    let total = collection.features.len();
    let points = normalize::normalize_features(&collection.features);
    let skipped = total - points.len();

    if skipped > 0 {
        log::warn!("Skipped {skipped} of {total} well features");
    }
    log::info!("Loaded {} wells", points.len());

    Ok(points)
}

/// Reads and parses a wells `GeoJSON` file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn load_path(path: &Path) -> Result<Vec<Point>, SourceError> {
    log::info!("Reading wells from {}", path.display());
    let body = std::fs::read_to_string(path)?;
    parse_feature_collection(&body)
}

/// Loads a wells file straight into a [`LoadState`].
///
/// Failures are logged and kept as [`LoadState::Failed`] rather than
/// returned.
#[must_use]
pub fn load_state_from_path(path: &Path) -> LoadState {
    LoadState::from_result(load_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [12.5683, 55.6761] },
                "properties": {
                    "id": 1,
                    "objekt_status": "Gældende",
                    "broendtype": "Rendestensbrønd",
                    "vej_kode": "0132",
                    "vej_navn": "Amagerbrogade",
                    "p_plads_distance_m": 4.2,
                    "cluster_id": 3,
                    "registreringfra_dato": "2021-04-09T10:15:00"
                }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": { "id": 2, "p_plads_distance_m": 1.0 }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [12.57, 55.68] },
                "properties": { "id": 3, "vej_navn": "Øresundsvej", "p_plads_distance_m": 20.0 }
            }
        ]
    }"#;

    #[test]
    fn parses_points_and_skips_bad_features() {
        let points = parse_feature_collection(SAMPLE).unwrap();
        assert_eq!(points.len(), 2);

        let first = &points[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.street_name, "Amagerbrogade");
        assert_eq!(first.street_code, "0132");
        assert_eq!(first.cluster_id, Some(3));
        assert!((first.longitude - 12.5683).abs() < f64::EPSILON);
        assert!((first.latitude - 55.6761).abs() < f64::EPSILON);
        assert!(first.recorded_at.is_some());

        let second = &points[1];
        assert_eq!(second.id, 3);
        assert!(second.cluster_id.is_none());
        assert!(second.recorded_at.is_none());
    }

    #[test]
    fn rejects_non_collection() {
        let err = parse_feature_collection(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#)
            .unwrap_err();
        assert!(matches!(err, SourceError::Format { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_feature_collection("not json").is_err());
    }

    #[test]
    fn missing_file_becomes_failed_state() {
        let state = load_state_from_path(Path::new("/nonexistent/broende.geojson"));
        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.points().is_empty());
        assert!(state.error().is_some());
    }
}
