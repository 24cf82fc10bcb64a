//! Normalizes raw `GeoJSON` well features into [`Point`] values.

use broend_map_point_models::{Point, PointProperties};

use crate::parsing::parse_registration_date;

/// Normalizes a list of raw features into points, preserving source order.
///
/// Skips features with a missing or non-point geometry, or with
/// attributes that do not match [`PointProperties`].
#[must_use]
pub fn normalize_features(features: &[geojson::Feature]) -> Vec<Point> {
    features.iter().filter_map(normalize_feature).collect()
}

/// Normalizes a single feature.
fn normalize_feature(feature: &geojson::Feature) -> Option<Point> {
    let (longitude, latitude) = point_coordinates(feature)?;

    let props = feature.properties.as_ref()?;
    let props: PointProperties =
        match serde_json::from_value(serde_json::Value::Object(props.clone())) {
            Ok(props) => props,
            Err(e) => {
                log::debug!("Skipping well feature with malformed properties: {e}");
                return None;
            }
        };

    let recorded_at = props
        .registreringfra_dato
        .as_deref()
        .and_then(parse_registration_date);

    Some(Point {
        id: props.id,
        street_name: props.vej_navn,
        street_code: props.vej_kode,
        cluster_id: props.cluster_id,
        latitude,
        longitude,
        status: props.objekt_status,
        well_type: props.broendtype,
        parking_distance_m: props.p_plads_distance_m,
        recorded_at,
    })
}

/// Extracts `(longitude, latitude)` from a point geometry.
fn point_coordinates(feature: &geojson::Feature) -> Option<(f64, f64)> {
    let geometry = feature.geometry.as_ref()?;
    match &geometry.value {
        geojson::Value::Point(coords) => match coords.as_slice() {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some((*lng, *lat)),
            _ => None,
        },
        _ => None,
    }
}
