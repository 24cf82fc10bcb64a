//! Point features for marker rendering.
//!
//! Wells go back out under the attribute names of the source data, so the
//! map layer can style them exactly as it would the raw file.

use broend_map_point_models::Point;

/// Converts one well to a `GeoJSON` point feature.
#[must_use]
pub fn point_feature(point: &Point) -> geojson::Feature {
    let mut properties = geojson::JsonObject::new();
    properties.insert("id".to_string(), point.id.into());
    properties.insert("vej_navn".to_string(), point.street_name.clone().into());
    properties.insert("vej_kode".to_string(), point.street_code.clone().into());
    properties.insert("objekt_status".to_string(), point.status.clone().into());
    properties.insert("broendtype".to_string(), point.well_type.clone().into());
    properties.insert(
        "p_plads_distance_m".to_string(),
        point.parking_distance_m.into(),
    );
    properties.insert("cluster_id".to_string(), point.cluster_id.into());
    properties.insert(
        "registreringfra_dato".to_string(),
        point.recorded_at.map(|t| t.to_rfc3339()).into(),
    );

    geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![
            point.longitude,
            point.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Converts wells to a `GeoJSON` `FeatureCollection`, in input order.
#[must_use]
pub fn point_collection(points: &[Point]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: points.iter().map(point_feature).collect(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn well(id: i64, cluster_id: Option<i64>) -> Point {
        Point {
            id,
            street_name: "Østerbrogade".to_string(),
            street_code: "1234".to_string(),
            cluster_id,
            latitude: 55.70,
            longitude: 12.58,
            status: "Gældende".to_string(),
            well_type: Some("Nedløbsbrønd".to_string()),
            parking_distance_m: 7.5,
            recorded_at: None,
        }
    }

    #[test]
    fn feature_uses_source_property_names() {
        let feature = point_feature(&well(3, Some(12)));
        let props = feature.properties.as_ref().unwrap();

        assert_eq!(props["id"], 3);
        assert_eq!(props["vej_navn"], "Østerbrogade");
        assert_eq!(props["vej_kode"], "1234");
        assert_eq!(props["objekt_status"], "Gældende");
        assert_eq!(props["broendtype"], "Nedløbsbrønd");
        assert_eq!(props["p_plads_distance_m"], 7.5);
        assert_eq!(props["cluster_id"], 12);
        assert_eq!(props["registreringfra_dato"], Value::Null);
    }

    #[test]
    fn geometry_is_lng_lat() {
        let feature = point_feature(&well(1, None));
        let geometry = feature.geometry.unwrap();
        let geojson::Value::Point(coords) = geometry.value else {
            panic!("expected a point geometry");
        };
        assert_eq!(coords, vec![12.58, 55.70]);
        assert_eq!(feature.properties.unwrap()["cluster_id"], Value::Null);
    }

    #[test]
    fn collection_keeps_order() {
        let collection = point_collection(&[well(5, None), well(2, None), well(9, None)]);
        let ids: Vec<Value> = collection
            .features
            .iter()
            .map(|f| f.properties.as_ref().unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![Value::from(5), Value::from(2), Value::from(9)]);
    }
}
