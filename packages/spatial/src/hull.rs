//! Hull algorithms.
//!
//! [`HullAlgorithm`] is the seam the hull builder calls through; any
//! implementation that can produce a concave hull bounded by a maximum
//! edge length, and a convex hull, will do. [`TinHull`] is the shipped
//! implementation.

use geo::{
    Area, ConvexHull, Distance, Haversine, LineString, MultiPoint, MultiPolygon, Point, Polygon,
    TriangulateSpade, unary_union,
};

/// Concave and convex hull capability.
pub trait HullAlgorithm {
    /// Concave hull of `points` whose edges are at most `max_edge_km`
    /// kilometers long. `None` when no area survives the edge limit.
    fn concave_hull(&self, points: &MultiPoint<f64>, max_edge_km: f64)
    -> Option<MultiPolygon<f64>>;

    /// Convex hull of `points`. `None` when the points span no area.
    fn convex_hull(&self, points: &MultiPoint<f64>) -> Option<Polygon<f64>>;
}

/// Triangulated-irregular-network hull.
///
/// The concave hull is the union of the Delaunay triangles whose every
/// edge is within the limit, measured as great-circle distance over
/// longitude/latitude coordinates. The result may be several disjoint
/// polygons.
#[derive(Debug, Clone, Copy, Default)]
pub struct TinHull;

impl HullAlgorithm for TinHull {
    fn concave_hull(
        &self,
        points: &MultiPoint<f64>,
        max_edge_km: f64,
    ) -> Option<MultiPolygon<f64>> {
        let coords = LineString::from(points.0.iter().map(|p| p.0).collect::<Vec<_>>());
        let triangles = match coords.unconstrained_triangulation() {
            Ok(triangles) => triangles,
            Err(e) => {
                log::debug!("Triangulation failed: {e:?}");
                return None;
            }
        };
        let max_edge_m = max_edge_km * 1000.0;

        let kept: Vec<Polygon<f64>> = triangles
            .into_iter()
            .filter(|t| {
                let [a, b, c] = t.to_array();
                [(a, b), (b, c), (c, a)].into_iter().all(|(from, to)| {
                    Haversine.distance(Point::from(from), Point::from(to)) <= max_edge_m
                })
            })
            .map(|t| t.to_polygon())
            .collect();

        if kept.is_empty() {
            return None;
        }

        let merged = unary_union(&kept);
        (!merged.0.is_empty()).then_some(merged)
    }

    fn convex_hull(&self, points: &MultiPoint<f64>) -> Option<Polygon<f64>> {
        if points.0.len() < 3 {
            return None;
        }
        let hull = points.convex_hull();
        (hull.unsigned_area() > 0.0).then_some(hull)
    }
}
