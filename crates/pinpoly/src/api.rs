//! Flat function surface for external callers (CLI, benches, examples).
//!
//! Everything here is a thin alias over `classify` and `triangulate`; the
//! caller owns the polygon and the triangle set and passes them in.

use nalgebra::Vector2;

pub use crate::classify::{inside_triangle, partition, Method, Partition};
pub use crate::geom2::rand::{draw_points, draw_polygon, PointsCfg, PolygonCfg, ReplayToken};
pub use crate::geom2::{centroid, order_by_angle, orientation, signed_area, GeomCfg, Triangle};
pub use crate::scene::{Comparison, Scene};
pub use crate::triangulate::triangulate_with;
pub use crate::PolygonError;

/// Even-odd rule.
pub fn classify_ray_casting(
    point: Vector2<f64>,
    polygon: &[Vector2<f64>],
) -> Result<bool, PolygonError> {
    crate::classify::ray_casting(point, polygon)
}

/// Non-zero winding rule.
pub fn classify_winding_number(
    point: Vector2<f64>,
    polygon: &[Vector2<f64>],
) -> Result<bool, PolygonError> {
    crate::classify::winding_number(point, polygon)
}

/// Ear clipping with default tolerances.
pub fn triangulate(polygon: &[Vector2<f64>]) -> Result<Vec<Triangle>, PolygonError> {
    crate::triangulate::triangulate(polygon)
}

/// Inside iff inside any triangle of `triangles`.
pub fn classify_via_triangulation(point: Vector2<f64>, triangles: &[Triangle]) -> bool {
    crate::classify::via_triangulation(point, triangles)
}
