use nalgebra::Vector2;

use crate::geom2::Triangle;

#[inline]
fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Barycentric sign test for a counter-clockwise triangle `(a, b, c)`.
///
/// Each scalar checks one edge: `p` must be on the left of (or on) b→c, c→a
/// and a→b. Boundary points count as inside. For a clockwise triangle the
/// interior fails all three checks, so callers must pass CCW corners.
#[inline]
pub fn inside_triangle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> bool {
    let a_cross_bp = cross(c - b, p - b);
    let b_cross_cp = cross(a - c, p - c);
    let c_cross_ap = cross(b - a, p - a);
    a_cross_bp >= 0.0 && b_cross_cp >= 0.0 && c_cross_ap >= 0.0
}

/// Inside iff inside at least one triangle. An empty set contains nothing.
pub fn via_triangulation(point: Vector2<f64>, triangles: &[Triangle]) -> bool {
    triangles.iter().any(|t| t.contains(point))
}
