use nalgebra::Vector2;

/// Doubled signed area of `(p0, p1, point)`: the z-component of
/// `(p1 - p0) × (point - p0)`.
///
/// Positive if `point` is left of p0→p1, zero if collinear, negative if right.
#[inline]
pub fn orientation(p0: Vector2<f64>, p1: Vector2<f64>, point: Vector2<f64>) -> f64 {
    (p1.x - p0.x) * (point.y - p0.y) - (point.x - p0.x) * (p1.y - p0.y)
}

#[inline]
pub fn triangle_signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    0.5 * orientation(a, b, c)
}

/// Shoelace area over the closed loop. Positive for counter-clockwise order.
///
/// Returns 0 for fewer than three vertices.
pub fn signed_area(polygon: &[Vector2<f64>]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (p, q) in (0..n).map(|q| ((q + n - 1) % n, q)) {
        sum += polygon[p].x * polygon[q].y - polygon[q].x * polygon[p].y;
    }
    sum * 0.5
}

/// Arithmetic mean of all points, or `None` for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
    Some(sum / points.len() as f64)
}
