use nalgebra::Vector2;

use crate::error::check_len;
use crate::geom2::orientation;
use crate::PolygonError;

/// Even-odd rule with a horizontal ray towards +x.
///
/// Edge `i` is `(polygon[i-1 mod n], polygon[i])`. An edge counts when exactly
/// one endpoint is strictly above `point.y` and its intersection with the line
/// `y = point.y` lies strictly right of `point.x`. Horizontal edges never count.
pub fn ray_casting(point: Vector2<f64>, polygon: &[Vector2<f64>]) -> Result<bool, PolygonError> {
    check_len(polygon)?;
    let n = polygon.len();
    let mut count = 0usize;
    for q in 0..n {
        let a = polygon[(q + n - 1) % n];
        let b = polygon[q];
        if (point.y < a.y) != (point.y < b.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                count += 1;
            }
        }
    }
    Ok(count % 2 == 1)
}

/// Signed crossing count: +1 for an upward edge with `point` on its left,
/// -1 for a downward edge with `point` on its right.
pub fn winding_count(point: Vector2<f64>, polygon: &[Vector2<f64>]) -> Result<i32, PolygonError> {
    check_len(polygon)?;
    let n = polygon.len();
    let mut wn = 0i32;
    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];
        if p1.y <= point.y {
            if p2.y > point.y && orientation(p1, p2, point) > 0.0 {
                wn += 1;
            }
        } else if p2.y <= point.y && orientation(p1, p2, point) < 0.0 {
            wn -= 1;
        }
    }
    Ok(wn)
}

/// Non-zero winding rule.
pub fn winding_number(point: Vector2<f64>, polygon: &[Vector2<f64>]) -> Result<bool, PolygonError> {
    Ok(winding_count(point, polygon)? != 0)
}
