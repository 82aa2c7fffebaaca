//! Angular ordering of a point cloud around its centroid.
//!
//! Purpose
//! - Turn an unordered sample into a polygon boundary by sorting on the polar
//!   angle seen from the centroid.
//!
//! Guarantees
//! - The output is a permutation of the input (stable for equal angles).
//! - For samples that are star-shaped about their centroid the result is a
//!   simple polygon. Nothing here checks that; pathological samples may come
//!   out self-intersecting and the triangulator reports them as `NotSimple`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::util::centroid;

/// Polar angle of `p` as seen from `centroid`, measured on `centroid - p`.
///
/// The argument order flips the usual `atan2(p - c)` by π; the resulting cyclic
/// order is the same, only the starting vertex moves.
#[inline]
pub fn angle_about(p: Vector2<f64>, centroid: Vector2<f64>) -> f64 {
    (centroid.y - p.y).atan2(centroid.x - p.x)
}

/// Sort `points` ascending by `angle_about` their centroid.
///
/// Returns the reordered points together with the centroid, or `None` for an
/// empty slice.
pub fn order_by_angle(points: &[Vector2<f64>]) -> Option<(Vec<Vector2<f64>>, Vector2<f64>)> {
    let c = centroid(points)?;
    let mut keyed: Vec<(f64, Vector2<f64>)> =
        points.iter().map(|&p| (angle_about(p, c), p)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    Some((keyed.into_iter().map(|(_, p)| p).collect(), c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::signed_area;
    use nalgebra::vector;

    #[test]
    fn square_cloud_orders_into_a_loop() {
        let pts = vec![
            vector![10.0, 10.0],
            vector![0.0, 0.0],
            vector![0.0, 10.0],
            vector![10.0, 0.0],
        ];
        let (poly, c) = order_by_angle(&pts).unwrap();
        assert!((c - vector![5.0, 5.0]).norm() < 1e-12);
        // A correctly ordered square has the full area; a bow-tie has zero.
        assert!((signed_area(&poly).abs() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn angles_are_non_decreasing() {
        let pts = vec![
            vector![3.0, 1.0],
            vector![-2.0, 4.0],
            vector![-1.0, -3.0],
            vector![4.0, -2.0],
            vector![0.5, 5.0],
        ];
        let (poly, c) = order_by_angle(&pts).unwrap();
        let angles: Vec<f64> = poly.iter().map(|&p| angle_about(p, c)).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(poly.len(), pts.len());
    }

    #[test]
    fn ties_keep_input_order() {
        // (2,0) and (4,0) lie on the same ray from the centroid (0,0).
        let pts = vec![
            vector![4.0, 0.0],
            vector![2.0, 0.0],
            vector![-3.0, 0.0],
            vector![-3.0, 0.0],
        ];
        let (poly, _) = order_by_angle(&pts).unwrap();
        let i4 = poly.iter().position(|p| p.x == 4.0).unwrap();
        let i2 = poly.iter().position(|p| p.x == 2.0).unwrap();
        assert!(i4 < i2);
    }

    #[test]
    fn empty_input() {
        assert!(order_by_angle(&[]).is_none());
    }
}
