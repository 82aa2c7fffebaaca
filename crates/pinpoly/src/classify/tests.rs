use super::*;
use crate::triangulate::triangulate;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ]
}

fn star(k: usize, outer: f64, inner: f64, phase: f64) -> Vec<Vector2<f64>> {
    let n = 2 * k;
    (0..n)
        .map(|i| {
            let th = phase + std::f64::consts::TAU * i as f64 / n as f64;
            let r = if i % 2 == 0 { outer } else { inner };
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// True if `p` is within `tol` of a polygon edge or a triangle edge.
fn near_boundary(p: Vector2<f64>, poly: &[Vector2<f64>], tris: &[Triangle], tol: f64) -> bool {
    let n = poly.len();
    let poly_edges = (0..n).map(|i| (poly[i], poly[(i + 1) % n]));
    let tri_edges = tris
        .iter()
        .flat_map(|t| [(t.p1, t.p2), (t.p2, t.p3), (t.p3, t.p1)]);
    poly_edges
        .chain(tri_edges)
        .any(|(a, b)| dist_to_segment(p, a, b) < tol)
}

fn answers(p: Vector2<f64>, poly: &[Vector2<f64>], tris: &[Triangle]) -> [bool; 3] {
    Method::ALL.map(|m| classify(m, p, poly, tris).unwrap())
}

#[test]
fn square_scenario() {
    let poly = square();
    let tris = triangulate(&poly).unwrap();
    assert_eq!(tris.len(), 2);
    assert_eq!(answers(vector![5.0, 5.0], &poly, &tris), [true; 3]);
    assert_eq!(answers(vector![15.0, 15.0], &poly, &tris), [false; 3]);
    assert_eq!(answers(vector![1000.0, 1000.0], &poly, &tris), [false; 3]);
}

#[test]
fn clockwise_square_agrees() {
    let mut poly = square();
    poly.reverse();
    let tris = triangulate(&poly).unwrap();
    assert_eq!(answers(vector![5.0, 5.0], &poly, &tris), [true; 3]);
    assert_eq!(answers(vector![-3.0, 5.0], &poly, &tris), [false; 3]);
}

#[test]
fn dense_grid_on_convex_polygon() {
    let poly: Vec<_> = (0..6)
        .map(|i| {
            let th = std::f64::consts::TAU * i as f64 / 6.0 + 0.1;
            vector![10.0 * th.cos(), 10.0 * th.sin()]
        })
        .collect();
    let tris = triangulate(&poly).unwrap();
    let mut inside = 0;
    let mut outside = 0;
    for i in 0..60 {
        for j in 0..60 {
            let p = vector![-12.0 + 0.4013 * i as f64, -12.0 + 0.3971 * j as f64];
            if near_boundary(p, &poly, &tris, 1e-7) {
                continue;
            }
            let a = answers(p, &poly, &tris);
            assert!(a[0] == a[1] && a[1] == a[2], "{p:?}: {a:?}");
            if a[0] {
                inside += 1;
            } else {
                outside += 1;
            }
        }
    }
    assert!(inside > 100 && outside > 100);
}

#[test]
fn triangulation_method_checks_polygon_length() {
    let tris = triangulate(&square()).unwrap();
    let short = [vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        classify(Method::Triangulation, vector![0.5, 0.5], &short, &tris),
        Err(PolygonError::TooFewVertices { got: 2 })
    );
}

#[test]
fn partition_keeps_order_and_counts() {
    let poly = square();
    let tris = triangulate(&poly).unwrap();
    let pts = vec![
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
        vector![9.0, 2.0],
        vector![20.0, 2.0],
    ];
    for m in Method::ALL {
        let part = partition(m, &pts, &poly, &tris).unwrap();
        assert_eq!(part.len(), 4);
        assert_eq!(part.inside, vec![pts[0], pts[2]], "{m}");
        assert_eq!(part.outside, vec![pts[1], pts[3]], "{m}");
    }
    assert!(partition(Method::RayCasting, &pts, &poly[..2], &tris).is_err());
    assert!(partition(Method::RayCasting, &[], &poly, &tris)
        .unwrap()
        .is_empty());
}

#[test]
fn method_names_round_trip() {
    for m in Method::ALL {
        assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
    }
    assert_eq!("Ray-Casting".parse::<Method>().unwrap(), Method::RayCasting);
    assert!("bogus".parse::<Method>().is_err());
}

proptest! {
    #[test]
    fn methods_agree_off_the_boundary(
        k in 3usize..12,
        phase in 0.0f64..std::f64::consts::TAU,
        cw in any::<bool>(),
        pts in prop::collection::vec((-12.0f64..12.0, -12.0f64..12.0), 1..64),
    ) {
        let mut poly = star(k, 10.0, 4.0, phase);
        if cw {
            poly.reverse();
        }
        let tris = triangulate(&poly).unwrap();
        for (x, y) in pts {
            let p = Vector2::new(x, y);
            if near_boundary(p, &poly, &tris, 1e-7) {
                continue;
            }
            let a = answers(p, &poly, &tris);
            prop_assert!(a[0] == a[1] && a[1] == a[2], "{:?}: {:?}", p, a);
        }
    }

    #[test]
    fn far_points_are_outside(x in 1.0e3f64..1.0e6, y in -1.0e6f64..1.0e6) {
        let poly = square();
        let tris = triangulate(&poly).unwrap();
        prop_assert_eq!(answers(Vector2::new(x, y), &poly, &tris), [false; 3]);
        prop_assert_eq!(answers(Vector2::new(-x, y), &poly, &tris), [false; 3]);
    }
}
