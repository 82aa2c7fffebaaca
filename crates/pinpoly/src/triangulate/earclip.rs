use nalgebra::Vector2;

use crate::classify::inside_triangle;
use crate::error::check_len;
use crate::geom2::{orientation, signed_area, GeomCfg, Triangle};
use crate::PolygonError;

/// Triangulate with default tolerances.
pub fn triangulate(polygon: &[Vector2<f64>]) -> Result<Vec<Triangle>, PolygonError> {
    triangulate_with(polygon, GeomCfg::default())
}

/// Ear clipping. On success returns exactly `polygon.len() - 2` triangles.
pub fn triangulate_with(
    polygon: &[Vector2<f64>],
    cfg: GeomCfg,
) -> Result<Vec<Triangle>, PolygonError> {
    check_len(polygon)?;
    let n = polygon.len();

    // Counter-clockwise index view.
    let mut idx: Vec<usize> = if signed_area(polygon) > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };

    let mut out = Vec::with_capacity(n - 2);
    let mut nv = n;
    let mut budget = 2 * nv;
    let mut v = nv - 1;

    while nv > 2 {
        if budget == 0 {
            tracing::debug!(
                vertices = n,
                remaining = nv,
                emitted = out.len(),
                "ear search exhausted"
            );
            return Err(PolygonError::NotSimple { remaining: nv });
        }
        budget -= 1;

        let u = if v < nv { v } else { 0 };
        v = if u + 1 < nv { u + 1 } else { 0 };
        let w = if v + 1 < nv { v + 1 } else { 0 };

        if is_ear(polygon, &idx[..nv], u, v, w, cfg) {
            out.push(Triangle::new(
                polygon[idx[u]],
                polygon[idx[v]],
                polygon[idx[w]],
            ));
            idx.remove(v);
            nv -= 1;
            budget = 2 * nv;
        }
    }
    Ok(out)
}

/// Ear test for positions `(u, v, w)` of the active index list `active`.
///
/// The triple must turn left by more than `cfg.eps_ear` (doubled area) and
/// contain no other active vertex, boundary included.
pub fn is_ear(
    polygon: &[Vector2<f64>],
    active: &[usize],
    u: usize,
    v: usize,
    w: usize,
    cfg: GeomCfg,
) -> bool {
    let a = polygon[active[u]];
    let b = polygon[active[v]];
    let c = polygon[active[w]];
    if orientation(a, b, c) <= cfg.eps_ear {
        return false;
    }
    !active
        .iter()
        .enumerate()
        .filter(|&(p, _)| p != u && p != v && p != w)
        .any(|(_, &i)| inside_triangle(a, b, c, polygon[i]))
}
