//! Point-in-polygon predicates.
//!
//! Three independent answers to "is `p` inside?":
//! - `ray_casting`: even-odd crossing count of a ray towards +x.
//! - `winding_number`: signed crossings weighted by orientation; correct for
//!   either winding direction.
//! - `via_triangulation`: membership in any triangle of an ear-clipping output,
//!   using the counter-clockwise `inside_triangle` sign test.
//!
//! All three agree on strictly interior and strictly exterior points of a
//! simple polygon. Points exactly on an edge or vertex may get different
//! answers from different methods; there is no shared boundary convention.

mod polygon;
mod triangle;

pub use polygon::{ray_casting, winding_count, winding_number};
pub use triangle::{inside_triangle, via_triangulation};

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::geom2::Triangle;
use crate::PolygonError;

/// Which predicate to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    RayCasting,
    WindingNumber,
    Triangulation,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::RayCasting,
        Method::WindingNumber,
        Method::Triangulation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::RayCasting => "ray",
            Method::WindingNumber => "winding",
            Method::Triangulation => "triangulation",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unknown method name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown method {:?} (expected ray, winding or triangulation)",
            self.0
        )
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ray" | "ray-casting" | "even-odd" => Ok(Method::RayCasting),
            "winding" | "winding-number" | "nonzero" => Ok(Method::WindingNumber),
            "triangulation" | "tri" | "ear-clipping" => Ok(Method::Triangulation),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Run `method` for one point.
///
/// `triangles` is only read by `Method::Triangulation`; the polygon is still
/// length-checked for every method so the answer never depends on a stale
/// triangulation of a degenerate input.
pub fn classify(
    method: Method,
    point: Vector2<f64>,
    polygon: &[Vector2<f64>],
    triangles: &[Triangle],
) -> Result<bool, PolygonError> {
    match method {
        Method::RayCasting => ray_casting(point, polygon),
        Method::WindingNumber => winding_number(point, polygon),
        Method::Triangulation => {
            crate::error::check_len(polygon)?;
            Ok(via_triangulation(point, triangles))
        }
    }
}

/// Query points split by a classification method. Input order is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub inside: Vec<Vector2<f64>>,
    pub outside: Vec<Vector2<f64>>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty() && self.outside.is_empty()
    }
}

/// Classify a batch of points.
pub fn partition(
    method: Method,
    points: &[Vector2<f64>],
    polygon: &[Vector2<f64>],
    triangles: &[Triangle],
) -> Result<Partition, PolygonError> {
    crate::error::check_len(polygon)?;
    let mut out = Partition::default();
    for &p in points {
        if classify(method, p, polygon, triangles)? {
            out.inside.push(p);
        } else {
            out.outside.push(p);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
