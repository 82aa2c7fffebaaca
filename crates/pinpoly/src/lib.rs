//! Point-in-polygon classification and ear-clipping triangulation in 2D.
//!
//! Layout
//! - `geom2`: points, triangles, orientation/area primitives, angular ordering
//!   and a reproducible sampler for polygons and query points.
//! - `classify`: ray casting, winding number and triangle containment.
//! - `triangulate`: ear clipping with a bounded ear search.
//! - `scene`: caller-owned polygon + triangulation pair.
//! - `api`: the flat function surface used by the CLI.
//!
//! All algorithms are pure functions over borrowed slices; nothing in this
//! crate holds global state.

pub mod api;
pub mod classify;
mod error;
pub mod geom2;
pub mod scene;
pub mod triangulate;

pub use error::PolygonError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Triangle};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify, partition, Method, Partition};
    pub use crate::geom2::rand::{draw_points, draw_polygon, PointsCfg, PolygonCfg, ReplayToken};
    pub use crate::geom2::{centroid, order_by_angle, orientation, signed_area, GeomCfg, Triangle};
    pub use crate::scene::{Comparison, Scene};
    pub use crate::triangulate::{triangulate, triangulate_with};
    pub use crate::PolygonError;
    pub use nalgebra::Vector2 as Vec2;
}
