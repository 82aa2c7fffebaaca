//! 2D geometry primitives shared by the classifiers and the triangulator.
//!
//! Purpose
//! - One orientation convention for every call site: `orientation(p0, p1, p) > 0`
//!   means `p` is left of the directed line p0→p1 (counter-clockwise turn).
//! - Shoelace area for winding normalization, arithmetic centroid, and the
//!   angle sort that turns a point cloud into a polygon boundary.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; polygons are ordered slices with an
//!   implicit closing edge from the last vertex to the first.
//! - Nothing here validates simplicity; see `triangulate` for how malformed
//!   input is bounded.

pub mod order;
pub mod rand;
mod types;
mod util;

pub use order::{angle_about, order_by_angle};
pub use types::{GeomCfg, Triangle};
pub use util::{centroid, orientation, signed_area, triangle_signed_area};
