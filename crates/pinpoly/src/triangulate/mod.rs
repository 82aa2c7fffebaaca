//! Ear-clipping triangulation of simple polygons.
//!
//! Purpose
//! - Decompose an ordered simple polygon into `n - 2` counter-clockwise
//!   triangles whose union is the polygon.
//!
//! Model
//! - Work on an index view that is counter-clockwise regardless of the input
//!   winding (identity if the shoelace area is positive, reversed otherwise).
//! - Walk consecutive index triples; a triple is an ear when it turns left by
//!   more than `GeomCfg::eps_ear` and no other active vertex lies in it.
//! - A budget of `2 * nv` failed steps (reset after every clipped ear) bounds
//!   the walk. Exhausting it means no ear exists, which for valid input never
//!   happens; we report `NotSimple` and drop the partial output.
//!
//! Complexity is O(n²) per ear search in the worst case; fine for polygons up
//! to a few thousand vertices.

mod earclip;

pub use earclip::{is_ear, triangulate, triangulate_with};
