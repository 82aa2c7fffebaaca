//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the epsilon used to reject degenerate ears.
//! - `Triangle`: three owned points; counter-clockwise when produced by the
//!   triangulator.

use nalgebra::Vector2;

use super::util::triangle_signed_area;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Minimum doubled signed area for a candidate ear. Anything at or below is
    /// treated as reflex or collinear.
    pub eps_ear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_ear: 1e-10 }
    }
}

/// Triangle with owned corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub p3: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self { p1, p2, p3 }
    }

    /// Signed area; positive for counter-clockwise corners.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        triangle_signed_area(self.p1, self.p2, self.p3)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Closed containment for a counter-clockwise triangle.
    ///
    /// Not orientation-agnostic: a clockwise triangle contains nothing except
    /// possibly points on its boundary.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        crate::classify::inside_triangle(self.p1, self.p2, self.p3, p)
    }

    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        [self.p1, self.p2, self.p3]
    }
}
