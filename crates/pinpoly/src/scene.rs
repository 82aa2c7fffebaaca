//! Caller-owned polygon and its triangulation.
//!
//! A `Scene` pairs one polygon with the triangulation computed from it. The
//! two never drift apart: replacing the polygon discards the old triangles and
//! triangulates again from scratch.

use nalgebra::Vector2;

use crate::classify::{self, Method, Partition};
use crate::geom2::rand::{draw_polygon, PolygonCfg, ReplayToken};
use crate::geom2::{centroid, GeomCfg, Triangle};
use crate::triangulate::triangulate_with;
use crate::PolygonError;

/// Per-method inside counts over one batch of points.
///
/// `inside[k]` belongs to `Method::ALL[k]` and is `None` when that method could
/// not run. `disagreements` only counts methods that ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub points: usize,
    pub inside: [Option<usize>; 3],
    pub disagreements: usize,
}

impl Comparison {
    pub fn inside_for(&self, method: Method) -> Option<usize> {
        Method::ALL
            .iter()
            .position(|m| *m == method)
            .and_then(|k| self.inside[k])
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    polygon: Vec<Vector2<f64>>,
    centroid: Vector2<f64>,
    triangulation: Result<Vec<Triangle>, PolygonError>,
    cfg: GeomCfg,
}

impl Scene {
    pub fn new(polygon: Vec<Vector2<f64>>) -> Self {
        Self::with_cfg(polygon, GeomCfg::default())
    }

    pub fn with_cfg(polygon: Vec<Vector2<f64>>, cfg: GeomCfg) -> Self {
        let centroid = centroid(&polygon).unwrap_or_else(Vector2::zeros);
        let triangulation = triangulate_with(&polygon, cfg);
        Self {
            polygon,
            centroid,
            triangulation,
            cfg,
        }
    }

    /// Draw a polygon from the sampler and build the scene around it.
    pub fn from_cfg(poly_cfg: PolygonCfg, tok: ReplayToken) -> Option<Self> {
        let (polygon, _) = draw_polygon(poly_cfg, tok)?;
        Some(Self::new(polygon))
    }

    /// Replace the polygon; the previous triangulation is dropped.
    pub fn regenerate(&mut self, polygon: Vec<Vector2<f64>>) {
        *self = Self::with_cfg(polygon, self.cfg);
    }

    pub fn polygon(&self) -> &[Vector2<f64>] {
        &self.polygon
    }

    /// Mean of the polygon vertices (origin for an empty polygon).
    pub fn centroid(&self) -> Vector2<f64> {
        self.centroid
    }

    pub fn triangulation(&self) -> Result<&[Triangle], &PolygonError> {
        self.triangulation.as_deref()
    }

    /// Triangles, or an empty slice if triangulation failed.
    pub fn triangles(&self) -> &[Triangle] {
        self.triangulation.as_deref().unwrap_or(&[])
    }

    pub fn is_triangulated(&self) -> bool {
        self.triangulation.is_ok()
    }

    pub fn classify(&self, point: Vector2<f64>, method: Method) -> Result<bool, PolygonError> {
        let tris = self.triangles_for(method)?;
        classify::classify(method, point, &self.polygon, tris)
    }

    pub fn partition(
        &self,
        points: &[Vector2<f64>],
        method: Method,
    ) -> Result<Partition, PolygonError> {
        let tris = self.triangles_for(method)?;
        classify::partition(method, points, &self.polygon, tris)
    }

    /// Run every method on `points`. Methods that fail on this scene are
    /// left out of the counts instead of being read as "outside".
    pub fn compare(&self, points: &[Vector2<f64>]) -> Comparison {
        let answers = Method::ALL.map(|m| {
            let col: Result<Vec<bool>, _> = points.iter().map(|&p| self.classify(p, m)).collect();
            if let Err(e) = &col {
                tracing::debug!(method = %m, error = %e, "method_unavailable");
            }
            col.ok()
        });
        let ran: Vec<&Vec<bool>> = answers.iter().flatten().collect();
        let disagreements = (0..points.len())
            .filter(|&i| ran.iter().any(|col| col[i] != ran[0][i]))
            .count();
        Comparison {
            points: points.len(),
            inside: answers
                .each_ref()
                .map(|col| col.as_ref().map(|c| c.iter().filter(|b| **b).count())),
            disagreements,
        }
    }

    fn triangles_for(&self, method: Method) -> Result<&[Triangle], PolygonError> {
        match method {
            Method::Triangulation => self.triangulation.as_deref().map_err(Clone::clone),
            Method::RayCasting | Method::WindingNumber => Ok(&[]),
        }
    }
}
