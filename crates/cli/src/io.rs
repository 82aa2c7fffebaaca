//! File formats: polygon documents (JSON) and point tables (CSV via polars).

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use pinpoly::scene::Scene;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Polygon plus its triangulation as written by `cli polygon`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PolygonDoc {
    pub polygon: Vec<[f64; 2]>,
    pub centroid: [f64; 2],
    pub triangulated: bool,
    #[serde(default)]
    pub triangles: Vec<[[f64; 2]; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[inline]
fn arr(p: Vector2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

impl PolygonDoc {
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            polygon: scene.polygon().iter().copied().map(arr).collect(),
            centroid: arr(scene.centroid()),
            triangulated: scene.is_triangulated(),
            triangles: scene
                .triangles()
                .iter()
                .map(|t| t.vertices().map(arr))
                .collect(),
            error: scene.triangulation().err().map(|e| e.to_string()),
        }
    }

    /// Rebuild the scene; triangles are recomputed rather than trusted.
    pub fn to_scene(&self) -> Scene {
        Scene::new(
            self.polygon
                .iter()
                .map(|&[x, y]| Vector2::new(x, y))
                .collect(),
        )
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn read_polygon(path: &Path) -> Result<PolygonDoc> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PolygonDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon document {}", path.display()))?;
    if doc.polygon.len() < 3 {
        bail!(
            "{}: polygon has {} vertices, need at least 3",
            path.display(),
            doc.polygon.len()
        );
    }
    Ok(doc)
}

/// Read query points from a CSV with numeric `x` and `y` columns.
///
/// Empty cells skip their row; any other value that does not parse as a
/// number fails the whole read.
pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").strict_cast(DataType::Float64),
            col("y").strict_cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let pts: Vec<Vector2<f64>> = xs
        .into_iter()
        .zip(ys.into_iter())
        .filter_map(|(x, y)| Some(Vector2::new(x?, y?)))
        .collect();
    tracing::info!(rows = df.height(), points = pts.len(), "points_csv_read");
    Ok(pts)
}

/// Write `x, y, inside` rows.
pub fn write_classified(path: &Path, points: &[Vector2<f64>], inside: &[bool]) -> Result<()> {
    if points.len() != inside.len() {
        bail!(
            "{} points but {} classifications",
            points.len(),
            inside.len()
        );
    }
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![
        Series::new("x".into(), xs),
        Series::new("y".into(), ys),
        Series::new("inside".into(), inside),
    ])?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
