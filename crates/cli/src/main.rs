use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector2;
use pinpoly::classify::Method;
use pinpoly::geom2::rand::{draw_points, PointsCfg, PolygonCfg, ReplayToken};
use pinpoly::scene::{Comparison, Scene};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::PolygonDoc;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Generate polygons, triangulate them, and classify query points")]
struct Cmd {
    /// Optional free-form label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random polygon, triangulate it, and write it as JSON
    Polygon {
        #[arg(long, default_value_t = 10)]
        vertices: usize,
        /// Half side of the sampling box around the center
        #[arg(long, default_value_t = 200.0)]
        radius: f64,
        #[arg(long, default_value_t = 400.0)]
        cx: f64,
        #[arg(long, default_value_t = 400.0)]
        cy: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Classify query points against a polygon and write x,y,inside as CSV
    Classify {
        #[arg(long)]
        polygon: PathBuf,
        /// ray, winding or triangulation
        #[arg(long, default_value = "ray")]
        method: Method,
        #[command(flatten)]
        points: PointSource,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run all three methods on the same points and report disagreements
    Compare {
        #[arg(long)]
        polygon: PathBuf,
        #[command(flatten)]
        points: PointSource,
        /// Also write the report here (JSON)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Query points: a CSV file, or a uniform sample in `[0,width) x [0,height)`.
#[derive(Args, Debug)]
struct PointSource {
    /// CSV with numeric x,y columns; overrides the sampler
    #[arg(long)]
    points: Option<PathBuf>,
    #[arg(long, default_value_t = 2000)]
    count: usize,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl PointSource {
    fn load(&self) -> Result<Vec<Vector2<f64>>> {
        match &self.points {
            Some(path) => io::read_points(path),
            None => {
                let cfg = PointsCfg {
                    count: self.count,
                    width: self.width,
                    height: self.height,
                };
                Ok(draw_points(cfg, ReplayToken::new(self.seed)))
            }
        }
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "points": self.points,
            "count": self.count,
            "width": self.width,
            "height": self.height,
            "seed": self.seed,
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Polygon {
            vertices,
            radius,
            cx,
            cy,
            seed,
            index,
            out,
        } => {
            let cfg = PolygonCfg {
                vertices,
                radius,
                center: Vector2::new(cx, cy),
            };
            polygon(cfg, ReplayToken { seed, index }, &out, tag)
        }
        Action::Classify {
            polygon,
            method,
            points,
            out,
        } => classify(&polygon, method, &points, &out, tag),
        Action::Compare {
            polygon,
            points,
            out,
        } => compare(&polygon, &points, out.as_deref(), tag),
        Action::Report => report(tag),
    }
}

fn polygon(cfg: PolygonCfg, tok: ReplayToken, out: &Path, tag: Option<&str>) -> Result<()> {
    tracing::info!(
        vertices = cfg.vertices,
        radius = cfg.radius,
        seed = tok.seed,
        index = tok.index,
        tag,
        "polygon"
    );
    let Some(scene) = Scene::from_cfg(cfg, tok) else {
        bail!(
            "cannot draw a polygon with {} vertices and radius {}",
            cfg.vertices,
            cfg.radius
        );
    };
    let outcome = match scene.triangulation() {
        Ok(tris) => {
            tracing::info!(triangles = tris.len(), "triangulated");
            json!({ "triangulated": true, "triangles": tris.len() })
        }
        Err(e) => {
            tracing::warn!(error = %e, "triangulation_failed");
            json!({ "triangulated": false, "triangles": 0, "error": e.to_string() })
        }
    };
    io::write_json(out, &PolygonDoc::from_scene(&scene))?;
    let params = json!({
        "vertices": cfg.vertices,
        "radius": cfg.radius,
        "center": [cfg.center.x, cfg.center.y],
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(
        out,
        Payload::new(params).with_outcome(outcome).with_tag(tag),
    )?;
    Ok(())
}

fn classify(
    polygon: &Path,
    method: Method,
    source: &PointSource,
    out: &Path,
    tag: Option<&str>,
) -> Result<()> {
    tracing::info!(polygon = %polygon.display(), %method, tag, "classify");
    let scene = io::read_polygon(polygon)?.to_scene();
    let points = source.load()?;
    let mut inside = Vec::with_capacity(points.len());
    for &p in &points {
        inside.push(scene.classify(p, method)?);
    }
    let n_in = inside.iter().filter(|b| **b).count();
    tracing::info!(
        points = points.len(),
        inside = n_in,
        outside = points.len() - n_in,
        "classified"
    );
    io::write_classified(out, &points, &inside)?;
    let params = json!({
        "polygon": polygon,
        "method": method.as_str(),
        "source": source.params(),
    });
    let outcome = json!({
        "points": points.len(),
        "inside": n_in,
        "outside": points.len() - n_in,
    });
    write_sidecar(
        out,
        Payload::new(params).with_outcome(outcome).with_tag(tag),
    )?;
    Ok(())
}

fn compare(
    polygon: &Path,
    source: &PointSource,
    out: Option<&Path>,
    tag: Option<&str>,
) -> Result<()> {
    tracing::info!(polygon = %polygon.display(), tag, "compare");
    let scene = io::read_polygon(polygon)?.to_scene();
    let points = source.load()?;
    let cmp = scene.compare(&points);
    tracing::info!(points = cmp.points, disagreements = cmp.disagreements, "compared");
    let report = compare_report(&scene, &cmp);
    println!("{}", serde_json::to_string_pretty(&report)?);
    if let Some(out) = out {
        io::write_json(out, &report)?;
        let params = json!({ "polygon": polygon, "source": source.params() });
        let outcome = json!({
            "triangulated": scene.is_triangulated(),
            "disagreements": cmp.disagreements,
        });
        write_sidecar(
            out,
            Payload::new(params).with_outcome(outcome).with_tag(tag),
        )?;
    }
    Ok(())
}

/// Inside counts per method plus the number of points without a unanimous
/// answer. Methods that cannot run (failed triangulation) are reported as null.
fn compare_report(scene: &Scene, cmp: &Comparison) -> serde_json::Value {
    let per_method: serde_json::Map<String, serde_json::Value> = Method::ALL
        .iter()
        .zip(cmp.inside)
        .map(|(m, n)| (m.to_string(), json!(n)))
        .collect();
    json!({
        "points": cmp.points,
        "triangulated": scene.is_triangulated(),
        "inside": per_method,
        "disagreements": cmp.disagreements,
    })
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "pinpoly": pinpoly::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
