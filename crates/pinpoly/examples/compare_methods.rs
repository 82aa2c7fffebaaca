//! Classify one batch of random points with every method and print the
//! inside counts plus the number of points where the methods disagree.
//!
//! Usage:
//!   cargo run -p pinpoly --example compare_methods -- [vertices] [points]

use pinpoly::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let vertices = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(2000);

    let tok = ReplayToken::new(2025);
    let cfg = PolygonCfg {
        vertices,
        ..PolygonCfg::default()
    };
    let Some(scene) = Scene::from_cfg(cfg, tok) else {
        eprintln!("usage: compare_methods [vertices>=3] [points]");
        return;
    };
    match scene.triangulation() {
        Ok(tris) => println!("polygon: {} vertices, {} triangles", vertices, tris.len()),
        Err(e) => println!("polygon: {} vertices, triangulation failed: {e}", vertices),
    }

    let points = draw_points(
        PointsCfg {
            count,
            ..PointsCfg::default()
        },
        tok.next(),
    );
    let cmp = scene.compare(&points);
    for (m, n) in Method::ALL.iter().zip(cmp.inside) {
        match n {
            Some(n) => println!("{m:>14}: {n} / {} inside", cmp.points),
            None => println!("{m:>14}: unavailable"),
        }
    }
    println!("disagreements: {}", cmp.disagreements);
}
