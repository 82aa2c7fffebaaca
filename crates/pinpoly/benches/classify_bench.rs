//! Criterion benchmarks for the three point-in-polygon predicates.
//! Each iteration classifies 2000 sampled points (the default `PointsCfg`).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pinpoly::classify::{partition, Method};
use pinpoly::geom2::rand::{draw_points, PointsCfg, PolygonCfg, ReplayToken};
use pinpoly::scene::Scene;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let points = draw_points(PointsCfg::default(), ReplayToken::new(7));
    for &n in &[10usize, 100, 1000] {
        let cfg = PolygonCfg {
            vertices: n,
            ..PolygonCfg::default()
        };
        let Some(scene) = Scene::from_cfg(cfg, ReplayToken::new(44)) else {
            continue;
        };
        for m in Method::ALL {
            group.bench_with_input(BenchmarkId::new(m.as_str(), n), &n, |b, _| {
                b.iter(|| partition(m, &points, scene.polygon(), scene.triangles()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
