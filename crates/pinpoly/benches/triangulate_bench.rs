//! Criterion benchmarks for ear clipping.
//! Focus sizes: n in {10, 50, 100, 500, 1000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use pinpoly::geom2::rand::{draw_polygon, PolygonCfg, ReplayToken};
use pinpoly::triangulate::triangulate;

/// Spiky star: half the vertices are reflex, which keeps the ear search busy.
fn star(n: usize) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|i| {
            let th = std::f64::consts::TAU * i as f64 / n as f64;
            let r = if i % 2 == 0 { 10.0 } else { 4.0 };
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for &n in &[10usize, 50, 100, 500, 1000] {
        group.bench_with_input(BenchmarkId::new("star", n), &n, |b, &n| {
            b.iter_batched(
                || star(n),
                |poly| {
                    let _tris = triangulate(&poly);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sampled", n), &n, |b, &n| {
            let cfg = PolygonCfg {
                vertices: n,
                ..PolygonCfg::default()
            };
            b.iter_batched(
                || draw_polygon(cfg, ReplayToken::new(43)).map(|(p, _)| p),
                |poly| {
                    if let Some(poly) = poly {
                        let _tris = triangulate(&poly);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
