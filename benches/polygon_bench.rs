//! Criterion benchmarks for hull construction and convex intersection.
//! Focus sizes: n in {10, 100, 1000} input points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polykern::hull::compute_hull;
use polykern::intersect::convex_intersect;
use polykern::math::{Point2, Tolerance};
use polykern::polygon::Polygon;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(0.0..512.0), rng.gen_range(0.0..512.0)))
        .collect()
}

/// Convex CCW polygon with `n` vertices on a circle around `(cx, cy)`.
fn regular_polygon(n: usize, cx: f64, cy: f64, radius: f64) -> Polygon {
    let pts: Vec<Point2> = (0..n)
        .map(|k| {
            let theta = std::f64::consts::TAU * (k as f64) / (n as f64);
            Point2::new(cx + radius * theta.cos(), cy + radius * theta.sin())
        })
        .collect();
    Polygon::from_points(&pts)
}

fn bench_hull(c: &mut Criterion) {
    let tol = Tolerance::default();
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("compute_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _hull = compute_hull(tol, &pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let tol = Tolerance::default();
    let mut group = c.benchmark_group("convex_intersect");
    for &n in &[4usize, 16, 64] {
        let p = regular_polygon(n, 0.0, 0.0, 10.0);
        let q = regular_polygon(n, 4.0, 3.0, 10.0);
        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |b, _| {
            b.iter(|| {
                let _region = convex_intersect(tol, &p, &q);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_intersect);
criterion_main!(benches);
