//! Criterion benchmarks for the TSP solvers.
//!
//! Instances are uniform random points in a 100×100 square with a fixed
//! seed, so runs are comparable across machines and commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::approx::approximate_cost;
use u_tsp::distance::DistanceMatrix;
use u_tsp::exact::exact_cost;
use u_tsp::instance::{create_rng, random_points, DEFAULT_COORDINATE_LIMIT};
use u_tsp::mst::prim;

fn instance(n: usize) -> DistanceMatrix {
    let mut rng = create_rng(42 + n as u64);
    let points = random_points(n, DEFAULT_COORDINATE_LIMIT, &mut rng)
        .expect("default coordinate limit is valid");
    DistanceMatrix::from_points(&points)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_held_karp(c: &mut Criterion) {
    let mut group = c.benchmark_group("held_karp");
    group.sample_size(10);

    for &n in &[8usize, 10, 12, 14] {
        let dist = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dist, |b, d| {
            b.iter(|| {
                let cost = exact_cost(black_box(d)).expect("size is within MAX_EXACT_CITIES");
                black_box(cost)
            })
        });
    }
    group.finish();
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");

    for &n in &[100usize, 400, 1000] {
        let dist = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dist, |b, d| {
            b.iter(|| {
                let tree = prim(black_box(d)).expect("non-empty instance");
                black_box(tree)
            })
        });
    }
    group.finish();
}

fn bench_mst_preorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_preorder");

    for &n in &[10usize, 50, 100, 200, 400] {
        let dist = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dist, |b, d| {
            b.iter(|| {
                let solution = approximate_cost(black_box(d)).expect("non-empty instance");
                black_box(solution)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_held_karp, bench_prim, bench_mst_preorder);
criterion_main!(benches);
