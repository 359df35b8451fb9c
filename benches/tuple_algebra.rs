//! Microbenchmarks for the tuple algebra operations.
//!
//! Measures the elementwise and reduction operations a rendering loop
//! leans on: addition, scalar multiplication, dot product, cross product,
//! and normalization, over batches of seeded random tuples.

#![allow(missing_docs)] // Criterion macros generate undocumented functions

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use vecn::prelude::*;

/// Deterministic seed so runs are comparable across machines.
const BENCH_SEED: u64 = 0x7E57;

const BATCH: usize = 1024;

fn random_tuples_3d(rng: &mut StdRng) -> Vec<Tuple3d> {
    (0..BATCH)
        .map(|_| {
            Tuple3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            )
        })
        .collect()
}

/// Tuples bounded away from zero length, for the normalization benchmark.
fn random_unit_safe_tuples_3d(rng: &mut StdRng) -> Vec<Tuple3d> {
    (0..BATCH)
        .map(|_| {
            Tuple3::new(
                rng.random_range(1.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            )
        })
        .collect()
}

fn benchmark_elementwise_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let lhs = random_tuples_3d(&mut rng);
    let rhs = random_tuples_3d(&mut rng);

    let mut group = c.benchmark_group("elementwise");

    group.bench_function("add_3d", |b| {
        b.iter(|| {
            for (v, w) in lhs.iter().zip(rhs.iter()) {
                black_box(*v + *w);
            }
        });
    });

    group.bench_function("scalar_mul_3d", |b| {
        b.iter(|| {
            for v in &lhs {
                black_box(*v * 1.5);
            }
        });
    });

    group.finish();
}

fn benchmark_reductions(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let lhs = random_tuples_3d(&mut rng);
    let rhs = random_tuples_3d(&mut rng);

    let mut group = c.benchmark_group("reductions");

    group.bench_function("dot_3d", |b| {
        b.iter(|| {
            for (v, w) in lhs.iter().zip(rhs.iter()) {
                black_box(v.dot(w));
            }
        });
    });

    group.bench_function("cross_3d", |b| {
        b.iter(|| {
            for (v, w) in lhs.iter().zip(rhs.iter()) {
                black_box(v.cross(w));
            }
        });
    });

    group.bench_function("length_3d", |b| {
        b.iter(|| {
            for v in &lhs {
                black_box(v.length());
            }
        });
    });

    group.finish();
}

fn benchmark_normalization(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let tuples = random_unit_safe_tuples_3d(&mut rng);

    c.bench_function("normalized_3d", |b| {
        b.iter(|| {
            for v in &tuples {
                black_box(v.normalized());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_elementwise_ops,
    benchmark_reductions,
    benchmark_normalization
);
criterion_main!(benches);
