//! Benchmarks for the CPU simulation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marsdust::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_create_particles(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_particles");

    for count in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(create_particles(count, &mut rng)))
        });
    }

    group.finish();
}

fn bench_apply_gravity(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gravity");
    let viewport = Viewport::new(1200, 1200);
    let cursor = Some(Vec2::new(600.0, 100.0));

    for count in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut particles = create_particles(count, &mut rng);
            b.iter(|| {
                black_box(apply_gravity(&mut particles, 1.0 / 60.0, cursor, viewport, &mut rng))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_particles, bench_apply_gravity);
criterion_main!(benches);
