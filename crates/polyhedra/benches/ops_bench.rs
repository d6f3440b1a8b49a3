//! Criterion microbenches for catalog construction and the hot operations.
//!
//! - catalog: building every reference solid.
//! - ops: peak detection, augment on a random face, diminish, and a short
//!   random walk.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyhedra::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.sample_size(10);
    group.bench_function("build", |b| b.iter(|| Catalog::new().unwrap()));
    group.finish();
}

fn bench_ops(c: &mut Criterion) {
    let catalog = Catalog::new().unwrap();
    let mut group = c.benchmark_group("ops");

    let rhombi = catalog.get("rhombicuboctahedron").unwrap();
    group.bench_function(BenchmarkId::new("peaks", "rhombicuboctahedron"), |b| {
        b.iter(|| rhombi.peaks())
    });

    let dodeca = catalog.get("dodecahedron").unwrap();
    group.bench_function(BenchmarkId::new("augment", "dodecahedron"), |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter_batched(
            || Argument::Face(rng.gen_range(0..dodeca.num_faces())),
            |arg| apply_operation(&catalog, Operation::Augment, dodeca, &arg, &Options::default()),
            BatchSize::SmallInput,
        )
    });

    let ico = catalog.get("icosahedron").unwrap();
    let peaks = ico.peaks();
    group.bench_function(BenchmarkId::new("diminish", "icosahedron"), |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || Argument::Peak(peaks[rng.gen_range(0..peaks.len())].clone()),
            |arg| apply_operation(&catalog, Operation::Diminish, ico, &arg, &Options::default()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("random_walk", "cube-8"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 2025, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = random_walk(&catalog, "cube", 8, tok);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_catalog, bench_ops);
criterion_main!(benches);
