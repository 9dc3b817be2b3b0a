//! Criterion benchmarks for full frames on the reference profiles.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swirl_bench::{reference_profile, seed_impulses, stress_profile};
use swirl_engine::{FluidGrid, TwinJets};

fn bench_step_16k(c: &mut Criterion) {
    let mut grid = FluidGrid::new(reference_profile()).unwrap();
    seed_impulses(&mut grid, 32, 42).unwrap();

    // Warm up: run one frame so the velocity field is non-trivial.
    grid.step();

    c.bench_function("step_16k", |b| {
        b.iter(|| {
            let metrics = grid.step();
            black_box(&metrics);
        });
    });
}

fn bench_step_262k(c: &mut Criterion) {
    let mut grid = FluidGrid::new(stress_profile()).unwrap();
    seed_impulses(&mut grid, 128, 42).unwrap();
    grid.step();

    c.bench_function("step_262k", |b| {
        b.iter(|| {
            let metrics = grid.step();
            black_box(&metrics);
        });
    });
}

fn bench_jets_frame_16k(c: &mut Criterion) {
    let mut grid = FluidGrid::new(reference_profile()).unwrap();
    let jets = TwinJets::blue_red();

    c.bench_function("jets_frame_16k", |b| {
        b.iter(|| {
            jets.emit(&mut grid).unwrap();
            let metrics = grid.step();
            grid.decay();
            black_box(&metrics);
        });
    });
}

fn bench_100_frames_16k(c: &mut Criterion) {
    c.bench_function("100_frames_16k", |b| {
        b.iter(|| {
            let mut grid = FluidGrid::new(reference_profile()).unwrap();
            seed_impulses(&mut grid, 32, 42).unwrap();
            for _ in 0..100 {
                let metrics = grid.step();
                grid.decay();
                black_box(&metrics);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_step_16k,
    bench_step_262k,
    bench_jets_frame_16k,
    bench_100_frames_16k
);
criterion_main!(benches);
