//! Benchmarks for tileblur operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tileblur_bench::random_image;
use tileblur_ops::{blur_serial, decompose, run_parallel, GaussianKernel};

/// Serial sweep vs. tiled run over worker counts.
fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur");
    group.sample_size(10);

    let src = random_image(1024, 768).expect("valid dimensions");
    let kernel = GaussianKernel::new(1, 6.0).expect("valid kernel");
    group.throughput(Throughput::Elements(src.pixel_count() as u64));

    group.bench_function("serial", |b| {
        b.iter(|| blur_serial(black_box(&src), &kernel))
    });

    for workers in [1, 2, 4, 8] {
        let d = decompose(src.width(), src.height(), workers).expect("valid decomposition");
        group.bench_with_input(BenchmarkId::new("parallel", workers), &d, |b, d| {
            b.iter(|| run_parallel(black_box(&src), d, &kernel).expect("parallel blur"))
        });
    }

    group.finish();
}

/// Cost per pixel as the kernel grows.
fn bench_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius");
    group.sample_size(10);

    let src = random_image(256, 256).expect("valid dimensions");
    let d = decompose(src.width(), src.height(), 4).expect("valid decomposition");

    for radius in [0, 1, 2, 4] {
        let kernel = GaussianKernel::new(radius, 2.0).expect("valid kernel");
        group.bench_with_input(BenchmarkId::new("parallel_4", radius), &kernel, |b, k| {
            b.iter(|| run_parallel(black_box(&src), &d, k).expect("parallel blur"))
        });
    }

    group.finish();
}

/// Decomposition and kernel construction.
fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("setup");

    group.bench_function("decompose_3123x4967_12", |b| {
        b.iter(|| decompose(black_box(3123), black_box(4967), black_box(12)))
    });
    group.bench_function("kernel_r5", |b| {
        b.iter(|| GaussianKernel::new(black_box(5), black_box(2.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_blur, bench_radius, bench_setup);
criterion_main!(benches);
