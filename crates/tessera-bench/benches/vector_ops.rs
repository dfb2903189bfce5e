//! Criterion micro-benchmarks for append, insert, erase and copy operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessera::{Vector, VectorConfig};
use tessera_bench::{ascending, front_inserts, labels, middle_inserts, LARGE, SMALL};
use tessera_test_utils::probe;

/// Benchmark: push 10K u64 values onto an empty vector (doubling growth).
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k", |b| {
        b.iter(|| black_box(ascending(LARGE)));
    });
}

/// Benchmark: push 10K values after reserving, so no growth happens.
fn bench_push_reserved_10k(c: &mut Criterion) {
    c.bench_function("push_reserved_10k", |b| {
        b.iter(|| {
            let mut v = Vector::with_capacity(LARGE);
            for i in 0..LARGE as u64 {
                v.push(i);
            }
            black_box(v)
        });
    });
}

/// Benchmark: 1K front inserts, exact-fit growth vs doubling growth.
fn bench_front_insert_1k(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert_1k");
    group.bench_function("exact_fit", |b| {
        b.iter(|| black_box(front_inserts(SMALL, VectorConfig::default())));
    });
    group.bench_function("amortized", |b| {
        b.iter(|| black_box(front_inserts(SMALL, VectorConfig::amortized())));
    });
    group.finish();
}

/// Benchmark: 1K midpoint inserts with doubling growth.
fn bench_middle_insert_1k(c: &mut Criterion) {
    c.bench_function("middle_insert_1k", |b| {
        b.iter(|| black_box(middle_inserts(SMALL, VectorConfig::amortized())));
    });
}

/// Benchmark: erase from the front until a 1K vector is empty.
fn bench_front_erase_1k(c: &mut Criterion) {
    c.bench_function("front_erase_1k", |b| {
        b.iter(|| {
            let mut v = ascending(SMALL);
            while !v.is_empty() {
                v.erase(0);
            }
            black_box(v)
        });
    });
}

/// Benchmark: deep copy of 10K strings.
fn bench_clone_strings_10k(c: &mut Criterion) {
    let src = labels(LARGE);
    c.bench_function("clone_strings_10k", |b| {
        b.iter(|| black_box(src.clone()));
    });
}

/// Benchmark: copy-assign 10K strings into a vector that already has the
/// capacity, reusing element buffers through `clone_from`.
fn bench_clone_from_reuse_10k(c: &mut Criterion) {
    let src = labels(LARGE);
    let mut dst = labels(LARGE);
    c.bench_function("clone_from_reuse_10k", |b| {
        b.iter(|| {
            dst.clone_from(&src);
            black_box(dst.len())
        });
    });
}

/// Benchmark: resize an instrumented vector up and back down, counting
/// constructions per iteration as a sanity check.
fn bench_resize_cycle_10k(c: &mut Criterion) {
    let mut v: Vector<tessera_test_utils::Probe> = Vector::with_capacity(LARGE);
    c.bench_function("resize_cycle_10k", |b| {
        b.iter(|| {
            probe::reset();
            v.resize(LARGE);
            v.resize(0);
            black_box(probe::stats().defaults)
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_push_reserved_10k,
    bench_front_insert_1k,
    bench_middle_insert_1k,
    bench_front_erase_1k,
    bench_clone_strings_10k,
    bench_clone_from_reuse_10k,
    bench_resize_cycle_10k
);
criterion_main!(benches);
