//! Bit vector benchmarks
//!
//! Measures OR-merge and serialization throughput over a range of sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packbits::{BitVector, ByteOrder};

/// A vector with every seventh bit set.
fn sparse_vector(bits: usize) -> BitVector {
    let mut v = BitVector::new(bits);
    for idx in (0..bits).step_by(7) {
        v.set_bit(idx, true).unwrap();
    }
    v
}

fn or_merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("or_merge");

    for bits in [64usize, 1024, 16384] {
        let small = sparse_vector(bits / 2);
        let large = sparse_vector(bits);

        group.bench_with_input(BenchmarkId::new("grow", bits), &bits, |b, _| {
            b.iter(|| {
                let mut acc = small.clone();
                acc.or(black_box(&large));
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("in_place", bits), &bits, |b, _| {
            b.iter(|| {
                let mut acc = large.clone();
                acc.or(black_box(&small));
                acc
            })
        });
    }

    group.finish();
}

fn write_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_to");

    for bits in [64usize, 1024, 16384] {
        let v = sparse_vector(bits);

        group.bench_with_input(BenchmarkId::new("little_endian", bits), &v, |b, v| {
            b.iter(|| {
                let mut out = Vec::with_capacity(v.len().div_ceil(8));
                v.write_to_ordered(&mut out, ByteOrder::LittleEndian).unwrap();
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("big_endian", bits), &v, |b, v| {
            b.iter(|| {
                let mut out = Vec::with_capacity(v.len().div_ceil(8));
                v.write_to_ordered(&mut out, ByteOrder::BigEndian).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, or_merge_benchmark, write_benchmark);
criterion_main!(benches);
