//! Explicit-offset codec benchmarks.
//!
//! Covers the hot paths a stateful buffer layer leans on:
//! - raw byte copy
//! - vectorized `u32` little-endian write and read
//! - MSB-first multi-bit read and write

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use light_minibuf::MiniBuffer;

fn bench_write_bytes(c: &mut Criterion) {
    let mut buf = MiniBuffer::new([0u8; 4]);
    c.bench_function("write_bytes", |b| {
        b.iter(|| buf.write_bytes(black_box(0), black_box(&[0x01u8, 0x02])));
    });
}

fn bench_u32_le(c: &mut Criterion) {
    let mut group = c.benchmark_group("u32_le");
    for count in [2usize, 64, 1024] {
        let values: Vec<u32> = (0..count as u32).collect();
        let mut buf = MiniBuffer::new(vec![0u8; count * 4]);
        let mut out = vec![0u32; count];
        group.throughput(Throughput::Bytes((count * 4) as u64));

        group.bench_with_input(BenchmarkId::new("write", count), &values, |b, values| {
            b.iter(|| buf.write_u32_le(black_box(0), black_box(values)));
        });
        group.bench_with_input(BenchmarkId::new("read", count), &count, |b, &count| {
            b.iter(|| buf.read_u32_le(black_box(&mut out), black_box(0), count));
        });
    }
    group.finish();
}

fn bench_bits(c: &mut Criterion) {
    let mut buf = MiniBuffer::new([0u8; 16]);
    c.bench_function("read_bits", |b| {
        b.iter(|| buf.read_bits(black_box(0), black_box(2)));
    });
    c.bench_function("set_bits_64", |b| {
        b.iter(|| buf.set_bits(black_box(3), black_box(u64::MAX), 64));
    });
}

criterion_group!(benches, bench_write_bytes, bench_u32_le, bench_bits);
criterion_main!(benches);
