//! Performance benchmarks for linepress-lzw.
//!
//! Measures encode and decode throughput over repetitive and text-like
//! inputs at a few sizes, the regimes where the adaptive dictionary
//! behaves most differently.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linepress_lzw::{compress, decompress};
use std::hint::black_box;

/// Generate test text patterns for benchmarking.
mod test_data {
    /// Highly repetitive text (best case for the dictionary).
    pub fn repetitive(size: usize) -> String {
        "tobeornottobeortobeornot"
            .chars()
            .cycle()
            .take(size)
            .collect()
    }

    /// Realistic prose-like text.
    pub fn text_like(size: usize) -> String {
        "the quick brown fox jumps over the lazy dog. \
         pack my box with five dozen liquor jugs. \
         how vexingly quick daft zebras jump! "
            .chars()
            .cycle()
            .take(size)
            .collect()
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_encode");

    for size in [256usize, 4096, 65536] {
        for (name, text) in [
            ("repetitive", test_data::repetitive(size)),
            ("text_like", test_data::text_like(size)),
        ] {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| compress(black_box(text)).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_decode");

    for size in [256usize, 4096, 65536] {
        let text = test_data::text_like(size);
        let (table, payload) = compress(&text).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("text_like", size),
            &(table, payload),
            |b, (table, payload)| {
                b.iter(|| decompress(black_box(table), black_box(payload)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
