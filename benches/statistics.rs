// benches/statistics.rs
//! Letter statistics and column solving on growing inputs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vigenere_breaker::cipher::caesar;
use vigenere_breaker::stats::{index_of_coincidence, observed_frequencies, AlphabeticStream};
use vigenere_breaker::ColumnShiftSolver;

const SAMPLE: &str = "Call me Ishmael. Some years ago, never mind how long precisely, having \
little or no money in my purse, and nothing particular to interest me on shore, I thought I \
would sail about a little and see the watery part of the world. ";

// --- Size constants ---
const KB: usize = 1024;

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let solver = ColumnShiftSolver::english();

    for &size in &[KB, 16 * KB, 256 * KB] {
        let text = SAMPLE.repeat(size / SAMPLE.len() + 1);
        let ciphertext = caesar::encrypt(&text[..size], 11);
        let stream = AlphabeticStream::from_text(&ciphertext);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("stream", size), &ciphertext, |b, ct| {
            b.iter(|| AlphabeticStream::from_text(black_box(ct)))
        });
        group.bench_with_input(BenchmarkId::new("ic", size), &stream, |b, s| {
            b.iter(|| index_of_coincidence(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("frequencies", size), &stream, |b, s| {
            b.iter(|| observed_frequencies(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("best_shift", size), &stream, |b, s| {
            b.iter(|| solver.best_shift(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics);
criterion_main!(benches);
