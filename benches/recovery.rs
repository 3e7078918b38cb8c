// benches/recovery.rs
//! Full key recovery and single-length evaluation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vigenere_breaker::cipher::vigenere;
use vigenere_breaker::{KeyRecovery, KeyRecoveryBuilder};

const SAMPLE: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
of hope, it was the winter of despair, we had everything before us, we had nothing before \
us, we were all going direct to Heaven, we were all going direct the other way. ";

fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover");
    let recovery = KeyRecovery::default();

    for repeats in [1usize, 4, 16] {
        let plaintext = SAMPLE.repeat(repeats);
        let ciphertext = vigenere::encrypt(&plaintext, "LANTERN").unwrap();

        group.throughput(Throughput::Bytes(ciphertext.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("chars", ciphertext.len()),
            &ciphertext,
            |b, ct| b.iter(|| recovery.recover(black_box(ct)).unwrap()),
        );
    }

    group.finish();
}

fn bench_evaluate_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_length");
    let recovery = KeyRecoveryBuilder::new().with_max_key_len(40).build().unwrap();
    let ciphertext = vigenere::encrypt(&SAMPLE.repeat(8), "LANTERN").unwrap();

    for key_length in [1usize, 7, 20, 40] {
        group.bench_with_input(
            BenchmarkId::new("key_length", key_length),
            &key_length,
            |b, &len| b.iter(|| recovery.evaluate_length(black_box(&ciphertext), len).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_recover, bench_evaluate_length);
criterion_main!(benches);
