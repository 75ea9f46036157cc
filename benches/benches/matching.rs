//! Benchmark automaton construction and matching time.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

criterion_main! { benches }
criterion_group! { benches, bench_build, bench_match_all, bench_match_first }

fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for &n in &[10usize, 100, 1_000] {
        let patterns = random_patterns(n, 8);
        g.bench_function(format!("{n}_patterns"), |b| {
            b.iter(|| {
                let mut builder = daac::Builder::new();
                builder.insert_all(patterns.iter()).unwrap();
                black_box(builder.build())
            });
        });
    }
}

fn bench_match_all(c: &mut Criterion) {
    let mut g = c.benchmark_group("match_all");

    for &n in &[10usize, 100, 1_000] {
        let patterns = random_patterns(n, 8);
        let mut builder = daac::Builder::new();
        builder.insert_all(patterns.iter()).unwrap();
        let ac = builder.build();

        let input = random_bytes(100_000);
        g.bench_function(format!("{n}_patterns"), |b| {
            b.iter(|| black_box(ac.match_all(&input)));
        });
    }
}

fn bench_match_first(c: &mut Criterion) {
    let mut g = c.benchmark_group("match_first");

    let patterns = random_patterns(1_000, 8);
    let mut builder = daac::Builder::new();
    builder.insert_all(patterns.iter()).unwrap();
    let ac = builder.build();

    let input = random_bytes(100_000);
    g.bench_function("1000_patterns", |b| {
        b.iter(|| black_box(ac.match_first(&input)));
    });
}

fn random_patterns(n: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
        })
        .collect()
}

fn random_bytes(n: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}
