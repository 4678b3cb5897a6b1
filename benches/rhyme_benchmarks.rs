//! Benchmarks for lexicon construction and rhyme queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use librhyme::dictionary::loader;
use librhyme::prelude::*;

const SAMPLE_DICT: &str = include_str!("../tests/data/cmudict-sample.dict");

const CONSONANTS: [&str; 8] = ["B", "D", "G", "K", "L", "M", "S", "T"];
const VOWELS: [&str; 5] = ["AA1", "AE1", "AO1", "IY1", "UW1"];

/// Create a synthetic lexicon of CVC / CVCVC words
fn create_lexicon(size: usize) -> Lexicon {
    let entries: Vec<(String, Vec<Phone>)> = (0..size)
        .map(|i| {
            let c = |n: usize| CONSONANTS[n % CONSONANTS.len()];
            let v = |n: usize| VOWELS[n % VOWELS.len()];
            let pron = if i % 3 == 0 {
                format!("{} {} {} AH0 {}", c(i), v(i / 8), c(i / 40), c(i / 7))
            } else {
                format!("{} {} {}", c(i), v(i / 8), c(i / 40))
            };
            (format!("WORD{}", i), phones(&pron))
        })
        .collect();
    Lexicon::build(entries, loader::cmudict_phone_types().expect("phone table parses"))
        .expect("lexicon builds")
}

/// Benchmark: lexicon construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexicon_build");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_lexicon(size)));
        });
    }

    group.bench_function("cmudict_sample", |b| {
        b.iter(|| {
            Lexicon::from_readers(
                black_box(SAMPLE_DICT.as_bytes()),
                loader::CMUDICT_PHONES.as_bytes(),
            )
            .expect("sample builds")
        });
    });

    group.finish();
}

/// Benchmark: every rule against a mid-sized lexicon
fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rhyme_rules");
    let engine = RhymeEngine::new(create_lexicon(10000));

    for rule in RhymeRule::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(rule), &rule, |b, &rule| {
            b.iter(|| {
                engine
                    .rhymes(black_box(rule), black_box("WORD3"), None)
                    .expect("word exists")
            });
        });
    }

    group.finish();
}

/// Benchmark: candidate budget
fn bench_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("assonance_budget");
    let lexicon = std::sync::Arc::new(create_lexicon(10000));

    for budget in [Some(10), Some(100), None] {
        let engine = RhymeEngine::with_config(
            std::sync::Arc::clone(&lexicon),
            EngineConfig::default().with_candidate_budget(budget),
        );
        let label = budget.map_or("unbounded".to_string(), |b| b.to_string());
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                engine
                    .assonance_rhymes(black_box("WORD3"), None)
                    .expect("word exists")
            });
        });
    }

    group.finish();
}

/// Benchmark: suffix search
fn bench_search(c: &mut Criterion) {
    let engine = RhymeEngine::new(create_lexicon(10000));
    let suffix = phones("AA1 B");

    c.bench_function("suffix_search", |b| {
        b.iter(|| engine.search(black_box(&suffix)));
    });
}

criterion_group!(benches, bench_build, bench_rules, bench_budget, bench_search);
criterion_main!(benches);
