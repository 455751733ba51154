use criterion::{criterion_group, criterion_main, Criterion};
use integrations_resilience::{extract_first_json, recover_json};
use std::hint::black_box;

fn bench_recovery(c: &mut Criterion) {
    let fenced = "```json\n{\"score\": 7, \"rationale\": \"coherent and on topic\"}\n```";
    let prose = "Sure, here is the evaluation you asked for: \
                 {\"score\": 7, \"rationale\": \"coherent and on topic\"} hope it helps";
    let refusal = "I cannot produce the requested structure for this input";

    c.bench_function("recover_fenced", |b| {
        b.iter(|| recover_json(black_box(fenced)))
    });
    c.bench_function("recover_prose", |b| {
        b.iter(|| recover_json(black_box(prose)))
    });
    c.bench_function("recover_refusal", |b| {
        b.iter(|| recover_json(black_box(refusal)))
    });
}

fn bench_extraction(c: &mut Criterion) {
    // Deep nesting with bracket noise inside string literals.
    let mut nested = String::from("leading prose ");
    for _ in 0..64 {
        nested.push_str("{\"layer\": [\"noise } ] here\", ");
    }
    nested.push_str("{\"leaf\": true}");
    for _ in 0..64 {
        nested.push_str("]}");
    }

    c.bench_function("extract_deeply_nested", |b| {
        b.iter(|| extract_first_json(black_box(&nested)))
    });
}

criterion_group!(benches, bench_recovery, bench_extraction);
criterion_main!(benches);
