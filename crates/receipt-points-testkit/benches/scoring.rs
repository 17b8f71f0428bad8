//! Scoring and processing throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use receipt_points::core::{score, validate_receipt, Receipt};
use receipt_points::{Processor, ReceiptId};
use receipt_points_testkit::fixtures::target_receipt;

fn bench_validate_and_score(c: &mut Criterion) {
    let raw = target_receipt().to_json();

    c.bench_function("decode_validate_score", |b| {
        b.iter(|| {
            let receipt = Receipt::from_json(black_box(&raw)).unwrap();
            let valid = validate_receipt(&receipt).unwrap();
            score(&valid)
        })
    });

    c.bench_function("derive_id", |b| b.iter(|| ReceiptId::derive(black_box(&raw))));
}

fn bench_process(c: &mut Criterion) {
    let raw = target_receipt().to_json();

    c.bench_function("process_fresh", |b| {
        b.iter(|| {
            let processor: Processor = Processor::default();
            processor.process(black_box(&raw)).unwrap()
        })
    });

    let processor: Processor = Processor::default();
    processor.process(&raw).unwrap();
    c.bench_function("process_cached", |b| {
        b.iter(|| processor.process(black_box(&raw)).unwrap())
    });
}

criterion_group!(benches, bench_validate_and_score, bench_process);
criterion_main!(benches);
