//! Benchmarks for envelope classification
//!
//! This benchmark measures:
//! - Decoding plus classification of batch responses of growing size
//! - Top-level error classification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use vk_ads_client::client::classify_envelope;
use vk_ads_client::codec;

fn batch_body(n: usize) -> String {
    let items: Vec<_> = (0..n)
        .map(|i| {
            if i % 10 == 0 {
                json!({"id": i, "error_code": 602, "error_desc": "limit exceeded"})
            } else {
                json!({"id": i, "name": format!("campaign {}", i), "status": 1})
            }
        })
        .collect();
    json!({ "response": items }).to_string()
}

fn bench_batch_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_classification");
    for size in [1usize, 50, 500] {
        let body = batch_body(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| {
                let envelope = codec::decode(black_box(body)).unwrap();
                classify_envelope(200, envelope).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_top_level_error(c: &mut Criterion) {
    let body = json!({"error": {"error_code": 9, "error_msg": "Flood control"}}).to_string();
    c.bench_function("top_level_flood_error", |b| {
        b.iter(|| {
            let envelope = codec::decode(black_box(&body)).unwrap();
            classify_envelope(200, envelope).unwrap_err()
        })
    });
}

criterion_group!(benches, bench_batch_classification, bench_top_level_error);
criterion_main!(benches);
