//! Performance benchmarks for the Salary Engine.
//!
//! - Pure breakdown for one scale/step
//! - Audited calculation for one scale/step
//! - Breakdown for every entry in the embedded table
//! - Full HTTP round trip through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use salary_engine::api::{AppState, create_router};
use salary_engine::calculation::{calculate_compensation, compute};
use salary_engine::config::ConfigLoader;
use salary_engine::models::{CompensationInput, ContractedHours};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::embedded().expect("Failed to load config")
}

/// Benchmark: pure breakdown for each commonly offered hour option.
fn bench_compute(c: &mut Criterion) {
    let config = load_config();
    let table = config.salary_table();

    let mut group = c.benchmark_group("compute");
    for hours in ContractedHours::COMMON_OPTIONS {
        let contracted = ContractedHours::from_whole(hours).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(hours), &contracted, |b, h| {
            b.iter(|| compute(black_box(table), black_box(11), black_box(5), *h))
        });
    }
    group.finish();
}

/// Benchmark: calculation with audit trace.
fn bench_calculate_compensation(c: &mut Criterion) {
    let config = load_config();
    let input = CompensationInput {
        scale: 11,
        step: 5,
        contracted_hours: ContractedHours::REFERENCE,
    };

    c.bench_function("calculate_compensation", |b| {
        b.iter(|| calculate_compensation(black_box(&config), black_box(&input)))
    });
}

/// Benchmark: breakdown for every entry in the table.
fn bench_full_table(c: &mut Criterion) {
    let config = load_config();
    let table = config.salary_table();
    let entries: Vec<(u32, u32)> = table.entries().map(|(s, t, _)| (s, t)).collect();

    let mut group = c.benchmark_group("full_table");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("all_entries", |b| {
        b.iter(|| {
            entries
                .iter()
                .map(|&(scale, step)| compute(table, scale, step, ContractedHours::REFERENCE))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

/// Benchmark: GET /compensation through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));

    c.bench_function("http_compensation", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/compensation?scale=11&step=5&hours=36")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_compute,
    bench_calculate_compensation,
    bench_full_table,
    bench_http_round_trip
);
criterion_main!(benches);
