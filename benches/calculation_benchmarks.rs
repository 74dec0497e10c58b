//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the pure calculations on their own and the full HTTP round trip:
//! - Hours tiering and tax withholding: sub-microsecond targets
//! - Single payroll request through the router: < 100μs mean
//! - Batch of 1000 payroll requests: < 200ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{compute_hours_breakdown, compute_taxes};
use payroll_engine::config::{ConfigLoader, TaxConfig};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/us_default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a payroll request body for the given worker and hours.
fn create_payroll_body(worker_index: usize, total_hours: &str, ytd_prior: &str) -> String {
    serde_json::json!({
        "worker": {
            "id": format!("wkr_bench_{:04}", worker_index),
            "hourly_rate": "21.50"
        },
        "pay_period": {
            "start_date": "2023-06-05",
            "end_date": "2023-06-18",
            "pay_date": "2023-06-23"
        },
        "total_hours": total_hours,
        "ytd_gross_prior": ytd_prior
    })
    .to_string()
}

/// Benchmark: hours tiering across each band.
fn bench_hours_tiering(c: &mut Criterion) {
    let mut group = c.benchmark_group("hours_tiering");

    for hours in ["32", "45.125", "72.5"] {
        let total = hours.parse::<Decimal>().unwrap();
        group.bench_with_input(BenchmarkId::new("total_hours", hours), &total, |b, t| {
            b.iter(|| compute_hours_breakdown(black_box(*t), 1))
        });
    }

    group.finish();
}

/// Benchmark: tax withholding below, across and above the caps.
fn bench_tax_withholding(c: &mut Criterion) {
    let config = TaxConfig::standard();
    let mut group = c.benchmark_group("tax_withholding");

    for (label, gross, ytd) in [
        ("first_payment", "1000", "1000"),
        ("crosses_wage_base", "1000", "160700"),
        ("above_surtax_threshold", "5000", "205000"),
    ] {
        let gross = gross.parse::<Decimal>().unwrap();
        let ytd = ytd.parse::<Decimal>().unwrap();
        group.bench_function(label, |b| {
            b.iter(|| compute_taxes(black_box(gross), black_box(ytd), &config, 1))
        });
    }

    group.finish();
}

/// Benchmark: single payroll request through the router.
///
/// Target: < 100μs mean
fn bench_single_payroll(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_payroll_body(0, "52.5", "18000");

    c.bench_function("single_payroll", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 1000 payroll requests, mixing hour bands and YTD levels.
///
/// Target: < 200ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..1000)
        .map(|i| {
            let hours = match i % 3 {
                0 => "38",
                1 => "48.75",
                _ => "66",
            };
            let ytd = if i % 10 == 0 { "199000" } else { "25000" };
            create_payroll_body(i, hours, ytd)
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/payroll/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hours_tiering,
    bench_tax_withholding,
    bench_single_payroll,
    bench_batch_1000,
);
criterion_main!(benches);
