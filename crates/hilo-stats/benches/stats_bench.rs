//! Benchmarks for the hilo-stats pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate};
use hilo_core::{partition_weeks, Candle, WeekPolicy};
use hilo_stats::{analyze, ReportConfig};

fn generate_hourly_candles(count: usize) -> Vec<Candle> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut candles = Vec::with_capacity(count);
    let mut price = 100.0_f64;

    for i in 0..count {
        let local = start + Duration::hours(i as i64);
        // Somewhat realistic drift so extrema move around the week
        let drift = (i as f64 * 0.01).sin() * 5.0;
        let swing = (i as f64 * 0.1).cos().abs() * 2.0 + 0.5;

        let open = price;
        let close = (open + drift * 0.1).max(1.0);
        let high = open.max(close) + swing;
        let low = (open.min(close) - swing).max(0.5);

        candles.push(Candle::new(
            local.and_utc().timestamp(),
            open,
            high,
            low,
            close,
            100.0 + (i % 50) as f64,
            local,
        ));

        price = close;
    }

    candles
}

fn bench_partition_weeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_weeks");

    // 168 hourly candles per week
    for size in [168, 1_680, 16_800].iter() {
        let candles = generate_hourly_candles(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| partition_weeks(black_box(&candles), WeekPolicy::IsoWeek));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in [168, 1_680, 16_800].iter() {
        let candles = generate_hourly_candles(*size);
        let config = ReportConfig::default();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| analyze(black_box(&candles), &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partition_weeks, bench_analyze);
criterion_main!(benches);
