//! Projection benchmarks.
//!
//! Run with: `cargo bench --package runrate-bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use runrate_bench::benchmark_configs;
use runrate_lib::{ChangeCalculator, DaySeries, SeasonalExtrapolator, extrapolate_linear};

fn seasonal_benchmark(c: &mut Criterion) {
    let extrapolator = SeasonalExtrapolator::new();
    let mut group = c.benchmark_group("seasonal");

    for (name, config) in benchmark_configs() {
        let current = config.daily_series();
        let fallback = DaySeries::new();
        group.throughput(Throughput::Elements(current.len() as u64));

        group.bench_with_input(BenchmarkId::new("project", name), &config, |b, config| {
            b.iter(|| {
                extrapolator.extrapolate(
                    black_box(&current),
                    black_box(&fallback),
                    |v: &f64| *v,
                    config.reference_date,
                )
            });
        });
    }

    group.finish();
}

fn scalar_benchmark(c: &mut Criterion) {
    let calculator = ChangeCalculator::default();
    c.bench_function("change/compute", |b| {
        b.iter(|| calculator.compute(black_box(101.3), black_box(100.0)));
    });

    let (_, config) = &benchmark_configs()[1];
    c.bench_function("linear/extrapolate", |b| {
        b.iter(|| extrapolate_linear(black_box(1500.0), config.reference_date));
    });
}

criterion_group!(benches, seasonal_benchmark, scalar_benchmark);
criterion_main!(benches);
