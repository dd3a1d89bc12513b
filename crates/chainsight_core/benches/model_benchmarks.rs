//! Criterion benchmarks for chainsight_core model fitting
//!
//! Run with: cargo bench -p chainsight_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jiff::civil::date;

use chainsight_core::demand::DemandModel;
use chainsight_core::generate::{GeneratorConfig, generate};
use chainsight_core::model::{ProductId, Region};
use chainsight_core::negotiation::NegotiationModel;

fn bench_demand_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("demand_fit");

    for years in [1i16, 4] {
        let config = GeneratorConfig {
            start_date: date(2019, 1, 1),
            end_date: date(2018 + years, 12, 31),
            ..GeneratorConfig::default()
        };
        let data = generate(&config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{years}y")),
            data.sales(),
            |b, sales| b.iter(|| DemandModel::fit(black_box(sales)).unwrap()),
        );
    }

    group.finish();
}

fn bench_demand_predict(c: &mut Criterion) {
    let data = generate(&GeneratorConfig::default()).unwrap();
    let model = DemandModel::fit(data.sales()).unwrap();

    c.bench_function("demand_predict", |b| {
        b.iter(|| {
            model
                .predict(black_box(ProductId(42)), black_box(Region::East))
                .unwrap()
        })
    });
}

fn bench_negotiation_fit(c: &mut Criterion) {
    let data = generate(&GeneratorConfig::default()).unwrap();

    c.bench_function("negotiation_fit", |b| {
        b.iter(|| NegotiationModel::fit(black_box(data.suppliers())).unwrap())
    });
}

criterion_group!(
    benches,
    bench_demand_fit,
    bench_demand_predict,
    bench_negotiation_fit
);
criterion_main!(benches);
