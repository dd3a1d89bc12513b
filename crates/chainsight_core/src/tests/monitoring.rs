use jiff::civil::{Date, date};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::dataset::Dataset;
use crate::error::MonitorError;
use crate::model::{
    ExternalFactorRecord, ProductId, Region, SalesRecord, SupplierId, SupplierRecord,
};
use crate::monitoring::{AlertKind, AlertThresholds, monitor};

const DAY: Date = date(2021, 3, 1);

/// One product, one region, a single supplier so sampling is deterministic
fn dataset(total_sales: u32, indicator: f64, reliability: f64, cost: f64) -> Dataset {
    let sales = vec![SalesRecord {
        date: DAY,
        product: ProductId(1),
        region: Region::North,
        quantity_sold: total_sales,
    }];
    let factors = vec![ExternalFactorRecord {
        date: DAY,
        economic_indicator: indicator,
        weather_impact: 1.0,
    }];
    let suppliers = vec![SupplierRecord {
        id: SupplierId(1),
        name: "Supplier_1".to_string(),
        reliability,
        cost_effectiveness: cost,
    }];
    Dataset::new(sales, factors, suppliers)
}

fn run(data: &Dataset) -> Vec<AlertKind> {
    let mut rng = SmallRng::seed_from_u64(0);
    monitor(
        data,
        ProductId(1),
        Region::North,
        DAY,
        &AlertThresholds::default(),
        &mut rng,
    )
    .unwrap()
    .alerts
}

#[test]
fn test_quiet_when_all_metrics_healthy() {
    let data = dataset(60, 1.0, 0.9, 0.7);
    assert!(run(&data).is_empty());
}

#[test]
fn test_low_sales_fires_below_threshold_only() {
    assert_eq!(run(&dataset(49, 1.0, 0.9, 0.7)), vec![AlertKind::LowSales]);
    // The threshold itself does not fire
    assert!(run(&dataset(50, 1.0, 0.9, 0.7)).is_empty());
}

#[test]
fn test_high_economic_indicator_fires_above_threshold_only() {
    assert_eq!(
        run(&dataset(60, 1.21, 0.9, 0.7)),
        vec![AlertKind::HighEconomicIndicator]
    );
    assert!(run(&dataset(60, 1.2, 0.9, 0.7)).is_empty());
}

#[test]
fn test_supplier_alerts_fire_below_thresholds_only() {
    assert_eq!(
        run(&dataset(60, 1.0, 0.79, 0.7)),
        vec![AlertKind::LowSupplierReliability]
    );
    assert_eq!(
        run(&dataset(60, 1.0, 0.9, 0.49)),
        vec![AlertKind::HighSupplierCost]
    );
    assert!(run(&dataset(60, 1.0, 0.8, 0.5)).is_empty());
}

#[test]
fn test_all_four_alerts_can_fire_together() {
    let alerts = run(&dataset(10, 1.5, 0.5, 0.1));
    assert_eq!(
        alerts,
        vec![
            AlertKind::LowSales,
            AlertKind::HighEconomicIndicator,
            AlertKind::LowSupplierReliability,
            AlertKind::HighSupplierCost,
        ]
    );
}

#[test]
fn test_unseen_product_aggregates_to_zero_and_fires_low_sales() {
    let data = dataset(60, 1.0, 0.9, 0.7);
    let mut rng = SmallRng::seed_from_u64(0);
    let snapshot = monitor(
        &data,
        ProductId(99),
        Region::North,
        DAY,
        &AlertThresholds::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(snapshot.total_sales, 0);
    assert!(snapshot.alerts.contains(&AlertKind::LowSales));
}

#[test]
fn test_missing_indicator_date_is_an_error() {
    let data = dataset(60, 1.0, 0.9, 0.7);
    let mut rng = SmallRng::seed_from_u64(0);
    let missing = date(2030, 1, 1);
    assert_eq!(
        monitor(
            &data,
            ProductId(1),
            Region::North,
            missing,
            &AlertThresholds::default(),
            &mut rng,
        )
        .unwrap_err(),
        MonitorError::IndicatorNotFound(missing)
    );
}

#[test]
fn test_empty_supplier_table_is_an_error() {
    let base = dataset(60, 1.0, 0.9, 0.7);
    let data = Dataset::new(base.sales().to_vec(), base.external_factors().to_vec(), Vec::new());
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        monitor(
            &data,
            ProductId(1),
            Region::North,
            DAY,
            &AlertThresholds::default(),
            &mut rng,
        )
        .unwrap_err(),
        MonitorError::NoSuppliers
    );
}

#[test]
fn test_seeded_rng_makes_sampling_reproducible() {
    let mut suppliers = Vec::new();
    for id in 1..=30 {
        suppliers.push(SupplierRecord {
            id: SupplierId(id),
            name: format!("Supplier_{id}"),
            reliability: 0.9,
            cost_effectiveness: 0.7,
        });
    }
    let base = dataset(60, 1.0, 0.9, 0.7);
    let data = Dataset::new(base.sales().to_vec(), base.external_factors().to_vec(), suppliers);

    let mut first_rng = SmallRng::seed_from_u64(99);
    let mut second_rng = SmallRng::seed_from_u64(99);
    let thresholds = AlertThresholds::default();
    let first = monitor(&data, ProductId(1), Region::North, DAY, &thresholds, &mut first_rng)
        .unwrap();
    let second = monitor(&data, ProductId(1), Region::North, DAY, &thresholds, &mut second_rng)
        .unwrap();
    assert_eq!(first.supplier, second.supplier);
}
