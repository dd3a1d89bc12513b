use jiff::civil::date;

use crate::error::GenerateError;
use crate::generate::{
    COST_EFFECTIVENESS_RANGE, ECONOMIC_INDICATOR_RANGE, GeneratorConfig, PRODUCT_ID_MAX,
    QUANTITY_RANGE, RELIABILITY_RANGE, WEATHER_IMPACT_RANGE, generate,
};
use crate::model::SupplierId;

#[test]
fn test_row_counts_match_date_range() {
    let config = GeneratorConfig {
        start_date: date(2020, 1, 1),
        end_date: date(2020, 1, 31),
        supplier_count: 10,
        seed: 7,
    };
    let data = generate(&config).unwrap();

    assert_eq!(data.sales().len(), 31);
    assert_eq!(data.external_factors().len(), 31);
    assert_eq!(data.suppliers().len(), 10);
}

#[test]
fn test_default_range_covers_four_years() {
    let data = generate(&GeneratorConfig::default()).unwrap();

    // 2019-01-01 through 2022-12-31 inclusive, with 2020 a leap year
    assert_eq!(data.sales().len(), 1461);
    assert_eq!(data.external_factors().len(), 1461);
    assert_eq!(data.suppliers().len(), 50);
}

#[test]
fn test_sampled_values_stay_in_configured_ranges() {
    let data = generate(&GeneratorConfig::default()).unwrap();

    for record in data.sales() {
        assert!(record.product.0 >= 1 && record.product.0 <= PRODUCT_ID_MAX);
        assert!(QUANTITY_RANGE.contains(&record.quantity_sold));
    }
    for record in data.external_factors() {
        assert!(ECONOMIC_INDICATOR_RANGE.contains(&record.economic_indicator));
        assert!(WEATHER_IMPACT_RANGE.contains(&record.weather_impact));
    }
    for (n, supplier) in data.suppliers().iter().enumerate() {
        assert_eq!(supplier.id, SupplierId(n as u32 + 1));
        assert_eq!(supplier.name, format!("Supplier_{}", n + 1));
        assert!(RELIABILITY_RANGE.contains(&supplier.reliability));
        assert!(COST_EFFECTIVENESS_RANGE.contains(&supplier.cost_effectiveness));
    }
}

#[test]
fn test_same_seed_is_deterministic() {
    let config = GeneratorConfig::default();
    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();

    assert_eq!(first.sales(), second.sales());
    assert_eq!(first.external_factors(), second.external_factors());
    assert_eq!(first.suppliers(), second.suppliers());
}

#[test]
fn test_different_seeds_differ() {
    let base = GeneratorConfig::default();
    let other = GeneratorConfig { seed: 43, ..base };

    let first = generate(&base).unwrap();
    let second = generate(&other).unwrap();
    assert_ne!(first.sales(), second.sales());
}

#[test]
fn test_inverted_range_is_rejected() {
    let config = GeneratorConfig {
        start_date: date(2021, 1, 1),
        end_date: date(2020, 1, 1),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(&config),
        Err(GenerateError::InvalidDateRange { .. })
    ));
}

#[test]
fn test_single_day_range() {
    let config = GeneratorConfig {
        start_date: date(2020, 6, 15),
        end_date: date(2020, 6, 15),
        supplier_count: 1,
        seed: 1,
    };
    let data = generate(&config).unwrap();
    assert_eq!(data.sales().len(), 1);
    assert_eq!(data.external_factors().len(), 1);
    assert_eq!(data.suppliers().len(), 1);
}
