//! Synthetic dataset generator
//!
//! Produces the three tables by independent uniform sampling: one sales row
//! and one external-factor row per day in the configured range, plus a fixed
//! number of suppliers. Generation is deterministic for a given seed.

use jiff::civil::{Date, date};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dataset::Dataset;
use crate::error::GenerateError;
use crate::model::{ExternalFactorRecord, ProductId, Region, SalesRecord, SupplierId, SupplierRecord};

/// Product ids are drawn uniformly from 1..=PRODUCT_ID_MAX
pub const PRODUCT_ID_MAX: u32 = 100;
/// Daily quantities are drawn uniformly from QUANTITY_RANGE
pub const QUANTITY_RANGE: std::ops::Range<u32> = 10..100;
/// Economic indicator range (half-open)
pub const ECONOMIC_INDICATOR_RANGE: std::ops::Range<f64> = 0.8..1.2;
/// Weather impact range (half-open)
pub const WEATHER_IMPACT_RANGE: std::ops::Range<f64> = 0.5..1.5;
/// Supplier reliability range (half-open)
pub const RELIABILITY_RANGE: std::ops::Range<f64> = 0.7..1.0;
/// Supplier cost-effectiveness range (half-open)
pub const COST_EFFECTIVENESS_RANGE: std::ops::Range<f64> = 0.5..1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// First day of the generated history (inclusive)
    pub start_date: Date,
    /// Last day of the generated history (inclusive)
    pub end_date: Date,
    /// Number of suppliers, numbered from 1
    pub supplier_count: u32,
    /// Seed for the sampling rng
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: date(2019, 1, 1),
            end_date: date(2022, 12, 31),
            supplier_count: 50,
            seed: 42,
        }
    }
}

/// Generate the three synthetic tables.
///
/// Fails when the date range is inverted; all sampled values stay within the
/// ranges declared above.
pub fn generate(config: &GeneratorConfig) -> Result<Dataset, GenerateError> {
    if config.end_date < config.start_date {
        return Err(GenerateError::InvalidDateRange {
            start: config.start_date,
            end: config.end_date,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut sales = Vec::new();
    let mut external_factors = Vec::new();

    let mut day = config.start_date;
    loop {
        sales.push(SalesRecord {
            date: day,
            product: ProductId(rng.random_range(1..=PRODUCT_ID_MAX)),
            region: Region::ALL[rng.random_range(0..Region::ALL.len())],
            quantity_sold: rng.random_range(QUANTITY_RANGE),
        });
        external_factors.push(ExternalFactorRecord {
            date: day,
            economic_indicator: rng.random_range(ECONOMIC_INDICATOR_RANGE),
            weather_impact: rng.random_range(WEATHER_IMPACT_RANGE),
        });

        if day == config.end_date {
            break;
        }
        day = day.tomorrow()?;
    }

    let suppliers = (1..=config.supplier_count)
        .map(|n| SupplierRecord {
            id: SupplierId(n),
            name: format!("Supplier_{n}"),
            reliability: rng.random_range(RELIABILITY_RANGE),
            cost_effectiveness: rng.random_range(COST_EFFECTIVENESS_RANGE),
        })
        .collect();

    Ok(Dataset::new(sales, external_factors, suppliers))
}
