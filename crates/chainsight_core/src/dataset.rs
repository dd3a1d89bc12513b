//! In-memory view over the three generated tables
//!
//! The dataset is loaded (or generated) once and read-only thereafter. The
//! only relationships between tables are implicit joins by date, product,
//! region and supplier id at query time; no referential integrity is
//! enforced.

use jiff::civil::Date;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

use crate::model::{ExternalFactorRecord, ProductId, Region, SalesRecord, SupplierId, SupplierRecord};

#[derive(Debug, Clone)]
pub struct Dataset {
    sales: Vec<SalesRecord>,
    external_factors: Vec<ExternalFactorRecord>,
    suppliers: Vec<SupplierRecord>,
    // Lookup indexes, built once at construction
    factor_by_date: FxHashMap<Date, usize>,
    supplier_by_id: FxHashMap<SupplierId, usize>,
}

impl Dataset {
    #[must_use]
    pub fn new(
        sales: Vec<SalesRecord>,
        external_factors: Vec<ExternalFactorRecord>,
        suppliers: Vec<SupplierRecord>,
    ) -> Self {
        let factor_by_date = external_factors
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.date, idx))
            .collect();
        let supplier_by_id = suppliers
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.id, idx))
            .collect();

        Self {
            sales,
            external_factors,
            suppliers,
            factor_by_date,
            supplier_by_id,
        }
    }

    #[must_use]
    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    #[must_use]
    pub fn external_factors(&self) -> &[ExternalFactorRecord] {
        &self.external_factors
    }

    #[must_use]
    pub fn suppliers(&self) -> &[SupplierRecord] {
        &self.suppliers
    }

    /// Aggregate quantity sold for a product in a region across all dates.
    ///
    /// An empty filter result sums to zero, it is not an error.
    #[must_use]
    pub fn total_quantity_sold(&self, product: ProductId, region: Region) -> u64 {
        self.sales
            .iter()
            .filter(|record| record.product == product && record.region == region)
            .map(|record| u64::from(record.quantity_sold))
            .sum()
    }

    /// Economic indicator recorded for the given date, if any
    #[must_use]
    pub fn economic_indicator_on(&self, date: Date) -> Option<f64> {
        self.factor_by_date
            .get(&date)
            .map(|&idx| self.external_factors[idx].economic_indicator)
    }

    /// Supplier record by id, if present
    #[must_use]
    pub fn supplier(&self, id: SupplierId) -> Option<&SupplierRecord> {
        self.supplier_by_id.get(&id).map(|&idx| &self.suppliers[idx])
    }

    /// Uniformly sample one supplier record.
    ///
    /// Returns `None` when the supplier table is empty.
    pub fn sample_supplier<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SupplierRecord> {
        self.suppliers.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn sample_dataset() -> Dataset {
        let sales = vec![
            SalesRecord {
                date: date(2020, 1, 1),
                product: ProductId(7),
                region: Region::North,
                quantity_sold: 30,
            },
            SalesRecord {
                date: date(2020, 1, 2),
                product: ProductId(7),
                region: Region::North,
                quantity_sold: 25,
            },
            SalesRecord {
                date: date(2020, 1, 3),
                product: ProductId(7),
                region: Region::South,
                quantity_sold: 99,
            },
        ];
        let factors = vec![ExternalFactorRecord {
            date: date(2020, 1, 1),
            economic_indicator: 1.05,
            weather_impact: 0.9,
        }];
        let suppliers = vec![SupplierRecord {
            id: SupplierId(3),
            name: "Supplier_3".to_string(),
            reliability: 0.85,
            cost_effectiveness: 0.6,
        }];
        Dataset::new(sales, factors, suppliers)
    }

    #[test]
    fn test_total_quantity_filters_by_product_and_region() {
        let data = sample_dataset();
        assert_eq!(data.total_quantity_sold(ProductId(7), Region::North), 55);
        assert_eq!(data.total_quantity_sold(ProductId(7), Region::South), 99);
        assert_eq!(data.total_quantity_sold(ProductId(8), Region::North), 0);
    }

    #[test]
    fn test_indicator_lookup() {
        let data = sample_dataset();
        assert_eq!(data.economic_indicator_on(date(2020, 1, 1)), Some(1.05));
        assert_eq!(data.economic_indicator_on(date(2020, 1, 2)), None);
    }

    #[test]
    fn test_supplier_lookup_and_sampling() {
        let data = sample_dataset();
        assert!(data.supplier(SupplierId(3)).is_some());
        assert!(data.supplier(SupplierId(4)).is_none());

        let mut rng = SmallRng::seed_from_u64(1);
        let sampled = data.sample_supplier(&mut rng).unwrap();
        assert_eq!(sampled.id, SupplierId(3));
    }

    #[test]
    fn test_sampling_empty_table() {
        let data = Dataset::new(Vec::new(), Vec::new(), Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(data.sample_supplier(&mut rng).is_none());
    }
}
