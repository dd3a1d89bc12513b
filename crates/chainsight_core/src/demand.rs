//! Demand forecasting model
//!
//! A linear model over the numeric product id plus one-hot encoded region.
//! The first region observed in training order is the baseline and carries
//! no indicator column, matching drop-first dummy encoding. The trained
//! region set is retained so predictions for unseen regions fail with an
//! encoding error rather than silently extrapolating.

use crate::error::{EncodeError, RegressionError};
use crate::model::{ProductId, Region, SalesRecord};
use crate::regression::LinearModel;

#[derive(Debug, Clone)]
pub struct DemandModel {
    model: LinearModel,
    /// Regions seen at fit time, in first-observation order. The first entry
    /// is the dropped baseline category.
    regions: Vec<Region>,
}

impl DemandModel {
    /// Fit on historical sales. No retraining or incremental update; fit a
    /// fresh model when the data changes.
    pub fn fit(records: &[SalesRecord]) -> Result<Self, RegressionError> {
        if records.is_empty() {
            return Err(RegressionError::EmptyTrainingSet);
        }

        // Collect regions in first-observation order while recording the
        // one-hot position of every record. Positions stay stable because
        // the list only ever grows.
        let mut regions: Vec<Region> = Vec::new();
        let mut positions = Vec::with_capacity(records.len());
        for record in records {
            let position = match regions.iter().position(|&r| r == record.region) {
                Some(p) => p,
                None => {
                    regions.push(record.region);
                    regions.len() - 1
                }
            };
            positions.push(position);
        }

        let width = regions.len();
        let rows: Vec<Vec<f64>> = records
            .iter()
            .zip(&positions)
            .map(|(record, &position)| encode(width, position, record.product))
            .collect();
        let targets: Vec<f64> = records
            .iter()
            .map(|record| f64::from(record.quantity_sold))
            .collect();

        let model = LinearModel::fit(&rows, &targets)?;
        Ok(Self { model, regions })
    }

    /// Regions the model was trained on
    #[must_use]
    pub fn trained_regions(&self) -> &[Region] {
        &self.regions
    }

    /// Integer quantity forecast for a (product, region) pair.
    ///
    /// There is no bounds checking on the product id; any value is encoded
    /// as-is. An untrained region is an error.
    pub fn predict(&self, product: ProductId, region: Region) -> Result<i64, EncodeError> {
        let position = self
            .regions
            .iter()
            .position(|&r| r == region)
            .ok_or(EncodeError::UntrainedRegion(region))?;
        let features = encode(self.regions.len(), position, product);
        Ok(self.model.predict(&features) as i64)
    }
}

/// Feature layout: [product_id, onehot(regions[1]), onehot(regions[2]), ...].
/// The baseline region (position 0) carries no indicator column.
fn encode(width: usize, position: usize, product: ProductId) -> Vec<f64> {
    let mut features = vec![0.0; width];
    features[0] = f64::from(product.0);
    if position > 0 {
        features[position] = 1.0;
    }
    features
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn record(product: u32, region: Region, quantity: u32) -> SalesRecord {
        SalesRecord {
            date: date(2020, 1, 1),
            product: ProductId(product),
            region,
            quantity_sold: quantity,
        }
    }

    #[test]
    fn test_fit_recovers_linear_demand() {
        // quantity = 2 * product + 10 for North, +5 more for South
        let mut records = Vec::new();
        for product in 1..=20 {
            records.push(record(product, Region::North, 2 * product + 10));
            records.push(record(product, Region::South, 2 * product + 15));
        }
        let model = DemandModel::fit(&records).unwrap();

        // The forecast truncates toward zero, so an exact fit may land one
        // unit below the analytic value.
        let north = model.predict(ProductId(10), Region::North).unwrap();
        let south = model.predict(ProductId(10), Region::South).unwrap();
        assert!((29..=30).contains(&north), "north forecast was {north}");
        assert!((34..=35).contains(&south), "south forecast was {south}");
    }

    #[test]
    fn test_untrained_region_is_an_error() {
        let records: Vec<SalesRecord> = (1..=10)
            .map(|p| record(p, Region::North, 3 * p))
            .chain((1..=10).map(|p| record(p, Region::East, 3 * p + 1)))
            .collect();
        let model = DemandModel::fit(&records).unwrap();

        assert_eq!(
            model.predict(ProductId(5), Region::West),
            Err(EncodeError::UntrainedRegion(Region::West))
        );
    }

    #[test]
    fn test_empty_training_set() {
        assert_eq!(
            DemandModel::fit(&[]).unwrap_err(),
            RegressionError::EmptyTrainingSet
        );
    }
}
