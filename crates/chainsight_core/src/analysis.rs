//! Demand model evaluation
//!
//! Holds out a random fraction of the sales history, fits the demand model
//! on the remainder, and reports the held-out mean squared error. The split
//! is seeded so evaluation runs are reproducible.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::demand::DemandModel;
use crate::error::RegressionError;
use crate::model::SalesRecord;
use crate::regression::mean_squared_error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationConfig {
    /// Fraction of records held out for testing, in (0, 1)
    pub test_fraction: f64,
    /// Seed for the shuffle that assigns records to the split
    pub seed: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Outcome of one evaluation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    pub train_count: usize,
    pub test_count: usize,
    /// Mean squared error of the fitted model on the held-out records
    pub mse: f64,
    /// Mean squared error of always predicting the training mean, for scale
    pub baseline_mse: f64,
}

impl EvaluationReport {
    /// Root mean squared error, in quantity units
    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }
}

/// Shuffle, split, fit and score the demand model on historical sales.
pub fn evaluate_demand_model(
    records: &[SalesRecord],
    config: &EvaluationConfig,
) -> Result<EvaluationReport, RegressionError> {
    if records.is_empty() {
        return Err(RegressionError::EmptyTrainingSet);
    }

    let mut shuffled: Vec<&SalesRecord> = records.iter().collect();
    let mut rng = SmallRng::seed_from_u64(config.seed);
    shuffled.shuffle(&mut rng);

    let test_count = ((records.len() as f64) * config.test_fraction).round() as usize;
    let test_count = test_count.min(records.len().saturating_sub(1));
    let (test, train) = shuffled.split_at(test_count);

    let train_records: Vec<SalesRecord> = train.iter().map(|&&r| r).collect();
    let model = DemandModel::fit(&train_records)?;

    let train_mean = train_records
        .iter()
        .map(|r| f64::from(r.quantity_sold))
        .sum::<f64>()
        / train_records.len() as f64;

    let mut actual = Vec::with_capacity(test.len());
    let mut predicted = Vec::with_capacity(test.len());
    let mut baseline = Vec::with_capacity(test.len());
    for record in test {
        // Skip test records whose region never appeared in training; the
        // model has no encoding for them.
        let Ok(forecast) = model.predict(record.product, record.region) else {
            continue;
        };
        actual.push(f64::from(record.quantity_sold));
        predicted.push(forecast as f64);
        baseline.push(train_mean);
    }

    Ok(EvaluationReport {
        train_count: train_records.len(),
        test_count: actual.len(),
        mse: mean_squared_error(&actual, &predicted),
        baseline_mse: mean_squared_error(&actual, &baseline),
    })
}
