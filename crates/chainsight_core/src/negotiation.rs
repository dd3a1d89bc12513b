//! Supplier negotiation estimation
//!
//! Two independent single-feature regressions predict reliability and
//! cost-effectiveness from the supplier id alone, then fixed negotiation
//! concessions are applied. The supplier id is an arbitrary label, so the
//! model is illustrative rather than predictive; the clamps on the outputs
//! are the contract that matters.

use crate::error::RegressionError;
use crate::model::{SupplierId, SupplierRecord};
use crate::regression::SimpleRegression;

/// Reliability improvement assumed to be negotiable
pub const RELIABILITY_CONCESSION: f64 = 0.1;
/// Cost-effectiveness given up in exchange
pub const COST_EFFECTIVENESS_CONCESSION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegotiationModel {
    reliability: SimpleRegression,
    cost_effectiveness: SimpleRegression,
}

/// Predicted and negotiated scores for one supplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegotiationOutcome {
    pub supplier: SupplierId,
    pub predicted_reliability: f64,
    pub predicted_cost_effectiveness: f64,
    /// Predicted reliability plus the concession, clamped to [0, 1]
    pub negotiated_reliability: f64,
    /// Predicted cost-effectiveness minus the concession, floored at 0
    pub negotiated_cost_effectiveness: f64,
}

impl NegotiationModel {
    /// Fit both score regressions from the supplier table
    pub fn fit(suppliers: &[SupplierRecord]) -> Result<Self, RegressionError> {
        let reliability_points: Vec<(f64, f64)> = suppliers
            .iter()
            .map(|s| (f64::from(s.id.0), s.reliability))
            .collect();
        let cost_points: Vec<(f64, f64)> = suppliers
            .iter()
            .map(|s| (f64::from(s.id.0), s.cost_effectiveness))
            .collect();

        Ok(Self {
            reliability: SimpleRegression::fit(&reliability_points)?,
            cost_effectiveness: SimpleRegression::fit(&cost_points)?,
        })
    }

    /// Simulate a negotiation round with the given supplier
    #[must_use]
    pub fn negotiate(&self, supplier: SupplierId) -> NegotiationOutcome {
        let predicted_reliability = self.reliability.predict(f64::from(supplier.0));
        let predicted_cost_effectiveness = self.cost_effectiveness.predict(f64::from(supplier.0));

        NegotiationOutcome {
            supplier,
            predicted_reliability,
            predicted_cost_effectiveness,
            negotiated_reliability: (predicted_reliability + RELIABILITY_CONCESSION)
                .clamp(0.0, 1.0),
            negotiated_cost_effectiveness: (predicted_cost_effectiveness
                - COST_EFFECTIVENESS_CONCESSION)
                .max(0.0),
        }
    }
}
