//! Inventory cost-savings estimation
//!
//! Compares the holding cost of the current inventory position against an
//! optimized position capped at the forecast demand over the lead time.
//! The holding cost per unit is 1, so costs are expressed directly in units.

use crate::demand::DemandModel;
use crate::error::EncodeError;
use crate::model::{ProductId, Region};

/// Breakdown of a single cost-savings estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsEstimate {
    /// Forecast quantity sold per period for the requested product/region
    pub forecast: i64,
    /// Holding cost of the current inventory position
    pub holding_cost_current: i64,
    /// Holding cost after capping inventory at forecast demand over the lead time
    pub holding_cost_optimized: i64,
    /// Difference between the two holding costs, never negative
    pub savings: i64,
}

/// Estimate the holding-cost savings of right-sizing the inventory position.
///
/// The demand forecast is computed once and reused for both sides of the
/// comparison. Inputs are taken as-is; there is no negative-input validation
/// and no currency typing.
pub fn estimate_savings(
    model: &DemandModel,
    product: ProductId,
    region: Region,
    current_inventory: i64,
    lead_time: i64,
) -> Result<SavingsEstimate, EncodeError> {
    let forecast = model.predict(product, region)?;

    let holding_cost_current = current_inventory;
    let holding_cost_optimized = current_inventory.min(forecast * lead_time);

    Ok(SavingsEstimate {
        forecast,
        holding_cost_current,
        holding_cost_optimized,
        savings: holding_cost_current - holding_cost_optimized,
    })
}
