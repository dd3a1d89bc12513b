//! Real-time monitoring alerts
//!
//! Evaluates four independent threshold rules against the aggregated sales
//! for a product/region, the economic indicator on a requested date, and one
//! sampled supplier. The supplier sample is drawn per call from the rng the
//! caller provides; pass a seeded rng for reproducible snapshots.

use jiff::civil::Date;
use rand::Rng;

use crate::dataset::Dataset;
use crate::error::MonitorError;
use crate::model::{ProductId, Region, SupplierRecord};

/// Threshold configuration for the four alert rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// Alert when total quantity sold falls below this
    pub low_sales: u64,
    /// Alert when the economic indicator rises above this
    pub high_economic_indicator: f64,
    /// Alert when the sampled supplier's reliability falls below this
    pub low_reliability: f64,
    /// Alert when the sampled supplier's cost-effectiveness falls below this
    pub low_cost_effectiveness: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_sales: 50,
            high_economic_indicator: 1.2,
            low_reliability: 0.8,
            low_cost_effectiveness: 0.5,
        }
    }
}

/// One of the four alert conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    LowSales,
    HighEconomicIndicator,
    LowSupplierReliability,
    HighSupplierCost,
}

impl AlertKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::LowSales => "Low sales volume",
            AlertKind::HighEconomicIndicator => "High economic indicator",
            AlertKind::LowSupplierReliability => "Low supplier reliability",
            AlertKind::HighSupplierCost => "High supplier cost",
        }
    }
}

/// Metrics and alerts assembled for one monitoring request
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSnapshot {
    pub product: ProductId,
    pub region: Region,
    pub date: Date,
    pub total_sales: u64,
    pub economic_indicator: f64,
    pub supplier: SupplierRecord,
    /// Alerts whose threshold condition held, in declaration order
    pub alerts: Vec<AlertKind>,
}

/// Assemble a monitoring snapshot for a product/region on a given date.
///
/// Each alert fires iff its threshold condition holds for the sampled
/// inputs. A date with no recorded external factors is an error, as is an
/// empty supplier table.
pub fn monitor<R: Rng + ?Sized>(
    data: &Dataset,
    product: ProductId,
    region: Region,
    date: Date,
    thresholds: &AlertThresholds,
    rng: &mut R,
) -> Result<MonitorSnapshot, MonitorError> {
    let total_sales = data.total_quantity_sold(product, region);
    let economic_indicator = data
        .economic_indicator_on(date)
        .ok_or(MonitorError::IndicatorNotFound(date))?;
    let supplier = data
        .sample_supplier(rng)
        .ok_or(MonitorError::NoSuppliers)?
        .clone();

    let mut alerts = Vec::new();
    if total_sales < thresholds.low_sales {
        alerts.push(AlertKind::LowSales);
    }
    if economic_indicator > thresholds.high_economic_indicator {
        alerts.push(AlertKind::HighEconomicIndicator);
    }
    if supplier.reliability < thresholds.low_reliability {
        alerts.push(AlertKind::LowSupplierReliability);
    }
    if supplier.cost_effectiveness < thresholds.low_cost_effectiveness {
        alerts.push(AlertKind::HighSupplierCost);
    }

    Ok(MonitorSnapshot {
        product,
        region,
        date,
        total_sales,
        economic_indicator,
        supplier,
        alerts,
    })
}
