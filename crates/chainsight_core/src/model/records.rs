//! Record types for the three synthetic tables
//!
//! All records are immutable once generated. The serde field names match the
//! column headers of the flat CSV files so the same types serve as the wire
//! schema for storage.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ProductId, Region, SupplierId};

/// One day of sales for a product in a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Date")]
    pub date: Date,
    #[serde(rename = "ProductID")]
    pub product: ProductId,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "QuantitySold")]
    pub quantity_sold: u32,
}

/// External demand factors observed on a single day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalFactorRecord {
    #[serde(rename = "Date")]
    pub date: Date,
    /// Synthetic factor scaling demand expectations, roughly around 1.0
    #[serde(rename = "EconomicIndicator")]
    pub economic_indicator: f64,
    #[serde(rename = "WeatherImpact")]
    pub weather_impact: f64,
}

/// Static supplier metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    #[serde(rename = "SupplierID")]
    pub id: SupplierId,
    #[serde(rename = "SupplierName")]
    pub name: String,
    /// Dependability score, generated within [0.7, 1.0]
    #[serde(rename = "ReliabilityScore")]
    pub reliability: f64,
    /// Pricing competitiveness score, generated within [0.5, 1.0]
    #[serde(rename = "CostEffectivenessScore")]
    pub cost_effectiveness: f64,
}
