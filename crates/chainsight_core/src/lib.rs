//! Supply-chain analytics demonstration library
//!
//! This crate provides the analytical core behind the chainsight dashboards:
//! - Synthetic dataset generation (sales, external factors, suppliers)
//! - Flat CSV storage for the generated tables
//! - Linear demand forecasting over product id and one-hot encoded region
//! - Inventory holding-cost savings estimation
//! - Supplier negotiation score estimation with fixed concessions
//! - Threshold-based monitoring alerts
//! - Hold-out evaluation of the demand model
//!
//! All data is generated once and read-only thereafter; models are fitted
//! once over the full dataset and never updated incrementally.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod dataset;
pub mod demand;
pub mod error;
pub mod generate;
pub mod inventory;
pub mod monitoring;
pub mod negotiation;
pub mod regression;
pub mod storage;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{EvaluationConfig, EvaluationReport, evaluate_demand_model};
pub use dataset::Dataset;
pub use demand::DemandModel;
pub use generate::{GeneratorConfig, generate};
pub use inventory::{SavingsEstimate, estimate_savings};
pub use monitoring::{AlertKind, AlertThresholds, MonitorSnapshot, monitor};
pub use negotiation::{NegotiationModel, NegotiationOutcome};
pub use storage::DataDirectory;
