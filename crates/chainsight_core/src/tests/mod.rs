//! Integration tests for the chainsight analytics core
//!
//! Tests are organized by topic:
//! - `generator` - Synthetic dataset generation properties
//! - `savings` - Cost-savings estimation over a fitted demand model
//! - `negotiation` - Supplier negotiation clamps
//! - `monitoring` - Alert threshold rules
//! - `evaluation` - Hold-out demand model evaluation
//! - `storage` - CSV round trips and missing-file errors

mod generator;
mod monitoring;
