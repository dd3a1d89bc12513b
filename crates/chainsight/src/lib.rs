//! Supply-chain analytics dashboards
//!
//! Terminal front end for the chainsight analytics core. Three dashboards
//! share one application shell:
//! - Real-time monitoring (threshold alerts for a product/region)
//! - Inventory management (holding-cost savings from demand forecasts)
//! - Supplier negotiation (predicted scores with fixed concessions)
//!
//! Each dashboard is a single form; every callback runs to completion on the
//! event loop thread before the next key event is dispatched.

pub mod app;
pub mod components;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
