mod ids;
mod records;
mod region;

pub use ids::{ProductId, SupplierId};
pub use records::{ExternalFactorRecord, SalesRecord, SupplierRecord};
pub use region::{ParseRegionError, Region};
