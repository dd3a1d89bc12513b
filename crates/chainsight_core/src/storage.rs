//! Flat-file storage for the generated datasets
//!
//! Directory structure:
//! ~/.chainsight/
//!   historical_sales_data.csv
//!   external_factors_data.csv
//!   supplier_data.csv
//!
//! The files are written once by the generator and read repeatedly by the
//! dashboards; a missing file is an error, there are no fallback values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dataset::Dataset;
use crate::model::{ExternalFactorRecord, SalesRecord, SupplierRecord};

pub const SALES_FILE: &str = "historical_sales_data.csv";
pub const EXTERNAL_FACTORS_FILE: &str = "external_factors_data.csv";
pub const SUPPLIERS_FILE: &str = "supplier_data.csv";

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding the three CSV tables
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sales_path(&self) -> PathBuf {
        self.root.join(SALES_FILE)
    }

    fn external_factors_path(&self) -> PathBuf {
        self.root.join(EXTERNAL_FACTORS_FILE)
    }

    fn suppliers_path(&self) -> PathBuf {
        self.root.join(SUPPLIERS_FILE)
    }

    /// Check whether all three data files are present
    #[must_use]
    pub fn exists(&self) -> bool {
        self.sales_path().exists()
            && self.external_factors_path().exists()
            && self.suppliers_path().exists()
    }

    /// Create the data directory if needed
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create {:?}: {}", self.root, e)))
    }

    /// Write all three tables, replacing any previous files
    pub fn save(&self, dataset: &Dataset) -> Result<(), StorageError> {
        self.init()?;
        write_table(&self.sales_path(), dataset.sales())?;
        write_table(&self.external_factors_path(), dataset.external_factors())?;
        write_table(&self.suppliers_path(), dataset.suppliers())?;
        Ok(())
    }

    /// Load all three tables into a dataset
    pub fn load(&self) -> Result<Dataset, StorageError> {
        let sales: Vec<SalesRecord> = read_table(&self.sales_path())?;
        let external_factors: Vec<ExternalFactorRecord> =
            read_table(&self.external_factors_path())?;
        let suppliers: Vec<SupplierRecord> = read_table(&self.suppliers_path())?;
        Ok(Dataset::new(sales, external_factors, suppliers))
    }
}

fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| StorageError::Io(format!("Failed to create {:?}: {}", path, e)))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| StorageError::Serialize(format!("Failed to write {:?}: {}", path, e)))?;
    }
    writer
        .flush()
        .map_err(|e| StorageError::Io(format!("Failed to flush {:?}: {}", path, e)))?;
    Ok(())
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| StorageError::Io(format!("Failed to open {:?}: {}", path, e)))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row =
            result.map_err(|e| StorageError::Parse(format!("Failed to parse {:?}: {}", path, e)))?;
        rows.push(row);
    }
    Ok(rows)
}
