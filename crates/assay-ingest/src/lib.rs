//! Measurement data ingestion.
//!
//! Loads columns from CSV files as [`assay_normalize::RawValue`]s so they can
//! be normalized and compared.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use assay_ingest::read_columns;
//!
//! let columns = read_columns(Path::new("results.csv"), &["predicted", "measured"])?;
//! ```

mod columns;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Column Reading ===
pub use columns::{
    ColumnData, CsvHeaders, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    read_column, read_columns, read_csv_headers,
};
