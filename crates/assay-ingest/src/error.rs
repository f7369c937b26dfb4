//! Error types for measurement data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during data ingestion operations.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}{}: {source}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row missing or blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === Column Errors ===
    /// Requested column not present in the header.
    #[error("column '{column}' not found in {path} (available: {available})")]
    ColumnNotFound {
        column: String,
        path: PathBuf,
        available: String,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

impl IngestError {
    /// Wrap a `csv` error, keeping the line number when the reader reports one.
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        let line = source.position().map(csv::Position::line);
        Self::CsvParse {
            path: path.to_path_buf(),
            line,
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
