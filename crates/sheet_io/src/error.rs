//! Error types for workbook reading and CSV writing

use thiserror::Error;

/// Errors that can occur while reading workbooks or writing CSV output
#[derive(Debug, Error)]
pub enum SheetError {
    /// IO error reading/writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input workbook path does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Error opening or reading a workbook
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Requested sheet is missing from the workbook
    #[error("Sheet '{sheet}' not found. Available sheets: {available:?}")]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// Error writing CSV data
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for sheet I/O operations
pub type Result<T> = std::result::Result<T, SheetError>;
