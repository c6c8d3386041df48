//! Error types for template assembly

use thiserror::Error;

/// Errors that can occur while adapting input sheets or assembling output
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Error from the workbook/CSV layer
    #[error(transparent)]
    Sheet(#[from] sheet_io::SheetError),

    /// A sheet does not have the shape its adapter requires
    #[error("Sheet '{sheet}' has unexpected shape: {detail}")]
    SheetShape { sheet: String, detail: String },

    /// A required column is missing
    #[error("Column '{column}' not found in {table}")]
    ColumnNotFound { table: String, column: String },

    /// A pre-filled column name matches more than one template column
    #[error("Column '{column}' appears {count} times in the template header")]
    ColumnCollision { column: String, count: usize },
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
