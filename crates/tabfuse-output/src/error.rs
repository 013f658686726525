//! Error types for output encoding.

use thiserror::Error;

/// Errors that can occur while serializing a merged table.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// CSV record serialization failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// CSV buffer could not be recovered from the writer.
    #[error("csv buffer flush failed: {0}")]
    Flush(String),

    /// Workbook assembly or serialization failed.
    #[error("workbook serialization failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
