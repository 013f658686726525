//! Error types for input decoding.

use thiserror::Error;

/// Errors that can occur while decoding an input file into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension not recognized by the decoder.
    #[error("unsupported file format: {name}")]
    UnsupportedFormat { name: String },

    /// No candidate encoding produced a parsable CSV table. Carries the
    /// last attempted encoding and its underlying failure.
    #[error("no supported encoding could read {name}; last error ({encoding}): {message}")]
    Decode {
        name: String,
        encoding: &'static str,
        message: String,
    },

    /// Workbook container could not be opened or parsed.
    #[error("failed to read workbook {name}: {message}")]
    Workbook { name: String, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook {name} has no worksheets")]
    MissingSheet { name: String },
}

impl IngestError {
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    pub fn workbook(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, IngestError>;
