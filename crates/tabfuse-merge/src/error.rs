//! Error types for the merge pipeline.

use thiserror::Error;

use tabfuse_ingest::IngestError;
use tabfuse_output::EncodeError;

/// Errors that can fail one format group. Other groups in the same
/// invocation are unaffected.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The probe of the group's first file found no columns.
    #[error("first data row of {name} has no columns")]
    EmptyProbe { name: String },
}

/// Result type alias for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;
