//! Data model for the tabular merge pipeline.

pub mod format;
pub mod result;
pub mod table;

pub use format::{FileKind, SourceFile};
pub use result::{GroupOutcome, MergedGroup};
pub use table::{BaseColumns, CellValue, Row, Table};
