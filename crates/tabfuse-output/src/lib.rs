//! Output encoding for the merge pipeline.
//!
//! A merged table leaves the pipeline as CSV bytes (UTF-8 with BOM) or as a
//! single-sheet XLSX workbook. Output names embed the file count, format,
//! skip setting, and a local timestamp.

pub mod delimited;
pub mod error;
pub mod naming;
pub mod workbook;

pub use delimited::encode_csv;
pub use error::{EncodeError, Result};
pub use naming::{OUTPUT_PREFIX, output_file_name, output_file_name_at};
pub use workbook::{SHEET_NAME, encode_workbook};

use tabfuse_model::{FileKind, Table};

/// Serialize a merged table in the given format.
pub fn encode(table: &Table, kind: FileKind, skip_rows: usize) -> Result<Vec<u8>> {
    match kind {
        FileKind::Csv => encode_csv(table),
        FileKind::Excel => encode_workbook(table, skip_rows),
    }
}
