//! CSV serialization.

use csv::WriterBuilder;
use tabfuse_model::{CellValue, Table};

use crate::error::{EncodeError, Result};

/// Leading byte-order mark, for compatibility with common spreadsheet
/// importers.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Serialize a table to UTF-8 CSV bytes with a leading BOM.
///
/// Rows are written verbatim; the preserved header block, when present, is
/// already part of the table's leading rows, so no separate header record is
/// emitted.
pub fn encode_csv(table: &Table) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&UTF8_BOM);
    let mut writer = WriterBuilder::new().flexible(true).from_writer(buffer);
    for row in &table.rows {
        writer.write_record(row.iter().map(CellValue::render))?;
    }
    writer
        .into_inner()
        .map_err(|error| EncodeError::Flush(error.to_string()))
}
