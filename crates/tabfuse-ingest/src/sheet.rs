//! XLSX workbook decoding.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tabfuse_model::{CellValue, Table};

use crate::error::{IngestError, Result};

/// Read the first worksheet of an XLSX workbook held in memory.
///
/// Binary container, so no encoding retry: open failures surface directly.
pub fn read_workbook(
    name: &str,
    content: &[u8],
    skip_rows: usize,
    row_limit: Option<usize>,
) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(content))
        .map_err(|error| IngestError::workbook(name, error.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::MissingSheet {
            name: name.to_string(),
        })?
        .map_err(|error| IngestError::workbook(name, error.to_string()))?;

    let mut rows = Vec::new();
    for row in range.rows().skip(skip_rows) {
        if row_limit.is_some_and(|limit| rows.len() >= limit) {
            break;
        }
        rows.push(row.iter().map(cell_from_data).collect());
    }
    tracing::debug!(file = name, rows = rows.len(), "decoded workbook");
    Ok(Table::new(rows))
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::String(value) if value.is_empty() => CellValue::Missing,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
        Data::Error(value) => CellValue::Text(value.to_string()),
    }
}
