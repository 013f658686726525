//! CSV decoding with multi-encoding retry.

use csv::ReaderBuilder;
use tabfuse_model::{CellValue, Table};

use crate::encoding::TextEncoding;
use crate::error::{IngestError, Result};

/// Decode CSV bytes, retrying each candidate encoding in order.
///
/// An attempt covers both the text decode and the CSV parse: failure of
/// either moves on to the next candidate. The first attempt that yields a
/// table wins; exhausting the list reports the last attempt's failure.
pub fn read_csv(
    name: &str,
    content: &[u8],
    skip_rows: usize,
    row_limit: Option<usize>,
    candidates: &[TextEncoding],
) -> Result<Table> {
    let mut last_failure: Option<(TextEncoding, String)> = None;
    for &candidate in candidates {
        let Some(text) = candidate.decode(content) else {
            last_failure = Some((candidate, "malformed byte sequence".to_string()));
            continue;
        };
        match parse_rows(&text, skip_rows, row_limit) {
            Ok(table) => {
                tracing::debug!(
                    file = name,
                    encoding = candidate.label(),
                    rows = table.row_count(),
                    "decoded csv"
                );
                return Ok(table);
            }
            Err(error) => last_failure = Some((candidate, error.to_string())),
        }
    }
    let (encoding, message) = match last_failure {
        Some((candidate, message)) => (candidate.label(), message),
        None => ("<none>", "no candidate encodings configured".to_string()),
    };
    Err(IngestError::Decode {
        name: name.to_string(),
        encoding,
        message,
    })
}

fn parse_rows(
    text: &str,
    skip_rows: usize,
    row_limit: Option<usize>,
) -> std::result::Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index < skip_rows {
            continue;
        }
        if row_limit.is_some_and(|limit| rows.len() >= limit) {
            break;
        }
        rows.push(record.iter().map(cell_from_field).collect());
    }
    Ok(Table::new(rows))
}

/// Empty fields carry no value; everything else stays verbatim text.
fn cell_from_field(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(field.to_string())
    }
}
