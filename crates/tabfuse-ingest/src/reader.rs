//! Format dispatch and the three extraction modes.

use tabfuse_model::{FileKind, Table};

use crate::delimited::read_csv;
use crate::encoding::TextEncoding;
use crate::error::{IngestError, Result};
use crate::sheet::read_workbook;

/// Decode one input file into a table, skipping `skip_rows` leading rows and
/// optionally capping the number of rows read.
///
/// Dispatches on the file name's extension; anything unrecognized is an
/// `UnsupportedFormat` error.
pub fn read_table(
    name: &str,
    content: &[u8],
    skip_rows: usize,
    row_limit: Option<usize>,
) -> Result<Table> {
    match FileKind::from_name(name) {
        Some(FileKind::Csv) => read_csv(
            name,
            content,
            skip_rows,
            row_limit,
            &TextEncoding::CANDIDATES,
        ),
        Some(FileKind::Excel) => read_workbook(name, content, skip_rows, row_limit),
        None => Err(IngestError::unsupported(name)),
    }
}

/// Probe mode: only the first data row after the skip, to measure the
/// group's column count.
pub fn read_probe(name: &str, content: &[u8], skip_rows: usize) -> Result<Table> {
    read_table(name, content, skip_rows, Some(1))
}

/// Header mode: the first `skip_rows` rows with no skip applied. With
/// `skip_rows = 0` there is no header region to preserve, so the decoder is
/// not invoked at all.
pub fn read_header(name: &str, content: &[u8], skip_rows: usize) -> Result<Table> {
    if skip_rows == 0 {
        return Ok(Table::default());
    }
    read_table(name, content, 0, Some(skip_rows))
}

/// Body mode: every row after the skip.
pub fn read_body(name: &str, content: &[u8], skip_rows: usize) -> Result<Table> {
    read_table(name, content, skip_rows, None)
}
