//! XLSX serialization.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tabfuse_model::{CellValue, Table};

use crate::error::Result;

/// Name of the single worksheet in merged workbooks.
pub const SHEET_NAME: &str = "Sheet1";

/// Serialize a table to XLSX bytes on a single worksheet.
///
/// No separate header row is written. When `skip_rows > 0`, the row at
/// position `skip_rows` (1-indexed) is the last row of the preserved header
/// block and gets bold emphasis across all columns. Styling is best-effort:
/// a failure there is logged and the workbook is produced without emphasis.
pub fn encode_workbook(table: &Table, skip_rows: usize) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_index, row) in table.rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_index as u32, col_index as u16, cell)?;
        }
    }

    if skip_rows > 0 {
        let emphasis = Format::new().set_bold();
        if let Err(error) = worksheet.set_row_format(skip_rows as u32 - 1, &emphasis) {
            tracing::warn!(
                row = skip_rows,
                %error,
                "header emphasis failed; writing workbook without styling"
            );
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Text(value) => {
            worksheet.write_string(row, col, value.as_str())?;
        }
        CellValue::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        CellValue::Missing => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn produces_a_zip_container() {
        let table = Table::new(vec![vec![text("a"), CellValue::Number(1.0)]]);
        let bytes = encode_workbook(&table, 0).expect("encode");
        // xlsx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn emphasis_row_beyond_table_is_not_fatal() {
        let table = Table::new(vec![vec![text("only")]]);
        let bytes = encode_workbook(&table, 3).expect("encode");
        assert!(!bytes.is_empty());
    }
}
