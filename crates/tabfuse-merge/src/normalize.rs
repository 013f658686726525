//! Column-width normalization.

use tabfuse_model::{BaseColumns, Table};

/// Align every table to the group's base width.
///
/// Fully-blank rows are removed first; a table left with no rows is dropped
/// entirely. Surviving rows are truncated or padded with missing cells to
/// exactly the base width. Columns are positional, so realignment is purely
/// a width operation. Relative table order is preserved.
pub fn normalize(tables: Vec<Table>, base: BaseColumns) -> Vec<Table> {
    let width = base.width();
    let mut normalized = Vec::with_capacity(tables.len());
    for mut table in tables {
        table.drop_blank_rows();
        if table.is_empty() {
            continue;
        }
        table.resize_rows(width);
        normalized.push(table);
    }
    normalized
}
