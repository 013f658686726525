#![deny(unsafe_code)]

use std::fmt;

/// A single cell value carried through the merge pipeline unchanged.
///
/// The pipeline performs no type coercion: values arrive as text, number,
/// or missing and leave the same way.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Cell content rendered for text output. Missing renders empty.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => format!("{value}"),
            CellValue::Missing => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(value) => f.write_str(value),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Missing => Ok(()),
        }
    }
}

/// One row of cells.
pub type Row = Vec<CellValue>;

/// An in-memory table: ordered rows of ordered cells.
///
/// Rows may be ragged until width-normalized; columns carry no names beyond
/// their positional index.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row; zero for an empty table.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Remove rows whose every cell is missing.
    pub fn drop_blank_rows(&mut self) {
        self.rows
            .retain(|row| !row.iter().all(CellValue::is_missing));
    }

    /// Force every row to exactly `width` cells: extra trailing cells are
    /// truncated, short rows are padded with missing values.
    pub fn resize_rows(&mut self, width: usize) {
        for row in &mut self.rows {
            row.resize(width, CellValue::Missing);
        }
    }

    /// Append all rows of `other`, preserving order.
    pub fn append(&mut self, other: Table) {
        self.rows.extend(other.rows);
    }

    /// A copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    pub fn last_row(&self) -> Option<&Row> {
        self.rows.last()
    }
}

/// Canonical column count for a merge group, measured from the first data
/// row of the first (name-sorted) file. Columns are positional: the
/// identifiers are simply `0..width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColumns {
    width: usize,
}

impl BaseColumns {
    /// Returns `None` for a zero-column probe (malformed first file).
    pub fn new(width: usize) -> Option<Self> {
        if width == 0 { None } else { Some(Self { width }) }
    }

    /// Measure the probe table's first row.
    pub fn from_probe(probe: &Table) -> Option<Self> {
        Self::new(probe.rows.first().map(Vec::len).unwrap_or(0))
    }

    pub fn width(self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn drop_blank_rows_removes_fully_missing_rows() {
        let mut table = Table::new(vec![
            vec![text("a"), CellValue::Missing],
            vec![CellValue::Missing, CellValue::Missing],
            vec![CellValue::Number(1.0)],
        ]);
        table.drop_blank_rows();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec![CellValue::Number(1.0)]);
    }

    #[test]
    fn resize_rows_truncates_and_pads() {
        let mut table = Table::new(vec![
            vec![text("a"), text("b"), text("c")],
            vec![text("d")],
        ]);
        table.resize_rows(2);
        assert_eq!(table.rows[0], vec![text("a"), text("b")]);
        assert_eq!(table.rows[1], vec![text("d"), CellValue::Missing]);
    }

    #[test]
    fn width_is_widest_row() {
        let table = Table::new(vec![vec![text("a")], vec![text("b"), text("c")]]);
        assert_eq!(table.width(), 2);
        assert_eq!(Table::default().width(), 0);
    }

    #[test]
    fn base_columns_rejects_zero_width() {
        assert!(BaseColumns::new(0).is_none());
        assert_eq!(BaseColumns::new(3).map(BaseColumns::width), Some(3));
        assert!(BaseColumns::from_probe(&Table::default()).is_none());
    }

    #[test]
    fn render_is_lossless_for_text_and_empty_for_missing() {
        assert_eq!(text("值").render(), "值");
        assert_eq!(CellValue::Number(2.5).render(), "2.5");
        assert_eq!(CellValue::Missing.render(), "");
    }

    #[test]
    fn cell_value_serializes_tagged() {
        let json = serde_json::to_string(&text("x")).expect("serialize cell");
        assert!(json.contains("\"kind\":\"Text\""));
    }
}
