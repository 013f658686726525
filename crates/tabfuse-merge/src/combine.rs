//! Header block reattachment.

use tabfuse_model::{BaseColumns, Table};

/// Prepend the preserved header block to the merged body.
///
/// A non-empty header is width-aligned to the base (same truncate/pad policy
/// as normalization) and its rows come first; an empty header returns the
/// body unchanged.
pub fn combine(header: Table, body: Table, base: BaseColumns) -> Table {
    if header.is_empty() {
        return body;
    }
    let mut combined = header;
    combined.resize_rows(base.width());
    combined.append(body);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabfuse_model::CellValue;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn header_rows_come_first_at_base_width() {
        let header = Table::new(vec![vec![text("h1"), text("h2"), text("h3")]]);
        let body = Table::new(vec![vec![text("a"), text("b")]]);
        let combined = combine(header, body, BaseColumns::new(2).expect("base"));
        assert_eq!(combined.row_count(), 2);
        assert_eq!(combined.rows[0], vec![text("h1"), text("h2")]);
        assert_eq!(combined.rows[1], vec![text("a"), text("b")]);
    }

    #[test]
    fn empty_header_returns_the_body_unchanged() {
        let body = Table::new(vec![vec![text("a")]]);
        let combined = combine(Table::default(), body.clone(), BaseColumns::new(1).expect("base"));
        assert_eq!(combined, body);
    }

    #[test]
    fn short_header_rows_are_padded() {
        let header = Table::new(vec![vec![text("only")]]);
        let body = Table::new(vec![vec![text("a"), text("b"), text("c")]]);
        let combined = combine(header, body, BaseColumns::new(3).expect("base"));
        assert_eq!(
            combined.rows[0],
            vec![text("only"), CellValue::Missing, CellValue::Missing]
        );
    }
}
