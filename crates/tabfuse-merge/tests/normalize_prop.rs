//! Property tests for width normalization.

use proptest::prelude::*;

use tabfuse_merge::normalize;
use tabfuse_model::{BaseColumns, CellValue, Table};

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Missing),
        "[a-z]{1,4}".prop_map(CellValue::Text),
        (-1000.0f64..1000.0).prop_map(CellValue::Number),
    ]
}

fn rows() -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..8)
}

fn is_blank(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_missing)
}

proptest! {
    #[test]
    fn every_normalized_row_has_the_base_width(
        tables in prop::collection::vec(rows(), 0..4),
        width in 1usize..5,
    ) {
        let base = BaseColumns::new(width).expect("nonzero width");
        let input: Vec<Table> = tables.iter().cloned().map(Table::new).collect();
        let normalized = normalize(input, base);
        for table in &normalized {
            prop_assert!(!table.is_empty());
            prop_assert!(table.rows.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn row_counts_add_up_minus_blanks(
        tables in prop::collection::vec(rows(), 0..4),
        width in 1usize..5,
    ) {
        let base = BaseColumns::new(width).expect("nonzero width");
        let expected: usize = tables
            .iter()
            .map(|rows| rows.iter().filter(|row| !is_blank(row)).count())
            .sum();
        let input: Vec<Table> = tables.iter().cloned().map(Table::new).collect();
        let total: usize = normalize(input, base)
            .iter()
            .map(Table::row_count)
            .sum();
        prop_assert_eq!(total, expected);
    }
}
