//! Deterministic, timestamped output file names.

use chrono::{Local, NaiveDateTime};
use tabfuse_model::FileKind;

/// Prefix carried by every merged output file.
pub const OUTPUT_PREFIX: &str = "合并结果_";

/// Second-resolution local timestamp embedded in the name. Collisions across
/// rapid successive invocations are an accepted limitation.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Output name for a merge of `file_count` files, stamped with the current
/// local time.
pub fn output_file_name(file_count: usize, kind: FileKind, skip_rows: usize) -> String {
    output_file_name_at(file_count, kind, skip_rows, Local::now().naive_local())
}

/// Output name with an explicit timestamp.
pub fn output_file_name_at(
    file_count: usize,
    kind: FileKind,
    skip_rows: usize,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{OUTPUT_PREFIX}{file_count}个{}文件_跳过{skip_rows}行_{}.{}",
        kind.display_name(),
        timestamp.format(TIMESTAMP_FORMAT),
        kind.extension(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .expect("date")
            .and_hms_opt(9, 30, 5)
            .expect("time")
    }

    #[test]
    fn name_is_deterministic_for_a_fixed_timestamp() {
        let name = output_file_name_at(3, FileKind::Csv, 1, stamp());
        assert_eq!(name, "合并结果_3个CSV文件_跳过1行_20260806_093005.csv");
    }

    #[test]
    fn excel_names_use_the_display_name_and_extension() {
        let name = output_file_name_at(2, FileKind::Excel, 0, stamp());
        assert_eq!(name, "合并结果_2个Excel文件_跳过0行_20260806_093005.xlsx");
    }
}
