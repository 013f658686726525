use crate::table::{Row, Table};

/// The product of merging one format group.
#[derive(Debug, Clone)]
pub struct MergedGroup {
    /// Suggested output file name (timestamped).
    pub file_name: String,
    /// Serialized output content.
    pub bytes: Vec<u8>,
    /// Merged body row count, excluding the preserved header block.
    pub rows: usize,
    /// Contributing file names in the order they were merged.
    pub files: Vec<String>,
    /// Leading rows of the final table, for display.
    pub preview: Table,
    /// Last row of the preserved header block, when one exists.
    pub last_header_row: Option<Row>,
    /// Canonical column count for the group.
    pub base_columns: usize,
}

/// Outcome of one format group. A group with no usable data is `Empty`
/// rather than an error.
#[derive(Debug, Clone)]
pub enum GroupOutcome {
    Merged(MergedGroup),
    Empty { message: String },
}

impl GroupOutcome {
    pub fn merged(&self) -> Option<&MergedGroup> {
        match self {
            GroupOutcome::Merged(group) => Some(group),
            GroupOutcome::Empty { .. } => None,
        }
    }
}
