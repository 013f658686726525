//! Merge orchestration: one invocation merges every format group
//! independently.

use std::collections::BTreeMap;

use tracing::{info, info_span};

use tabfuse_ingest::{read_body, read_header, read_probe};
use tabfuse_model::{BaseColumns, FileKind, GroupOutcome, MergedGroup, SourceFile, Table};
use tabfuse_output::{encode, output_file_name};

use crate::combine::combine;
use crate::error::{MergeError, Result};
use crate::normalize::normalize;

/// Rows shown in the result preview.
pub const PREVIEW_ROWS: usize = 10;

/// Per-invocation merge settings.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Leading rows of each input treated as header/title rather than data.
    pub skip_rows: usize,
    /// Preview length captured in each group result.
    pub preview_rows: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            skip_rows: 0,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

impl MergeOptions {
    pub fn with_skip_rows(skip_rows: usize) -> Self {
        Self {
            skip_rows,
            ..Self::default()
        }
    }
}

/// Group input files by recognized format.
///
/// Files with an unrecognized extension are excluded from processing; the
/// calling surface is expected to pre-filter accepted types, so this is not
/// an error.
pub fn group_by_kind(files: Vec<SourceFile>) -> BTreeMap<FileKind, Vec<SourceFile>> {
    let mut groups: BTreeMap<FileKind, Vec<SourceFile>> = BTreeMap::new();
    for file in files {
        match file.kind() {
            Some(kind) => groups.entry(kind).or_default().push(file),
            None => tracing::debug!(file = %file.name, "skipping unrecognized file type"),
        }
    }
    groups
}

/// Merge every non-empty group. Groups are independent: a failure in one is
/// recorded in its map entry and the rest keep going.
pub fn merge_groups(
    groups: &BTreeMap<FileKind, Vec<SourceFile>>,
    options: &MergeOptions,
) -> BTreeMap<FileKind, Result<GroupOutcome>> {
    let mut results = BTreeMap::new();
    for (&kind, files) in groups {
        if files.is_empty() {
            continue;
        }
        let span = info_span!("merge_group", format = %kind, files = files.len());
        let outcome = span.in_scope(|| merge_group(kind, files, options));
        match &outcome {
            Ok(GroupOutcome::Merged(group)) => {
                info!(format = %kind, rows = group.rows, columns = group.base_columns, "group merged");
            }
            Ok(GroupOutcome::Empty { .. }) => {
                info!(format = %kind, "group had no usable data");
            }
            Err(error) => {
                tracing::error!(format = %kind, %error, "group merge failed");
            }
        }
        results.insert(kind, outcome);
    }
    results
}

fn merge_group(
    kind: FileKind,
    files: &[SourceFile],
    options: &MergeOptions,
) -> Result<GroupOutcome> {
    // Name order is the canonical processing order; it determines output
    // row order.
    let mut ordered: Vec<&SourceFile> = files.iter().collect();
    ordered.sort_by(|left, right| left.name.cmp(&right.name));
    let Some(first) = ordered.first() else {
        return Ok(empty_outcome(kind));
    };

    let probe = read_probe(&first.name, &first.content, options.skip_rows)?;
    let base = match BaseColumns::from_probe(&probe) {
        Some(base) => base,
        // The first file has no measurable data row. A group that is blank
        // throughout is the empty outcome; a blank first file ahead of real
        // data cannot anchor the base width and fails the group.
        None => {
            if group_has_data(&ordered, options.skip_rows)? {
                return Err(MergeError::EmptyProbe {
                    name: first.name.clone(),
                });
            }
            return Ok(empty_outcome(kind));
        }
    };

    let header = read_header(&first.name, &first.content, options.skip_rows)?;
    // Captured at the header's original width, before base alignment.
    let last_header_row = if options.skip_rows > 0 {
        header.last_row().cloned()
    } else {
        None
    };

    let mut bodies = Vec::with_capacity(ordered.len());
    for file in &ordered {
        bodies.push(read_body(&file.name, &file.content, options.skip_rows)?);
    }

    let normalized = normalize(bodies, base);
    if normalized.is_empty() {
        return Ok(empty_outcome(kind));
    }

    let mut body = Table::default();
    for table in normalized {
        body.append(table);
    }
    let rows = body.row_count();

    let merged = combine(header, body, base);
    let bytes = encode(&merged, kind, options.skip_rows)?;
    let file_name = output_file_name(ordered.len(), kind, options.skip_rows);

    Ok(GroupOutcome::Merged(MergedGroup {
        file_name,
        bytes,
        rows,
        files: ordered.iter().map(|file| file.name.clone()).collect(),
        preview: merged.head(options.preview_rows),
        last_header_row,
        base_columns: base.width(),
    }))
}

fn group_has_data(files: &[&SourceFile], skip_rows: usize) -> Result<bool> {
    for file in files {
        let mut body = read_body(&file.name, &file.content, skip_rows)?;
        body.drop_blank_rows();
        if !body.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn empty_outcome(kind: FileKind) -> GroupOutcome {
    GroupOutcome::Empty {
        message: format!("未找到有效的 {} 数据进行合并", kind.display_name()),
    }
}
