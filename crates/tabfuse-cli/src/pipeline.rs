//! The CLI merge run: load inputs, merge, write outputs, summarize.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info};

use tabfuse_merge::{MergeOptions, group_by_kind, merge_groups};
use tabfuse_model::{CellValue, GroupOutcome, SourceFile};

/// Result of one merge run.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub skip_rows: usize,
    pub dry_run: bool,
    pub groups: Vec<GroupReport>,
    pub has_errors: bool,
}

/// Per-format-group report.
#[derive(Debug, Serialize)]
pub struct GroupReport {
    /// Format display name ("CSV", "Excel").
    pub format: String,
    pub status: GroupStatus,
    /// Empty-group message or failure detail.
    pub message: Option<String>,
    /// Where the merged output was (or would be) written.
    pub output_path: Option<PathBuf>,
    /// Merged body row count, excluding the preserved header block.
    pub rows: usize,
    /// Canonical column count.
    pub columns: usize,
    /// Contributing files, in merge order.
    pub files: Vec<String>,
    /// Last row of the preserved header block, rendered for display.
    pub last_header_row: Option<Vec<String>>,
    /// Leading rows of the final table, rendered for display.
    pub preview: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Ok,
    Empty,
    Failed,
}

/// Read the input files, merge per format group, and write one output file
/// per merged group into `output_dir` (unless `dry_run`).
pub fn run_merge(
    paths: &[PathBuf],
    skip_rows: usize,
    output_dir: &Path,
    dry_run: bool,
) -> Result<RunResult> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .with_context(|| format!("invalid file name: {}", path.display()))?
            .to_string();
        let content =
            fs::read(path).with_context(|| format!("read input {}", path.display()))?;
        debug!(file = %name, bytes = content.len(), "loaded input");
        sources.push(SourceFile::new(name, content));
    }

    let groups = group_by_kind(sources);
    if groups.is_empty() {
        bail!("no mergeable CSV or Excel files among the inputs");
    }

    let options = MergeOptions::with_skip_rows(skip_rows);
    let results = merge_groups(&groups, &options);

    let mut reports = Vec::new();
    let mut has_errors = false;
    for (kind, outcome) in results {
        let report = match outcome {
            Ok(GroupOutcome::Merged(group)) => {
                let output_path = output_dir.join(&group.file_name);
                if !dry_run {
                    fs::create_dir_all(output_dir).with_context(|| {
                        format!("create output directory {}", output_dir.display())
                    })?;
                    fs::write(&output_path, &group.bytes)
                        .with_context(|| format!("write output {}", output_path.display()))?;
                    info!(path = %output_path.display(), rows = group.rows, "wrote merged output");
                }
                GroupReport {
                    format: kind.display_name().to_string(),
                    status: GroupStatus::Ok,
                    message: None,
                    output_path: Some(output_path),
                    rows: group.rows,
                    columns: group.base_columns,
                    files: group.files,
                    last_header_row: group.last_header_row.as_deref().map(render_row),
                    preview: group.preview.rows.iter().map(|row| render_row(row)).collect(),
                }
            }
            Ok(GroupOutcome::Empty { message }) => GroupReport {
                format: kind.display_name().to_string(),
                status: GroupStatus::Empty,
                message: Some(message),
                output_path: None,
                rows: 0,
                columns: 0,
                files: sorted_names(&groups[&kind]),
                last_header_row: None,
                preview: Vec::new(),
            },
            Err(error) => {
                has_errors = true;
                GroupReport {
                    format: kind.display_name().to_string(),
                    status: GroupStatus::Failed,
                    message: Some(error.to_string()),
                    output_path: None,
                    rows: 0,
                    columns: 0,
                    files: sorted_names(&groups[&kind]),
                    last_header_row: None,
                    preview: Vec::new(),
                }
            }
        };
        reports.push(report);
    }

    Ok(RunResult {
        output_dir: output_dir.to_path_buf(),
        skip_rows,
        dry_run,
        groups: reports,
        has_errors,
    })
}

fn render_row(row: &[CellValue]) -> Vec<String> {
    row.iter().map(CellValue::render).collect()
}

fn sorted_names(files: &[SourceFile]) -> Vec<String> {
    let mut names: Vec<String> = files.iter().map(|file| file.name.clone()).collect();
    names.sort();
    names
}
