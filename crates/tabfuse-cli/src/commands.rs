use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use tabfuse_cli::pipeline::{self, RunResult};
use tabfuse_model::FileKind;

use crate::cli::MergeArgs;
use crate::summary::apply_table_style;

pub fn run_merge(args: &MergeArgs) -> Result<RunResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    pipeline::run_merge(&args.files, args.skip_rows, &output_dir, args.dry_run)
}

pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Extension"]);
    apply_table_style(&mut table);
    for kind in FileKind::ALL {
        table.add_row(vec![
            kind.display_name().to_string(),
            format!(".{}", kind.extension()),
        ]);
    }
    println!("{table}");
}
