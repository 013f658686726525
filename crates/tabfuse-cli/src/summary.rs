use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabfuse_cli::pipeline::{GroupReport, GroupStatus, RunResult};

pub fn print_summary(result: &RunResult) {
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_dir.display());
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    println!("Skip rows: {}", result.skip_rows);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Files"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Output"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for group in &result.groups {
        table.add_row(vec![
            Cell::new(&group.format)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(group.files.len()),
            count_cell(group.rows, group.status),
            count_cell(group.columns, group.status),
            output_cell(group),
            status_cell(group.status),
        ]);
    }
    println!("{table}");

    for group in &result.groups {
        print_group_detail(group);
    }

    let failures: Vec<&GroupReport> = result
        .groups
        .iter()
        .filter(|group| group.status == GroupStatus::Failed)
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for group in failures {
            let detail = group.message.as_deref().unwrap_or("unknown failure");
            eprintln!("- {}: {detail}", group.format);
        }
    }
}

fn print_group_detail(group: &GroupReport) {
    match group.status {
        GroupStatus::Ok => {}
        GroupStatus::Empty => {
            if let Some(message) = &group.message {
                println!();
                println!("{}: {message}", group.format);
            }
            return;
        }
        GroupStatus::Failed => return,
    }
    if let Some(last_header_row) = &group.last_header_row {
        println!();
        println!("{} last header row: {}", group.format, last_header_row.join(" | "));
    }
    if group.preview.is_empty() {
        return;
    }
    println!();
    println!("{} preview (first {} rows):", group.format, group.preview.len());
    let mut table = Table::new();
    table.set_header((0..group.columns).map(|index| header_cell(&index.to_string())));
    apply_table_style(&mut table);
    for row in &group.preview {
        table.add_row(row.clone());
    }
    println!("{table}");
}

fn output_cell(group: &GroupReport) -> Cell {
    match &group.output_path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn status_cell(status: GroupStatus) -> Cell {
    match status {
        GroupStatus::Ok => Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        GroupStatus::Empty => Cell::new("EMPTY").fg(Color::Yellow),
        GroupStatus::Failed => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(value: usize, status: GroupStatus) -> Cell {
    if status == GroupStatus::Ok {
        Cell::new(value)
    } else {
        dim_cell("-")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
