//! Integration tests for the CLI merge run.

use std::fs;
use std::path::PathBuf;

use tabfuse_cli::pipeline::{GroupStatus, run_merge};

fn write_fixture(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn merges_csv_fixtures_and_writes_the_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let inputs = vec![
        write_fixture(dir.path(), "b.csv", "h1,h2\n3,4\n"),
        write_fixture(dir.path(), "a.csv", "h1,h2\n1,2\n"),
    ];

    let result = run_merge(&inputs, 1, &out, false).expect("run merge");
    assert!(!result.has_errors);
    assert_eq!(result.groups.len(), 1);

    let group = &result.groups[0];
    assert_eq!(group.status, GroupStatus::Ok);
    assert_eq!(group.format, "CSV");
    assert_eq!(group.rows, 2);
    assert_eq!(group.columns, 2);
    assert_eq!(group.files, vec!["a.csv", "b.csv"]);
    assert_eq!(group.last_header_row.as_deref(), Some(&["h1".to_string(), "h2".to_string()][..]));

    let output_path = group.output_path.as_ref().expect("output path");
    let bytes = fs::read(output_path).expect("read output");
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let text = std::str::from_utf8(&bytes[3..]).expect("utf-8");
    assert_eq!(text, "h1,h2\n1,2\n3,4\n");
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let inputs = vec![write_fixture(dir.path(), "a.csv", "1,2\n")];

    let result = run_merge(&inputs, 0, &out, true).expect("run merge");
    assert_eq!(result.groups[0].status, GroupStatus::Ok);
    assert!(result.dry_run);
    assert!(!out.exists(), "dry run must not create the output directory");
}

#[test]
fn unrecognized_inputs_alone_are_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = vec![write_fixture(dir.path(), "notes.txt", "nothing tabular")];

    let error = run_merge(&inputs, 0, dir.path(), true).expect_err("no mergeable files");
    assert!(error.to_string().contains("no mergeable"));
}

#[test]
fn failed_group_is_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let inputs = vec![
        write_fixture(dir.path(), "good.csv", "1,2\n"),
        write_fixture(dir.path(), "bad.xlsx", "this is not a workbook"),
    ];

    let result = run_merge(&inputs, 0, &out, false).expect("run merge");
    assert!(result.has_errors);
    let by_format = |name: &str| {
        result
            .groups
            .iter()
            .find(|group| group.format == name)
            .expect("group present")
    };
    assert_eq!(by_format("CSV").status, GroupStatus::Ok);
    assert_eq!(by_format("Excel").status, GroupStatus::Failed);
    assert!(by_format("Excel").message.is_some());
}

#[test]
fn run_result_serializes_for_json_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = vec![write_fixture(dir.path(), "a.csv", "x,y\n")];

    let result = run_merge(&inputs, 0, dir.path(), true).expect("run merge");
    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(value["groups"][0]["status"], "ok");
    assert_eq!(value["groups"][0]["rows"], 1);
}
