//! Integration tests for the status command

use leafmark::cli::{Commands, RunContext};
use std::fs;
use tempfile::TempDir;

fn status_command(format: &str, breakdown: bool) -> Commands {
    Commands::Status {
        format: format.to_string(),
        breakdown,
    }
}

#[test]
fn test_status_text_reports_counts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b").join("c")).unwrap();

    let context = RunContext::new(root, None, Vec::new()).unwrap();
    let output = context.execute(&status_command("text", false)).unwrap();

    assert!(output.contains("Directories: 4"));
    assert!(output.contains("Leaf directories: 2"));
    assert!(output.contains("Annotated: 0"));
}

#[test]
fn test_status_json_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();

    let context = RunContext::new(root, None, Vec::new()).unwrap();
    let output = context.execute(&status_command("json", true)).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["leaves"], 1);
    assert_eq!(parsed["missing"], 1);
    assert_eq!(parsed["missing_paths"].as_array().unwrap().len(), 1);
}

#[test]
fn test_status_agrees_with_annotate_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();
    fs::create_dir(root.join("b")).unwrap();

    let context = RunContext::new(root, None, Vec::new()).unwrap();

    let before = context.execute(&status_command("json", false)).unwrap();
    let before: serde_json::Value = serde_json::from_str(&before).unwrap();
    assert_eq!(before["missing"], 2);

    context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();

    let after = context.execute(&status_command("json", false)).unwrap();
    let after: serde_json::Value = serde_json::from_str(&after).unwrap();
    assert_eq!(after["missing"], 0);
    assert_eq!(after["annotated"], 2);
}

#[test]
fn test_status_breakdown_lists_missing_leaves() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("needs_marker")).unwrap();

    let context = RunContext::new(root, None, Vec::new()).unwrap();
    let output = context.execute(&status_command("text", true)).unwrap();

    assert!(output.contains("Missing markers"));
    assert!(output.contains("needs_marker"));
}

#[test]
fn test_status_of_missing_root_is_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("not_there");

    let context = RunContext::new(missing, None, Vec::new()).unwrap();
    let output = context.execute(&status_command("json", false)).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["directories"], 0);
    assert_eq!(parsed["leaves"], 0);
}
