//! End-to-end annotation scenarios through the annotator and the CLI route layer

use leafmark::annotate::{AnnotateOptions, Annotator};
use leafmark::cli::{Commands, RunContext};
use std::fs;
use tempfile::TempDir;

/// Root contains `a/` (empty) and `b/c/` (empty): markers land in `a` and
/// `b/c` only, not in `b`, which has a subdirectory.
#[test]
fn test_markers_created_in_leaves_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b").join("c")).unwrap();

    let annotator = Annotator::new(root.clone());
    let report = annotator.run(&AnnotateOptions::default()).unwrap();

    assert_eq!(report.created.len(), 2);
    assert!(root.join("a").join("README.md").exists());
    assert!(root.join("b").join("c").join("README.md").exists());
    assert!(!root.join("b").join("README.md").exists());
}

/// A root with no subdirectories is itself a leaf and gets a marker.
#[test]
fn test_leaf_root_gets_marker() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("notes.txt"), "content").unwrap();

    let annotator = Annotator::new(root.clone());
    let report = annotator.run(&AnnotateOptions::default()).unwrap();

    assert_eq!(report.created.len(), 1);
    assert!(root.join("README.md").exists());
}

/// A nonexistent root is a silent no-op: no error, empty report, no output.
#[test]
fn test_missing_root_is_silent_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("not_there");

    let context = RunContext::new(missing, None, Vec::new()).unwrap();
    let output = context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();

    assert!(output.is_empty());
}

/// Running twice leaves the filesystem as after one run; the second run
/// creates nothing.
#[test]
fn test_annotation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b").join("c")).unwrap();

    let annotator = Annotator::new(root);
    let first = annotator.run(&AnnotateOptions::default()).unwrap();
    let second = annotator.run(&AnnotateOptions::default()).unwrap();

    assert_eq!(first.created.len(), 2);
    assert!(second.created.is_empty());
    assert_eq!(second.existing, first.leaves);
}

/// Pre-existing markers keep their content.
#[test]
fn test_existing_marker_content_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let leaf = root.join("leaf");
    fs::create_dir(&leaf).unwrap();
    fs::write(leaf.join("README.md"), "# My own notes\n").unwrap();

    let annotator = Annotator::new(root);
    annotator.run(&AnnotateOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(leaf.join("README.md")).unwrap(),
        "# My own notes\n"
    );
}

/// Marker content equals the fixed template with the leaf basename.
#[test]
fn test_created_marker_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("widgets")).unwrap();

    let annotator = Annotator::new(root.clone());
    annotator.run(&AnnotateOptions::default()).unwrap();

    let content = fs::read_to_string(root.join("widgets").join("README.md")).unwrap();
    assert_eq!(content, "# This is the README file for widgets");
}

/// The CLI route prints exactly one line per created marker.
#[test]
fn test_cli_annotate_output_lines() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();

    let context = RunContext::new(root.clone(), None, Vec::new()).unwrap();
    let output = context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Created README.md in: "));
    assert!(lines[0].ends_with("a"));
}

/// Dry run through the CLI previews creations without writing.
#[test]
fn test_cli_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("a")).unwrap();

    let context = RunContext::new(root.clone(), None, Vec::new()).unwrap();
    let output = context
        .execute(&Commands::Annotate { dry_run: true })
        .unwrap();

    assert!(output.contains("Would create README.md in: "));
    assert!(!root.join("a").join("README.md").exists());

    // A real run afterwards creates exactly the previewed set
    let real = context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();
    assert!(real.contains("Created README.md in: "));
    assert!(root.join("a").join("README.md").exists());
}

/// CLI-provided ignore patterns exclude entire subtrees from annotation.
#[test]
fn test_cli_ignore_patterns_skip_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("src")).unwrap();
    fs::create_dir_all(root.join("target").join("debug")).unwrap();

    let context =
        RunContext::new(root.clone(), None, vec!["target".to_string()]).unwrap();
    context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();

    assert!(root.join("src").join("README.md").exists());
    assert!(!root.join("target").join("debug").join("README.md").exists());
}

/// A config file passed via --config drives walker settings.
#[test]
fn test_config_file_ignore_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("keep")).unwrap();
    fs::create_dir(root.join("skipme")).unwrap();

    let config_file = root.join("custom.toml");
    fs::write(&config_file, "[walker]\nignore_patterns = [\"skipme\"]\n").unwrap();

    let context = RunContext::new(root.clone(), Some(config_file), Vec::new()).unwrap();
    context
        .execute(&Commands::Annotate { dry_run: false })
        .unwrap();

    assert!(root.join("keep").join("README.md").exists());
    assert!(!root.join("skipme").join("README.md").exists());
}
