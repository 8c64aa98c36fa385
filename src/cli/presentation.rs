//! Annotate command presentation: created-marker lines and dry-run preview.

use crate::annotate::marker::MARKER_FILE_NAME;
use crate::annotate::AnnotateReport;

/// Format the outcome of a mutating annotate run: exactly one line per
/// created marker. Empty when nothing was created.
pub fn format_annotate_summary(report: &AnnotateReport) -> String {
    report
        .created
        .iter()
        .map(|path| format!("Created {} in: {}", MARKER_FILE_NAME, path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a dry-run preview: would-create lines plus a hint.
pub fn format_annotate_preview(report: &AnnotateReport) -> String {
    if report.created.is_empty() {
        return format!("All leaf directories already have a {}.", MARKER_FILE_NAME);
    }

    let mut output = String::new();
    for path in &report.created {
        output.push_str(&format!(
            "Would create {} in: {}\n",
            MARKER_FILE_NAME,
            path.display()
        ));
    }
    let noun = if report.created.len() == 1 {
        "marker"
    } else {
        "markers"
    };
    output.push_str(&format!(
        "Run 'leafmark annotate' to create {} {}.",
        report.created.len(),
        noun
    ));
    output
}
