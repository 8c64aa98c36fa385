//! Annotation status data and formatting.
//!
//! Produces the report for `leafmark status`: directory and leaf counts,
//! marker coverage, and an optional breakdown of leaves still missing a
//! marker. Used by the CLI for both text and JSON output.

use crate::annotate::marker;
use crate::error::AnnotateError;
use crate::tree::leaf_directories;
use crate::tree::walker::{Walker, WalkerConfig};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker coverage for a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationStatus {
    pub root: PathBuf,
    pub directories: u64,
    pub leaves: u64,
    pub annotated: u64,
    pub missing: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_paths: Option<Vec<PathBuf>>,
}

impl AnnotationStatus {
    /// Walk the tree and measure marker coverage. `include_breakdown`
    /// retains the paths of leaves still missing a marker.
    pub fn collect(
        root: &Path,
        config: &WalkerConfig,
        include_breakdown: bool,
    ) -> Result<Self, AnnotateError> {
        let walker = Walker::with_config(root.to_path_buf(), config.clone());
        let dirs = walker.walk_directories()?;
        let leaves = leaf_directories(&dirs);

        let mut annotated = 0u64;
        let mut missing = Vec::new();
        for leaf in &leaves {
            if marker::marker_path(leaf).exists() {
                annotated += 1;
            } else {
                missing.push(leaf.clone());
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            directories: dirs.len() as u64,
            leaves: leaves.len() as u64,
            annotated,
            missing: missing.len() as u64,
            missing_paths: include_breakdown.then_some(missing),
        })
    }
}

/// Format a section heading with bold/underline.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format annotation status as human-readable text using comfy-table and
/// styled headings.
pub fn format_status_text(data: &AnnotationStatus, include_breakdown: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Annotation Status")
    ));
    out.push_str(&format!("  Root: {}\n", data.root.display()));
    out.push_str(&format!("  Directories: {}\n", data.directories));
    out.push_str(&format!("  Leaf directories: {}\n", data.leaves));
    out.push_str(&format!("  Annotated: {}\n", data.annotated));
    if data.missing > 0 {
        out.push_str(&format!("  Missing: {}\n", data.missing.to_string().red()));
    } else {
        out.push_str(&format!(
            "  Missing: 0 ({})\n",
            "all leaf directories annotated".green()
        ));
    }

    if include_breakdown {
        if let Some(ref missing_paths) = data.missing_paths {
            if !missing_paths.is_empty() {
                out.push_str(&format!(
                    "\n{}\n\n",
                    format_section_heading("Missing markers")
                ));
                let mut table = Table::new();
                table.load_preset(UTF8_BORDERS_ONLY);
                table.set_header(vec!["Leaf directory"]);
                for path in missing_paths {
                    table.add_row(vec![path.display().to_string()]);
                }
                out.push_str(&format!("{}\n", table));
            }
        }
    }

    out
}
