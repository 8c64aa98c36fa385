//! Leaf-directory annotation: walk a tree and place placeholder markers.
//!
//! The annotator enumerates every directory under a root, selects the leaves
//! (directories with no subdirectories), and writes the marker file into each
//! leaf that lacks one. Existing markers are left untouched, so a pass is
//! idempotent and safely re-runnable.

pub mod marker;

use crate::error::AnnotateError;
use crate::tree::leaf_directories;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for a single annotation pass.
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// Report what would be created without writing.
    pub dry_run: bool,
}

/// Outcome of an annotation pass.
#[derive(Debug, Clone, Default)]
pub struct AnnotateReport {
    /// Leaf directories that received a new marker (or would, under dry run).
    pub created: Vec<PathBuf>,
    /// Leaf directories whose marker already existed.
    pub existing: usize,
    /// Total leaf directories seen.
    pub leaves: usize,
}

/// Tree annotator: ensures each leaf directory under a root carries a marker.
pub struct Annotator {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl Annotator {
    /// Create an annotator for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
        }
    }

    /// Create an annotator with custom walker configuration
    pub fn with_config(root: PathBuf, walker_config: WalkerConfig) -> Self {
        Self {
            root,
            walker_config,
        }
    }

    /// Run one annotation pass.
    ///
    /// A nonexistent root yields an empty report. Errors abort the pass;
    /// markers already written stay written. There is no rollback: existing
    /// markers are skipped, so re-running is safe.
    pub fn run(&self, options: &AnnotateOptions) -> Result<AnnotateReport, AnnotateError> {
        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());
        let dirs = walker.walk_directories()?;
        let leaves = leaf_directories(&dirs);

        let mut report = AnnotateReport {
            leaves: leaves.len(),
            ..AnnotateReport::default()
        };

        for leaf in leaves {
            if marker::marker_path(&leaf).exists() {
                report.existing += 1;
                continue;
            }

            if !options.dry_run {
                marker::write_marker(&leaf)?;
                debug!(path = %leaf.display(), "Created marker");
            }
            report.created.push(leaf);
        }

        info!(
            created = report.created.len(),
            existing = report.existing,
            leaves = report.leaves,
            dry_run = options.dry_run,
            "Annotation pass complete"
        );

        Ok(report)
    }
}
