//! CLI route: route table and run context. Dispatches to the annotator,
//! status collection, and presentation.

use crate::annotate::{AnnotateOptions, Annotator};
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_annotate_preview, format_annotate_summary};
use crate::config::ConfigLoader;
use crate::error::AppError;
use crate::status::{format_status_text, AnnotationStatus};
use crate::tree::walker::WalkerConfig;
use std::path::PathBuf;

/// Runtime context for CLI execution: resolved root and effective walker
/// configuration. Built from CLI arguments using ConfigLoader only.
pub struct RunContext {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl RunContext {
    /// Create run context from the CLI root, optional config path, and extra
    /// ignore patterns. The root need not exist; when it does, it is
    /// canonicalized for stable display.
    pub fn new(
        root: PathBuf,
        config_path: Option<PathBuf>,
        extra_ignores: Vec<String>,
    ) -> Result<Self, AppError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&root)?
        };

        let root = if root.exists() {
            dunce::canonicalize(&root).unwrap_or(root)
        } else {
            root
        };

        let mut walker_config = config.walker.to_walker_config();
        walker_config.ignore_patterns.extend(extra_ignores);

        Ok(Self {
            root,
            walker_config,
        })
    }

    /// Resolved root directory for this run.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Execute a parsed command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Annotate { dry_run } => {
                let annotator =
                    Annotator::with_config(self.root.clone(), self.walker_config.clone());
                let report = annotator.run(&AnnotateOptions { dry_run: *dry_run })?;

                if *dry_run {
                    Ok(format_annotate_preview(&report))
                } else {
                    Ok(format_annotate_summary(&report))
                }
            }
            Commands::Status { format, breakdown } => {
                let status =
                    AnnotationStatus::collect(&self.root, &self.walker_config, *breakdown)?;

                if format == "json" {
                    serde_json::to_string_pretty(&status).map_err(|e| {
                        AppError::Config(format!("Failed to serialize status: {}", e))
                    })
                } else {
                    Ok(format_status_text(&status, *breakdown))
                }
            }
        }
    }
}
