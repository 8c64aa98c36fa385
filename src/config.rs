//! Configuration System
//!
//! Layered configuration for the CLI: defaults, then an optional global file
//! at `~/.config/leafmark/config.toml`, then an optional workspace file
//! `<root>/leafmark.toml`, later sources overriding earlier ones.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeafmarkConfig {
    /// Traversal settings
    #[serde(default)]
    pub walker: WalkerSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Traversal settings from configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkerSettings {
    /// Component names to skip, together with their subtrees
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Follow symbolic links during traversal
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum traversal depth
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl WalkerSettings {
    /// Convert to walker configuration.
    pub fn to_walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path to the global config file (`~/.config/leafmark/config.toml`).
    pub fn global_config_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("leafmark")
                .join("config.toml")
        })
    }

    /// Load configuration for a root directory: defaults, then the global
    /// file, then `<root>/leafmark.toml`. Missing files are skipped.
    pub fn load(root: &Path) -> Result<LeafmarkConfig, AppError> {
        let mut builder = config::Config::builder();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(config::File::from(global_path).required(false));
            }
        }

        let workspace_file = root.join("leafmark.toml");
        if workspace_file.exists() {
            builder = builder.add_source(config::File::from(workspace_file).required(false));
        }

        let settings = builder.build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from exactly one file. Errors if the file is
    /// missing or malformed.
    pub fn load_from_file(path: &Path) -> Result<LeafmarkConfig, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
