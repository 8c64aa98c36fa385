//! Filesystem walker for enumerating directory trees

use crate::error::AnnotateError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Component names to skip, together with their subtrees (default: none,
    /// so every directory under the root counts)
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every directory, including the root.
    ///
    /// Returns paths sorted for determinism. A root that does not exist
    /// yields an empty listing; a root that is a file yields no directories.
    pub fn walk_directories(&self) -> Result<Vec<PathBuf>, AnnotateError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e))
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                AnnotateError::Traversal { path, source: e }
            })?;

            if entry.file_type().is_dir() {
                dirs.push(entry.path().to_path_buf());
            }
        }

        // Sort for determinism
        dirs.sort();

        Ok(dirs)
    }

    /// Check if an entry should be skipped based on ignore patterns.
    /// The root itself is never skipped.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || self.config.ignore_patterns.is_empty() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.as_str() == name)
    }
}
