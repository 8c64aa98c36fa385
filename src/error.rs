//! Error types for the leaf-directory annotation tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking a tree or writing markers.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("Failed to walk directory tree under {path:?}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create marker in {path:?}: {source}")]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// CLI-facing errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Annotation error: {0}")]
    Annotate(#[from] AnnotateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
