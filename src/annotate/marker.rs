//! Marker file naming, template content, and creation

use crate::error::AnnotateError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name written into each leaf directory.
pub const MARKER_FILE_NAME: &str = "README.md";

/// Path of the marker inside a directory.
pub fn marker_path(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

/// Template content for a directory's marker. UTF-8, no trailing newline.
pub fn marker_content(dir: &Path) -> String {
    let basename = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned());

    format!("# This is the README file for {}", basename)
}

/// Write the marker for a leaf directory. The caller has checked absence;
/// an existing marker is never overwritten through this path.
pub fn write_marker(dir: &Path) -> Result<(), AnnotateError> {
    let path = marker_path(dir);
    fs::write(&path, marker_content(dir)).map_err(|source| AnnotateError::MarkerWrite {
        path,
        source,
    })
}
