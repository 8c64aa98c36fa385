//! Directory tree enumeration and leaf analysis

pub mod walker;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Select the leaf directories from an enumerated directory set.
///
/// A directory is a leaf iff no other directory in the set has it as its
/// parent. The walker's listing is complete per directory, so this matches
/// "has zero immediate subdirectories" without depending on visit order.
/// Preserves input order.
pub fn leaf_directories(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let parents: HashSet<&Path> = dirs.iter().filter_map(|d| d.parent()).collect();

    dirs.iter()
        .filter(|d| !parents.contains(d.as_path()))
        .cloned()
        .collect()
}
