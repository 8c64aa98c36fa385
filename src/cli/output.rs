//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::AppError;

/// Map domain errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &AppError) -> String {
    e.to_string()
}
