//! CLI help and command-name contract for log lines and routing.

use crate::cli::parse::Commands;

/// Command name string for log lines (e.g. "annotate", "status").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Annotate { .. } => "annotate",
        Commands::Status { .. } => "status",
    }
}
