//! CLI parse: clap types for leafmark. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leafmark CLI - placeholder README markers for leaf directories
#[derive(Parser)]
#[command(name = "leafmark")]
#[command(about = "Ensure every leaf directory carries a placeholder README.md")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root directory of the tree to annotate
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Component names to skip during traversal, together with their subtrees
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the tree and create missing leaf markers
    Annotate {
        /// Report what would be created without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Show marker coverage for the tree
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// List leaf directories still missing a marker
        #[arg(long)]
        breakdown: bool,
    },
}
