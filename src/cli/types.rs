//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::check::CheckArgs;
use super::commands::resolve::ResolveArgs;
use super::commands::workspace::WorkspaceArgs;

#[derive(Parser, Debug)]
#[command(name = "dandere2x")]
#[command(about = "Resolve and inspect dandere2x configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Ignore DANDERE2X_<KEY> environment overrides
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Directory that [this] expands to (defaults to the executable's directory;
    /// relative paths are taken from the current directory)
    #[arg(long, global = true, env = "DANDERE2X_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Directory for dandere2x.log
    #[arg(long, global = true, default_value = ".")]
    pub log_dir: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    /// Mirror log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Console log format
    #[arg(long, global = true, default_value = "pretty", value_parser = ["pretty", "json"])]
    pub log_format: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a configuration source and print every setting
    Resolve(ResolveArgs),

    /// Check that a configuration source resolves
    Check(CheckArgs),

    /// Create the workspace directories a configuration describes
    Workspace(WorkspaceArgs),
}
