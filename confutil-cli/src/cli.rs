//! CLI structure and command definitions.

use crate::commands::{
    CompletionsCommand, DirsCommand, LinesCommand, ReplaceCommand, ResolveCommand, SearchCommand,
    TmpCommand, TouchCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line access to the confutil filesystem and text utilities.
#[derive(Parser)]
#[command(name = "confutil")]
#[command(version, about = "Filesystem and text utilities for line-based state files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH", global = true, env = "CONFUTIL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path to an absolute one, creating its parent directory
    Resolve(ResolveCommand),

    /// Show the home, config and cache directories
    Dirs(DirsCommand),

    /// Print the unique entries of a line-based file
    Lines(LinesCommand),

    /// Find a substring ignoring ASCII case
    Search(SearchCommand),

    /// Replace every occurrence of a string
    Replace(ReplaceCommand),

    /// Write content to a new temporary file
    Tmp(TmpCommand),

    /// Create an empty file if it does not exist
    Touch(TouchCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
