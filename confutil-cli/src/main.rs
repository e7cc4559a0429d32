//! Main entry point for the confutil CLI.
//!
//! Each subcommand exposes one library operation:
//! - `resolve`: Resolve a path and create its parent directory
//! - `dirs`: Show the per-project home, config and cache directories
//! - `lines`: Load a file as an order-preserving unique list
//! - `search`: Case-insensitive substring search
//! - `replace`: Replace every occurrence of a string
//! - `tmp`: Write content to a new temporary file
//! - `touch`: Create an empty file if missing

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Dirs(cmd) => cmd.execute(&global),
        cli::Command::Lines(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Replace(cmd) => cmd.execute(&global),
        cli::Command::Tmp(cmd) => cmd.execute(&global),
        cli::Command::Touch(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
