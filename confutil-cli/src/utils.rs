//! Utility functions for CLI operations.

use crate::error::CliError;
use clap::ValueEnum;
use confutil::{init_logger, Config, ConfigBuilder, Logger};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit settings file.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logger for this invocation.
    ///
    /// `--verbose` and `--quiet` win over the configured `log_mode`.
    pub fn logger(&self, config: &Config) -> Logger {
        if self.verbose || self.quiet {
            return init_logger(self.verbose, self.quiet);
        }
        Logger::new(config.log_level())
    }
}

/// Output format for commands that print structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// JSON
    Json,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or the default settings file
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}
