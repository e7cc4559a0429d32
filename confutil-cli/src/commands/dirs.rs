//! Command to show the per-project directories.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, OutputFormat};
use clap::Args;
use confutil::SystemEnvironment;
use serde::Serialize;
use std::path::PathBuf;

/// Show the home, config and cache directories, creating the last two.
#[derive(Args)]
pub struct DirsCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DirsReport {
    project: String,
    home: PathBuf,
    config: PathBuf,
    cache: PathBuf,
}

impl DirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dirs = config.app_dirs(SystemEnvironment);

        let report = DirsReport {
            project: dirs.project().to_string(),
            home: dirs.home_dir(),
            config: dirs.config_dir()?,
            cache: dirs.cache_dir()?,
        };

        match self.format {
            OutputFormat::Plain => {
                println!("home: {}", report.home.display());
                println!("config: {}", report.config.display());
                println!("cache: {}", report.cache.display());
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }
}
