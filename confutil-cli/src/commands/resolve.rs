//! Command to resolve a path to an absolute one.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use confutil::PathResolver;
use std::path::PathBuf;

/// Resolve a path, creating its parent directory if missing.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve (`/abs`, `~/rel`, `~rel` or relative)
    pub path: String,

    /// Directory relative paths are resolved against (default: cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.is_empty() {
            return Err(CliError::InvalidArguments("path must not be empty".into()));
        }

        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        let resolved = PathResolver::new().resolve(&self.path, self.base.as_deref());
        logger.debug(&format!("resolved {:?} to {}", self.path, resolved.display()));

        println!("{}", resolved.display());
        Ok(())
    }
}
