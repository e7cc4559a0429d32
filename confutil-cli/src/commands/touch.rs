//! Command to create an empty file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use confutil::path::create_file_if_missing;
use confutil::PathResolver;

/// Create FILE (and its parent directory) if missing; existing content is kept.
#[derive(Args)]
pub struct TouchCommand {
    /// File to create
    pub file: String,
}

impl TouchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.file.is_empty() {
            return Err(CliError::InvalidArguments("file must not be empty".into()));
        }

        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        let path = PathResolver::new().resolve(&self.file, None);
        create_file_if_missing(&path)?;
        logger.info(&format!("ensured {}", path.display()));
        Ok(())
    }
}
