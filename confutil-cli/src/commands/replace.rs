//! Command to replace every occurrence of a string.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use confutil::replace_all;

/// Replace every occurrence of SEARCH in TEXT with REPLACE.
#[derive(Args)]
pub struct ReplaceCommand {
    /// Text to look for
    pub search: String,

    /// Replacement text
    pub replace: String,

    /// Text to operate on
    pub text: String,
}

impl ReplaceCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(replaced) = replace_all(&self.search, &self.replace, Some(self.text.as_str())) {
            println!("{replaced}");
        }
        Ok(())
    }
}
