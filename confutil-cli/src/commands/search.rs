//! Command for case-insensitive substring search.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use confutil::find_case_insensitive;

/// Print the byte offset of NEEDLE in HAYSTACK, ignoring ASCII case.
///
/// Exits with status 1 when there is no match.
#[derive(Args)]
pub struct SearchCommand {
    /// Text to search in
    pub haystack: String,

    /// Text to search for
    pub needle: String,
}

impl SearchCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match find_case_insensitive(&self.haystack, &self.needle) {
            Some(offset) => {
                println!("{offset}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "{:?} not found",
                self.needle
            ))),
        }
    }
}
