//! Command to write content to a new temporary file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use std::io::{self, Read};
use std::path::PathBuf;

/// Write CONTENT (or standard input) to a new temporary file and print its path.
#[derive(Args)]
pub struct TmpCommand {
    /// Content to write; read from standard input when omitted
    pub content: Option<String>,

    /// Create the file in this directory instead of the system temp directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl TmpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        let content = match self.content {
            Some(content) => content,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut writer = config.temp_writer();
        if let Some(dir) = self.dir {
            writer = writer.in_dir(dir);
        }

        let path = writer.write(&content)?;
        logger.info(&format!("wrote {} bytes", content.len()));

        println!("{}", path.display());
        Ok(())
    }
}
