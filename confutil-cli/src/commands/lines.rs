//! Command to print the unique entries of a line-based file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, OutputFormat};
use clap::{Args, ValueEnum};
use confutil::file::{FnParser, UniqueListLoader};
use std::path::PathBuf;

/// Which part of a line decides whether two lines are duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyMode {
    /// The whole trimmed line
    #[default]
    Whole,
    /// The first whitespace-separated field (e.g. the URL of a bookmark)
    FirstField,
}

/// Print a file's lines with duplicates removed, keeping the last occurrence.
#[derive(Args)]
pub struct LinesCommand {
    /// File to read
    pub file: PathBuf,

    /// Part of each line used for duplicate detection
    #[arg(long, value_enum, default_value_t = KeyMode::Whole)]
    pub key: KeyMode,

    /// Compare keys ignoring ASCII case
    #[arg(long)]
    pub ignore_case: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

fn entry_key(line: &str, mode: KeyMode, ignore_case: bool) -> String {
    let key = match mode {
        KeyMode::Whole => line,
        KeyMode::FirstField => line.split_whitespace().next().unwrap_or(line),
    };
    if ignore_case {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    }
}

impl LinesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        let (mode, ignore_case) = (self.key, self.ignore_case);
        let loader = UniqueListLoader::new(FnParser::new(
            |line: &str| Some(line.to_string()),
            move |entry: &String| entry_key(entry, mode, ignore_case),
        ));

        let list = loader.load(&self.file);
        logger.info(&format!(
            "{} unique entries in {}",
            list.len(),
            self.file.display()
        ));

        match self.format {
            OutputFormat::Plain => {
                for entry in &list {
                    println!("{entry}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(list.as_slice())?);
            }
        }
        Ok(())
    }
}
