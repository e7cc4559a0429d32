//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::file::TempFileWriter;
use crate::logging::LogLevel;
use crate::path::AppDirs;

/// Project name used when none is configured.
pub const DEFAULT_PROJECT: &str = "confutil";

/// Settings file contents.
///
/// Every field is optional; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use confutil::config::Config;
///
/// let config: Config = serde_yaml::from_str("project: browser\n").unwrap();
/// assert_eq!(config.project_name(), "browser");
/// assert_eq!(config.temp_prefix(), "browser");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory name under the config and cache homes.
    pub project: Option<String>,

    /// Prefix for temporary file names; defaults to the project name.
    pub temp_prefix: Option<String>,

    /// Verbosity for user-facing messages.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured project name, or [`DEFAULT_PROJECT`].
    #[must_use]
    pub fn project_name(&self) -> &str {
        self.project.as_deref().unwrap_or(DEFAULT_PROJECT)
    }

    /// The configured temp prefix, or the project name.
    #[must_use]
    pub fn temp_prefix(&self) -> &str {
        self.temp_prefix
            .as_deref()
            .unwrap_or_else(|| self.project_name())
    }

    /// The configured log level, or Normal.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or(LogLevel::Normal)
    }

    /// Overlays every field set in `other` onto `self`.
    pub fn merge(&mut self, other: Config) {
        if other.project.is_some() {
            self.project = other.project;
        }
        if other.temp_prefix.is_some() {
            self.temp_prefix = other.temp_prefix;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
    }

    /// Application directories for the configured project.
    pub fn app_dirs<E: Environment>(&self, env: E) -> AppDirs<E> {
        AppDirs::with_environment(self.project_name(), env)
    }

    /// Temp file writer using the configured prefix.
    #[must_use]
    pub fn temp_writer(&self) -> TempFileWriter {
        TempFileWriter::new(self.temp_prefix())
    }
}
