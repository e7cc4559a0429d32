//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{Config, DEFAULT_PROJECT};
use crate::environment::Environment;
use crate::error::{Error, Result};

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default settings file: `<config_home>/confutil/config.yaml`.
    ///
    /// The directory is not created.
    pub fn default_path(env: &impl Environment) -> PathBuf {
        env.config_home().join(DEFAULT_PROJECT).join(CONFIG_FILE_NAME)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Like [`ConfigLoader::load_file`], but a missing file is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }
        Self::load_file(path).map(Some)
    }
}
