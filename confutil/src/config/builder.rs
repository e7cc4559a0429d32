//! Layered configuration assembly.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::environment::{Environment, SystemEnvironment};
use crate::error::Result;

/// Builds a [`Config`] from file, environment and programmatic layers.
///
/// # Examples
///
/// ```
/// use confutil::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { project: Some("notes".into()), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.project_name(), "notes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the default file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from `path` instead of the default location.
    ///
    /// Unlike the default location, an explicit file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Ignores settings files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `CONFUTIL_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or parsed, an
    /// environment override is invalid, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        self.build_in(&SystemEnvironment)
    }

    /// Builds the configuration, locating the default file through `env`.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigBuilder::build`].
    pub fn build_in(self, env: &impl Environment) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let from_file = match self.file {
                Some(ref path) => Some(ConfigLoader::load_file(path)?),
                None => ConfigLoader::load_optional(&ConfigLoader::default_path(env))?,
            };
            if let Some(from_file) = from_file {
                config.merge(from_file);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
