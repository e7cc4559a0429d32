//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CONFUTIL_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_VAR};

/// Overrides the project name.
pub const PROJECT_VAR: &str = "CONFUTIL_PROJECT";

/// Overrides the temp file prefix.
pub const TEMP_PREFIX_VAR: &str = "CONFUTIL_TEMP_PREFIX";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use confutil::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `CONFUTIL_LOG_MODE` is not a valid log level.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(project) = env::var(PROJECT_VAR) {
            config.project = Some(project);
        }

        if let Ok(prefix) = env::var(TEMP_PREFIX_VAR) {
            config.temp_prefix = Some(prefix);
        }

        if let Ok(mode) = env::var(LOG_MODE_VAR) {
            let level = LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_VAR.into(),
                message,
            })?;
            config.log_mode = Some(level);
        }

        Ok(())
    }
}
