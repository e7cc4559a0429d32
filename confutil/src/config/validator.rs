//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use confutil::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { project: Some("a/b".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the project name or temp prefix is not
    /// usable as a single file name component.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref project) = config.project {
            Self::validate_component("project", project)?;
        }
        if let Some(ref prefix) = config.temp_prefix {
            Self::validate_component("temp_prefix", prefix)?;
        }
        Ok(())
    }

    fn validate_component(field: &str, value: &str) -> Result<()> {
        let message = if value.trim().is_empty() {
            "cannot be empty"
        } else if value.contains('/') {
            "cannot contain '/'"
        } else if value.contains('\0') {
            "cannot contain NUL"
        } else if value == "." || value == ".." {
            "cannot be '.' or '..'"
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_project(project: &str) -> Config {
        Config {
            project: Some(project.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_project() {
        assert!(ConfigValidator::validate(&with_project("vimb")).is_ok());
    }

    #[test]
    fn test_empty_project() {
        let err = ConfigValidator::validate(&with_project("  ")).unwrap_err();
        assert!(err.to_string().contains("project"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_separator_rejected() {
        assert!(ConfigValidator::validate(&with_project("a/b")).is_err());
        assert!(ConfigValidator::validate(&with_project("..")).is_err());
    }

    #[test]
    fn test_temp_prefix_validated() {
        let config = Config {
            temp_prefix: Some(String::new()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("temp_prefix"));
    }
}
