//! Configuration system for confutil.
//!
//! Settings come from a YAML file, `CONFUTIL_*` environment variables and
//! programmatic overrides.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CONFUTIL_PROJECT`, `CONFUTIL_TEMP_PREFIX`,
//!    `CONFUTIL_LOG_MODE`)
//! 3. The settings file (`--config` path, or
//!    `$XDG_CONFIG_HOME/confutil/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use confutil::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("project: {}", config.project_name());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, PROJECT_VAR, TEMP_PREFIX_VAR};
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, DEFAULT_PROJECT};
pub use validator::ConfigValidator;
