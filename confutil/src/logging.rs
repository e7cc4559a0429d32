//! Verbosity levels and the user-facing stderr logger.
//!
//! Library internals trace through the `log` facade; [`Logger`] is what the
//! command line front end prints progress with.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_VAR: &str = "CONFUTIL_LOG_MODE";

/// How much user-facing output to print, ordered from least to most.
///
/// ```
/// use confutil::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Results only.
    Quiet,
    /// Results and stderr diagnostics.
    Normal,
    /// Also progress messages from [`Logger`].
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the message used for [`crate::Error::Validation`] when `s`
    /// names no level.
    ///
    /// ```
    /// use confutil::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// User-facing progress messages on stderr, gated by a [`LogLevel`].
///
/// Only `--verbose` output goes through here; failures reach the user as
/// errors, and library diagnostics go through the `log` facade.
///
/// ```
/// use confutil::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// assert!(logger.enabled());
/// assert!(!Logger::default().enabled());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger printing at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this logger prints at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether [`Logger::info`] and [`Logger::debug`] print anything.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.level >= LogLevel::Verbose
    }

    /// Prints `INFO: <message>` when verbose.
    pub fn info(&self, message: &str) {
        if self.enabled() {
            eprintln!("INFO: {message}");
        }
    }

    /// Prints `DEBUG: <message>` when verbose.
    pub fn debug(&self, message: &str) {
        if self.enabled() {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Picks the level from `verbose`/`quiet`, then [`LOG_MODE_VAR`], then
/// [`LogLevel::Normal`]. `verbose` wins over `quiet`; an unparsable
/// variable is ignored.
///
/// ```
/// use confutil::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_VAR) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
