//! Error types for the confutil library.
//!
//! This module provides the error hierarchy for every fallible operation in
//! the library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a confutil error.
///
/// # Examples
///
/// ```
/// use confutil::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(6)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the confutil library.
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not exist or is not a regular file.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Reading an existing file failed.
    #[error("cannot read {}: {source}", path.display())]
    ReadFailed {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No temporary file could be created.
    #[error("could not create temporary file: {source}")]
    TempFileCreate {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to a temporary file failed outright.
    ///
    /// The file at `path` has already been removed.
    #[error("could not write temporary file {}: {source}", path.display())]
    TempFileWrite {
        /// Path of the removed temporary file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes than requested reached a temporary file.
    ///
    /// The file at `path` has already been removed when this error is
    /// returned; the path is kept for diagnostics only.
    #[error("could not write temporary file {}: wrote {written} of {expected} bytes", path.display())]
    ShortWrite {
        /// Path of the removed temporary file.
        path: PathBuf,
        /// Number of bytes actually written.
        written: usize,
        /// Number of bytes that should have been written.
        expected: usize,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use confutil::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::FileNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileNotFound { .. } => true,
            Self::ReadFailed { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Human-readable reason used in the `Cannot open` diagnostic line.
    pub(crate) fn read_reason(&self) -> String {
        match self {
            Self::FileNotFound { .. } => "file not found".to_string(),
            Self::ReadFailed { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
