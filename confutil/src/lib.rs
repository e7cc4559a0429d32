#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # confutil
//!
//! Filesystem and text utilities for applications that keep their state in
//! small line-based files under the user's config and cache directories.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: absolute paths from `~/`, relative and absolute input
//! - [`AppDirs`]: per-project config and cache directories
//! - [`UniqueListLoader`] and [`EntryParser`]: order-preserving,
//!   deduplicating list loading
//! - [`TempFileWriter`]: uniquely named temporary files with content
//! - [`Config`] and [`ConfigBuilder`]: layered settings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use confutil::file::{FnParser, UniqueListLoader};
//! use confutil::text::{find_case_insensitive, replace_all};
//!
//! // Later duplicates replace earlier ones and move to their position
//! let loader = UniqueListLoader::new(FnParser::new(
//!     |line: &str| Some(line.to_string()),
//!     |entry: &String| entry.clone(),
//! ));
//! assert_eq!(loader.load_str("a\nb\na\n").as_slice(), ["b", "a"]);
//!
//! assert_eq!(find_case_insensitive("HeLLo World", "world"), Some(6));
//! assert_eq!(replace_all("%s", "rust", Some("search %s")).as_deref(), Some("search rust"));
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod file;
pub mod logging;
pub mod path;
pub mod text;

#[cfg(test)]
mod test_support;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use environment::{Environment, FixedEnvironment, SystemEnvironment};
pub use error::{Error, Result};
pub use file::{
    file_to_unique_list, EntryParser, FnParser, TempFileWriter, UniqueList, UniqueListLoader,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{build_path, AppDirs, PathResolver};
pub use text::{find_case_insensitive, replace_all};
