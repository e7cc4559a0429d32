//! Path resolution and application directories.
//!
//! # Resolution
//!
//! [`PathResolver`] turns a path string from a configuration file or the
//! command line into an absolute path:
//!
//! - `/absolute` paths are used as-is
//! - `~/rest` and `~rest` are expanded against the home directory
//! - relative paths are joined to a base directory, or to the current
//!   working directory when no base is given
//!
//! Resolution also creates the parent directory of the result (mode 0700),
//! so the returned path can be opened for writing straight away.
//!
//! # Application directories
//!
//! [`AppDirs`] locates the per-project configuration and cache directories
//! under the XDG base directories and creates them (mode 0755) on first use.
//!
//! # Examples
//!
//! ```
//! use confutil::path::PathResolver;
//! use confutil::FixedEnvironment;
//! use std::path::Path;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let resolver = PathResolver::with_environment(FixedEnvironment::rooted_at(temp.path()));
//!
//! let bookmarks = resolver.resolve("bookmarks", Some(&temp.path().join("data")));
//! assert_eq!(bookmarks, temp.path().join("data/bookmarks"));
//! assert!(temp.path().join("data").is_dir());
//! ```

pub mod dirs;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use dirs::{
    create_dir_if_missing, create_file_if_missing, AppDirs, PRIVATE_DIR_MODE, PUBLIC_DIR_MODE,
};
pub use resolver::{build_path, PathResolver};
