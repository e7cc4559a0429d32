//! Building absolute paths from user-supplied path strings.
//!
//! This module provides the [`PathResolver`] type, which turns a path as it
//! appears in a configuration file or on the command line into an absolute
//! path and makes sure the directory that will hold it exists.

use std::path::{Path, PathBuf};

use crate::environment::{Environment, SystemEnvironment};
use crate::path::dirs::{create_dir_with_mode, PRIVATE_DIR_MODE};

/// Resolves path strings against the home, base and working directories.
///
/// Resolution rules, in priority order:
/// - `/abs/path` is taken as-is
/// - `~/rest` and `~rest` become `<home>/rest`
/// - anything else is joined to the base directory when one is given
/// - otherwise it is joined to the current working directory
///
/// # Examples
///
/// ```
/// use confutil::{FixedEnvironment, PathResolver};
/// use std::path::Path;
///
/// let resolver = PathResolver::with_environment(FixedEnvironment::new("/home/alice", "/work"));
///
/// assert_eq!(resolver.absolute("~/notes", None), "/home/alice/notes");
/// assert_eq!(resolver.absolute("notes", Some(Path::new("/data"))), "/data/notes");
/// assert_eq!(resolver.absolute("notes", None), "/work/notes");
/// assert_eq!(resolver.absolute("/etc/notes", Some(Path::new("/data"))), "/etc/notes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<E = SystemEnvironment> {
    env: E,
}

impl PathResolver<SystemEnvironment> {
    /// Creates a resolver backed by the real process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: SystemEnvironment,
        }
    }
}

impl<E: Environment> PathResolver<E> {
    /// Creates a resolver backed by the given environment.
    pub fn with_environment(env: E) -> Self {
        Self { env }
    }

    /// Returns the environment used for home and working directory lookups.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Builds the absolute path string without touching the filesystem.
    ///
    /// `~` and absolute detection take priority over `base_dir`; the base is
    /// only consulted for plain relative paths.
    pub fn absolute(&self, path: &str, base_dir: Option<&Path>) -> String {
        if path.starts_with('/') {
            return path.to_string();
        }

        if let Some(rest) = path.strip_prefix('~') {
            let home = self.env.home_dir();
            let home = home.to_string_lossy();
            return if rest.starts_with('/') {
                format!("{home}{rest}")
            } else {
                format!("{home}/{rest}")
            };
        }

        let base = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.env.current_dir(),
        };
        format!("{}/{path}", base.to_string_lossy())
    }

    /// Resolves `path` and creates its parent directory if missing.
    ///
    /// This never fails: the absolute path is always returned. The parent
    /// directory (everything before the last `/`) is created with mode 0700
    /// together with any missing ancestors; a failure to create it is only
    /// logged.
    pub fn resolve(&self, path: &str, base_dir: Option<&Path>) -> PathBuf {
        let full = self.absolute(path, base_dir);
        ensure_parent_dir(&full);
        PathBuf::from(full)
    }
}

/// Creates everything before the last `/` of `full` when it is not already a
/// directory.
fn ensure_parent_dir(full: &str) {
    let Some(idx) = full.rfind('/') else {
        return;
    };
    let parent = &full[..idx];
    if parent.is_empty() {
        return;
    }

    let parent = Path::new(parent);
    if parent.is_dir() {
        return;
    }

    match create_dir_with_mode(parent, PRIVATE_DIR_MODE) {
        Ok(()) => log::debug!("created directory {}", parent.display()),
        Err(e) => log::warn!("cannot create directory {}: {e}", parent.display()),
    }
}

/// Resolves `path` with the process environment.
///
/// Shorthand for `PathResolver::new().resolve(path, dir)`.
///
/// # Examples
///
/// ```no_run
/// use confutil::path::build_path;
///
/// let history = build_path("~/.local/share/app/history", None);
/// assert!(history.is_absolute());
/// ```
pub fn build_path(path: &str, dir: Option<&Path>) -> PathBuf {
    PathResolver::new().resolve(path, dir)
}
