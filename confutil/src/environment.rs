//! Process environment lookups.
//!
//! Home, working directory and XDG base directories are process-wide state.
//! Everything in the library that needs them takes an [`Environment`] so
//! tests can substitute fixed values with [`FixedEnvironment`].

use std::env;
use std::path::{Path, PathBuf};

/// Source of the directories the library resolves paths against.
pub trait Environment {
    /// The user's home directory.
    fn home_dir(&self) -> PathBuf;

    /// The current working directory.
    fn current_dir(&self) -> PathBuf;

    /// Base directory for per-user configuration (`$XDG_CONFIG_HOME`).
    fn config_home(&self) -> PathBuf {
        self.home_dir().join(".config")
    }

    /// Base directory for per-user caches (`$XDG_CACHE_HOME`).
    fn cache_home(&self) -> PathBuf {
        self.home_dir().join(".cache")
    }
}

/// The real process environment.
///
/// # Examples
///
/// ```
/// use confutil::{Environment, SystemEnvironment};
///
/// let env = SystemEnvironment;
/// assert!(env.home_dir().is_absolute());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Reads an XDG variable, ignoring relative values as the XDG base
    /// directory specification requires.
    fn xdg_dir(var: &str) -> Option<PathBuf> {
        env::var_os(var)
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
    }
}

impl Environment for SystemEnvironment {
    /// `$HOME` when set, then the platform home, then `/`.
    fn home_dir(&self) -> PathBuf {
        env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(home::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Falls back to `/` when the working directory has been removed.
    fn current_dir(&self) -> PathBuf {
        env::current_dir().unwrap_or_else(|e| {
            log::debug!("cannot determine current directory: {e}");
            PathBuf::from("/")
        })
    }

    fn config_home(&self) -> PathBuf {
        Self::xdg_dir("XDG_CONFIG_HOME").unwrap_or_else(|| self.home_dir().join(".config"))
    }

    fn cache_home(&self) -> PathBuf {
        Self::xdg_dir("XDG_CACHE_HOME").unwrap_or_else(|| self.home_dir().join(".cache"))
    }
}

/// An environment with fixed directories.
///
/// # Examples
///
/// ```
/// use confutil::{Environment, FixedEnvironment};
/// use std::path::Path;
///
/// let env = FixedEnvironment::new("/home/alice", "/work");
/// assert_eq!(env.home_dir(), Path::new("/home/alice"));
/// assert_eq!(env.config_home(), Path::new("/home/alice/.config"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    home: PathBuf,
    cwd: PathBuf,
    config_home: Option<PathBuf>,
    cache_home: Option<PathBuf>,
}

impl FixedEnvironment {
    /// Creates an environment with the given home and working directories.
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
            config_home: None,
            cache_home: None,
        }
    }

    /// Overrides the configuration base directory.
    #[must_use]
    pub fn with_config_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_home = Some(dir.into());
        self
    }

    /// Overrides the cache base directory.
    #[must_use]
    pub fn with_cache_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_home = Some(dir.into());
        self
    }

    /// Creates an environment rooted entirely under `root`, useful with a
    /// temporary directory: home is `root/home`, cwd is `root/cwd`.
    pub fn rooted_at(root: &Path) -> Self {
        Self::new(root.join("home"), root.join("cwd"))
    }
}

impl Environment for FixedEnvironment {
    fn home_dir(&self) -> PathBuf {
        self.home.clone()
    }

    fn current_dir(&self) -> PathBuf {
        self.cwd.clone()
    }

    fn config_home(&self) -> PathBuf {
        self.config_home
            .clone()
            .unwrap_or_else(|| self.home.join(".config"))
    }

    fn cache_home(&self) -> PathBuf {
        self.cache_home
            .clone()
            .unwrap_or_else(|| self.home.join(".cache"))
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn home_dir(&self) -> PathBuf {
        (**self).home_dir()
    }

    fn current_dir(&self) -> PathBuf {
        (**self).current_dir()
    }

    fn config_home(&self) -> PathBuf {
        (**self).config_home()
    }

    fn cache_home(&self) -> PathBuf {
        (**self).cache_home()
    }
}
