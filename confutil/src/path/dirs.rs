//! Per-project configuration and cache directories.

use std::fs::{DirBuilder, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::environment::{Environment, SystemEnvironment};
use crate::error::{Error, Result};

/// Mode for shared application directories (config, cache).
pub const PUBLIC_DIR_MODE: u32 = 0o755;

/// Mode for directories created on behalf of a resolved path.
pub const PRIVATE_DIR_MODE: u32 = 0o700;

/// Creates `path` and all missing ancestors with the given permission mode.
///
/// The mode is applied on Unix only and is subject to the process umask.
pub(crate) fn create_dir_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}

/// Creates `dir` (mode 0755, with parents) unless it is already a directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
///
/// # Examples
///
/// ```
/// use confutil::path::create_dir_if_missing;
///
/// let temp = tempfile::tempdir().unwrap();
/// let dir = temp.path().join("a/b");
/// create_dir_if_missing(&dir).unwrap();
/// assert!(dir.is_dir());
/// ```
pub fn create_dir_if_missing(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    create_dir_with_mode(dir, PUBLIC_DIR_MODE).map_err(|e| Error::InvalidPath {
        path: dir.to_path_buf(),
        reason: format!("cannot create directory: {e}"),
    })
}

/// Creates an empty `file` unless a regular file already exists there.
///
/// Existing content is never truncated.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for appending, for example
/// because `file` names a directory.
pub fn create_file_if_missing(file: &Path) -> Result<()> {
    if file.is_file() {
        return Ok(());
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map(drop)
        .map_err(|e| Error::InvalidPath {
            path: file.to_path_buf(),
            reason: format!("cannot create file: {e}"),
        })
}

/// Configuration and cache directories for one project.
///
/// # Examples
///
/// ```
/// use confutil::{AppDirs, FixedEnvironment};
///
/// let temp = tempfile::tempdir().unwrap();
/// let dirs = AppDirs::with_environment("demo", FixedEnvironment::rooted_at(temp.path()));
///
/// let config = dirs.config_dir().unwrap();
/// assert!(config.ends_with(".config/demo"));
/// assert!(config.is_dir());
/// ```
#[derive(Debug, Clone)]
pub struct AppDirs<E = SystemEnvironment> {
    project: String,
    env: E,
}

impl AppDirs<SystemEnvironment> {
    /// Directories for `project` in the real process environment.
    pub fn new(project: impl Into<String>) -> Self {
        Self::with_environment(project, SystemEnvironment)
    }
}

impl<E: Environment> AppDirs<E> {
    /// Directories for `project` in the given environment.
    pub fn with_environment(project: impl Into<String>, env: E) -> Self {
        Self {
            project: project.into(),
            env,
        }
    }

    /// The project name used as the directory name.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The user's home directory.
    pub fn home_dir(&self) -> PathBuf {
        self.env.home_dir()
    }

    /// `<config_home>/<project>`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let dir = self.env.config_home().join(&self.project);
        create_dir_if_missing(&dir)?;
        Ok(dir)
    }

    /// `<cache_home>/<project>`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let dir = self.env.cache_home().join(&self.project);
        create_dir_if_missing(&dir)?;
        Ok(dir)
    }

    /// Path of `name` inside the config directory; the file is not created.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn config_file(&self, name: &str) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_and_cache_dirs_created() {
        let temp = TempDir::new().unwrap();
        let dirs = AppDirs::with_environment("proj", FixedEnvironment::rooted_at(temp.path()));

        let config = dirs.config_dir().unwrap();
        let cache = dirs.cache_dir().unwrap();

        assert_eq!(config, temp.path().join("home/.config/proj"));
        assert_eq!(cache, temp.path().join("home/.cache/proj"));
        assert!(config.is_dir());
        assert!(cache.is_dir());
    }

    #[test]
    fn test_config_dir_respects_config_home() {
        let temp = TempDir::new().unwrap();
        let env = FixedEnvironment::rooted_at(temp.path()).with_config_home(temp.path().join("xdg"));
        let dirs = AppDirs::with_environment("proj", env);

        assert_eq!(dirs.config_dir().unwrap(), temp.path().join("xdg/proj"));
        assert_eq!(
            dirs.config_file("config.yaml").unwrap(),
            temp.path().join("xdg/proj/config.yaml")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_created_dir_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("shared");
        create_dir_if_missing(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o200, 0o200);
        assert_eq!(mode & !PUBLIC_DIR_MODE, 0);
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(create_dir_if_missing(&file).is_err());
    }

    #[test]
    fn test_create_file_if_missing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("history");

        create_file_if_missing(&file).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn test_create_file_keeps_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("history");
        fs::write(&file, "keep me\n").unwrap();

        create_file_if_missing(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me\n");
    }

    #[test]
    fn test_create_file_on_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(create_file_if_missing(temp.path()).is_err());
    }
}
