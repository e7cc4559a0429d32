//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the confutil library.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use confutil::file::{FnParser, UniqueListLoader};
use confutil::EntryParser;
use tempfile::TempDir;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("should create temp dir")
}

/// Writes `content` to `name` inside `dir` and returns the full path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("should write fixture");
    path
}

/// Loader that keeps each trimmed line and keys it on the whole line.
#[allow(dead_code)]
pub fn line_loader() -> UniqueListLoader<impl EntryParser<Entry = String, Key = String>> {
    UniqueListLoader::new(FnParser::new(
        |line: &str| Some(line.to_string()),
        |entry: &String| entry.clone(),
    ))
}

/// Overrides environment variables and restores the previous values when
/// dropped, also while unwinding from a failed assertion.
#[allow(dead_code)]
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `name` to `value`.
    pub fn set(name: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let guard = Self::save(&[name]);
        env::set_var(name, value);
        guard
    }

    /// Removes every variable in `names`.
    pub fn clear(names: &[&str]) -> Self {
        let guard = Self::save(names);
        for name in names {
            env::remove_var(name);
        }
        guard
    }

    fn save(names: &[&str]) -> Self {
        Self {
            saved: names
                .iter()
                .map(|name| ((*name).to_string(), env::var_os(name)))
                .collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }
}

/// Changes the working directory and restores the previous one when dropped.
#[allow(dead_code)]
pub struct CwdGuard {
    saved: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    /// Makes `dir` the working directory.
    pub fn enter(dir: &Path) -> Self {
        let saved = env::current_dir().expect("should read cwd");
        env::set_current_dir(dir).expect("should change cwd");
        Self { saved }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.saved);
    }
}
