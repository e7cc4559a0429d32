//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointing into a temporary directory, the
//! working directory set to a scratch directory, and all `CONFUTIL_*` and
//! XDG variables cleared.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the caller's environment into a test.
const ISOLATED_VARS: [&str; 6] = [
    "XDG_CONFIG_HOME",
    "XDG_CACHE_HOME",
    "CONFUTIL_CONFIG",
    "CONFUTIL_PROJECT",
    "CONFUTIL_TEMP_PREFIX",
    "CONFUTIL_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// `HOME` for spawned commands
    pub home: PathBuf,
    /// Working directory for spawned commands
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with `home/` and `work/` directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let home = temp_path.join("home");
        let work = temp_path.join("work");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&work).expect("Failed to create work dir");

        Self {
            temp_dir,
            temp_path,
            home,
            work,
        }
    }

    /// Get a command builder running the binary inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home).current_dir(&self.work);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory under the temporary directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run the command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
