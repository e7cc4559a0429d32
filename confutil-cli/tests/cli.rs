//! Integration tests for the confutil CLI.
//!
//! These tests verify argument parsing, help text and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// With subcommands required, no arguments should fail and show usage.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("confutil"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("lines"));
}

#[test]
fn test_cli_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");

    cmd.arg("frobnicate").assert().failure();
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("confutil").expect("Failed to find confutil binary");

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confutil"));
}
