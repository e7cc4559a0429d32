//! Build script for confutil-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR. Build scripts cannot depend on the crate being built, so the
//! command structure is described here as well.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("confutil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filesystem and text utilities for line-based state files")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read settings from this file instead of the default location")
                .value_name("PATH")
                .global(true)
                .env("CONFUTIL_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path to an absolute one, creating its parent directory"),
            Command::new("dirs").about("Show the home, config and cache directories"),
            Command::new("lines").about("Print the unique entries of a line-based file"),
            Command::new("search").about("Find a substring ignoring ASCII case"),
            Command::new("replace").about("Replace every occurrence of a string"),
            Command::new("tmp").about("Write content to a new temporary file"),
            Command::new("touch").about("Create an empty file if it does not exist"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("confutil.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
