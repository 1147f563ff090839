#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// `fiducia` binary isolated from the user's `~/.fiducia` config.
pub fn fiducia(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fiducia");
    cmd.env_remove("RUST_LOG")
        .arg("--color")
        .arg("never")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

/// Write `contents` under `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Write a JSON value under `dir` and return the path.
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    write_file(dir, name, &value.to_string())
}
