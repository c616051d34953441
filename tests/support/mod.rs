//! Test support utilities for vaultdiff integration tests.
//!
//! Provides an isolated working directory per test plus helpers for
//! writing and reading snapshot stores.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

use vaultdiff::core::secret::{SecretRecord, SecretSet};
use vaultdiff::core::snapshot;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a snapshot store named `file` with the given name/value pairs.
    pub fn store(&self, file: &str, pairs: &[(&str, &str)]) -> PathBuf {
        let set: SecretSet = pairs
            .iter()
            .map(|(k, v)| SecretRecord::new(*k, *v))
            .collect();
        let path = self.dir.path().join(file);
        snapshot::save(&path, &set).expect("failed to write snapshot fixture");
        path
    }

    /// Read back a snapshot store written by the CLI.
    pub fn read_store(&self, file: &str) -> SecretSet {
        snapshot::load(&self.dir.path().join(file)).expect("failed to read snapshot")
    }

    /// Write a `.vaultdiff.toml` with store aliases.
    pub fn config(&self, toml: &str) {
        std::fs::write(self.dir.path().join(".vaultdiff.toml"), toml)
            .expect("failed to write config");
    }

    /// Create a vaultdiff command running inside the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vaultdiff").expect("failed to find vaultdiff binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `vaultdiff diff <source> <target>`.
    pub fn diff(&self, source: &str, target: &str) -> Output {
        self.cmd()
            .args(["diff", source, target])
            .output()
            .expect("failed to run vaultdiff diff")
    }

    /// Shortcut for `vaultdiff sync <source> <target>` with extra args.
    pub fn sync(&self, source: &str, target: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args(["sync", source, target])
            .args(extra)
            .output()
            .expect("failed to run vaultdiff sync")
    }
}
