//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment: a temporary directory holding
//! the settings store, plus command builders pre-wired to it so tests
//! never touch the developer's real working directory.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated settings store.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the settings store inside the temporary directory
    pub env_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The settings store path is computed but not created; the CLI
    /// creates it on first resolution.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let env_file = temp_path.join(".env");

        Self {
            temp_dir,
            temp_path,
            env_file,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when a test needs full control over --env-file or wants
    /// to exercise discovery with --start-dir.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("prismq-config").expect("Failed to find prismq-config binary")
    }

    /// Get a command builder wired to this environment's settings store.
    ///
    /// The returned command carries --env-file and --non-interactive, so
    /// tests are hermetic and never block on a prompt.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--env-file")
            .arg(&self.env_file)
            .arg("--non-interactive");
        cmd
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the settings store with the given contents.
    pub fn write_env_file(&self, contents: &str) {
        std::fs::write(&self.env_file, contents).expect("Failed to write settings store");
    }

    /// Read the settings store back.
    pub fn read_env_file(&self) -> String {
        std::fs::read_to_string(&self.env_file).expect("Failed to read settings store")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}
