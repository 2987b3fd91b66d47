//! Shared testing utilities for ci-jobs CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Job file with a `fmt` group ahead of a `check` group.
#[allow(dead_code)]
pub const CI_JOBS: &str = r#"version: "1.0"
jobs:
  fmt:
    script:
      - echo fmt >> order.log
    group: fmt
  clippy:
    script:
      - echo clippy >> order.log
    group: check
  tests:
    script:
      - echo build >> order.log
      - echo tests >> order.log
    group: check
groups:
  - fmt
  - check
"#;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ci-jobs` binary within the project directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `ci-jobs` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("ci-jobs").expect("Failed to locate ci-jobs binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("CI_JOBS_FILE")
            .env_remove("CI_JOBS_SHELL")
            .env_remove("CI_JOBS_LOG");
        cmd
    }

    /// Write `ci-jobs.yml` into the project directory.
    pub fn write_jobs(&self, content: &str) -> PathBuf {
        self.write_file("ci-jobs.yml", content)
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create a nested directory inside the project directory.
    pub fn subdir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create subdirectory");
        path
    }

    /// Lines of a file written by job commands.
    pub fn read_lines(&self, relative: &str) -> Vec<String> {
        fs::read_to_string(self.work_dir.join(relative))
            .expect("Failed to read file")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Assert that a file written by a job exists.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }

    /// Assert that a file a job would have written does not exist.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }

    /// Execute a closure after temporarily switching into the project directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}
