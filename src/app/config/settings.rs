//! Environment-backed runtime settings.

use std::env;
use std::path::PathBuf;

use crate::adapters::Shell;

pub const FILE_ENV: &str = "CI_JOBS_FILE";
pub const SHELL_ENV: &str = "CI_JOBS_SHELL";
pub const LOG_ENV: &str = "CI_JOBS_LOG";

/// Settings shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit job file; skips upward discovery when set.
    pub file: Option<PathBuf>,
    /// Shell used to run each script line.
    pub shell: Shell,
    /// `EnvFilter` directives overriding the verbosity flags.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Read settings from `CI_JOBS_FILE`, `CI_JOBS_SHELL`, and `CI_JOBS_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            file: non_empty(FILE_ENV).map(PathBuf::from),
            shell: non_empty(SHELL_ENV).map(Shell::program).unwrap_or_default(),
            log_filter: non_empty(LOG_ENV),
        }
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if file.is_some() {
            self.file = file;
        }
        self
    }
}
