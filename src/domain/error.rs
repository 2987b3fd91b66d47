use std::io;

use thiserror::Error;

/// Library-wide error type for ci-jobs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No job file found while searching upward from the start directory.
    #[error("No job file found in {start} or any parent directory (looked for {searched})")]
    ConfigNotFound { start: String, searched: String },

    /// Explicitly requested job file does not exist.
    #[error("Job file not found: {0}")]
    DocumentMissing(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Document declares a format version this build cannot run.
    #[error("Unsupported job file version '{found}' (supported: {supported})")]
    UnsupportedVersion { found: String, supported: String },

    /// Group listed more than once in `groups`.
    #[error("Group '{0}' is listed more than once")]
    DuplicateGroup(String),

    /// Job name declared more than once in `jobs`.
    #[error("Job '{0}' is defined more than once")]
    DuplicateJob(String),

    /// Job names a group that is absent from `groups`.
    #[error("Job '{job}' references group '{group}', which is not listed in groups")]
    DanglingGroupReference { job: String, group: String },

    /// Job has no commands.
    #[error("Job '{0}' has an empty script")]
    EmptyScript(String),

    /// Script line is empty or whitespace only.
    #[error("Job '{job}' has a blank command at script line {}", .index + 1)]
    BlankCommand { job: String, index: usize },

    /// Selected job does not exist.
    #[error("Job '{name}' not found. Available: {available}")]
    JobNotFound { name: String, available: String },

    /// Selected group does not exist.
    #[error("Group '{name}' not found. Available: {available}")]
    GroupNotFound { name: String, available: String },

    /// Shell could not be started for a command.
    #[error("Failed to start `{command}` for job '{job}': {details}")]
    SpawnFailed { job: String, command: String, details: String },

    /// Command exited unsuccessfully.
    #[error("Job '{job}' failed running `{command}` ({})", describe_exit(.code))]
    CommandFailed { job: String, command: String, code: Option<i32> },

    /// Log filter directive could not be parsed.
    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl AppError {
    pub(crate) fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Process exit status the CLI reports for this error.
    ///
    /// Command failures forward the failing command's own exit code; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
