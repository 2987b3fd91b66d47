use crate::domain::AppError;

/// Exit status of a single script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status of a command that was terminated without an exit code.
    #[cfg(test)]
    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

/// Runs one script line to completion.
///
/// Implementations are shared across the threads of a concurrently running group.
pub trait CommandRunner: Send + Sync {
    /// Run `command` on behalf of `job` and wait for it.
    ///
    /// Returns `Err` only when the command could not be started.
    fn run(&self, job: &str, command: &str) -> Result<CommandStatus, AppError>;
}
