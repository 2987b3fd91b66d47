use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandStatus};

/// Shell program and the flag that makes it run a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub flag: String,
}

impl Shell {
    /// Custom shell program, invoked as `<program> -c <command>`.
    pub fn program(program: impl Into<String>) -> Self {
        Self { program: program.into(), flag: "-c".to_string() }
    }
}

impl Default for Shell {
    #[cfg(windows)]
    fn default() -> Self {
        Self { program: "cmd".to_string(), flag: "/C".to_string() }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self::program("sh")
    }
}

/// Runs script lines through a shell in a fixed working directory.
///
/// Standard output and error are inherited; standard input is closed so
/// concurrently running jobs never compete for the terminal.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    shell: Shell,
    working_dir: PathBuf,
}

impl ShellCommandRunner {
    pub fn new(shell: Shell, working_dir: PathBuf) -> Self {
        Self { shell, working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, job: &str, command: &str) -> Result<CommandStatus, AppError> {
        tracing::info!(job, command, "running command");

        let status = Command::new(&self.shell.program)
            .arg(&self.shell.flag)
            .arg(command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| AppError::SpawnFailed {
                job: job.to_string(),
                command: command.to_string(),
                details: e.to_string(),
            })?;

        let status = CommandStatus::from(status);
        tracing::debug!(job, command, code = ?status.code(), "command finished");
        Ok(status)
    }
}
