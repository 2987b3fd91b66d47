use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandStatus};

/// Command runner that records every call and answers from a script table.
///
/// Commands without a scripted answer succeed.
#[derive(Default)]
pub struct ScriptedRunner {
    exits: HashMap<String, i32>,
    unspawnable: Vec<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_with(mut self, command: &str, code: i32) -> Self {
        self.exits.insert(command.to_string(), code);
        self
    }

    pub fn fail_to_spawn(mut self, command: &str) -> Self {
        self.unspawnable.push(command.to_string());
        self
    }

    /// `(job, command)` pairs in the order they ran.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, command)| command).collect()
    }

    pub fn position(&self, command: &str) -> Option<usize> {
        self.commands().iter().position(|c| c == command)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, job: &str, command: &str) -> Result<CommandStatus, AppError> {
        if self.unspawnable.iter().any(|c| c == command) {
            return Err(AppError::SpawnFailed {
                job: job.to_string(),
                command: command.to_string(),
                details: "scripted spawn failure".to_string(),
            });
        }
        self.calls.lock().unwrap().push((job.to_string(), command.to_string()));
        Ok(CommandStatus::from_code(self.exits.get(command).copied().unwrap_or(0)))
    }
}
