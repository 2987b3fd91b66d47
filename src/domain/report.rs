//! Outcome of a dispatch run.

use std::time::Duration;

use crate::domain::AppError;

/// Why a job stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFailure {
    /// A command ran and exited unsuccessfully (`code` is `None` when killed by a signal).
    Exited { command: String, code: Option<i32> },
    /// The shell could not be started for a command.
    Spawn { command: String, details: String },
}

impl JobFailure {
    pub fn command(&self) -> &str {
        match self {
            JobFailure::Exited { command, .. } | JobFailure::Spawn { command, .. } => command,
        }
    }

    pub fn to_error(&self, job: &str) -> AppError {
        match self {
            JobFailure::Exited { command, code } => {
                AppError::CommandFailed { job: job.to_string(), command: command.clone(), code: *code }
            }
            JobFailure::Spawn { command, details } => AppError::SpawnFailed {
                job: job.to_string(),
                command: command.clone(),
                details: details.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub name: String,
    pub group: String,
    /// Commands started, including the failing one.
    pub commands_run: usize,
    pub elapsed: Duration,
    pub failure: Option<JobFailure>,
}

impl JobReport {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    pub fn error(&self) -> Option<AppError> {
        self.failure.as_ref().map(|failure| failure.to_error(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub jobs: Vec<JobReport>,
}

impl GroupReport {
    pub fn succeeded(&self) -> bool {
        self.jobs.iter().all(JobReport::succeeded)
    }

    pub fn failed_jobs(&self) -> impl Iterator<Item = &JobReport> {
        self.jobs.iter().filter(|job| !job.succeeded())
    }
}

/// Everything a dispatch run did, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub groups: Vec<GroupReport>,
    /// Groups never started because an earlier group failed.
    pub skipped_groups: Vec<String>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.groups.iter().all(GroupReport::succeeded)
    }

    /// First failing job in group order, then job name order.
    pub fn first_failure(&self) -> Option<&JobReport> {
        self.groups.iter().flat_map(GroupReport::failed_jobs).next()
    }

    pub fn job_count(&self) -> usize {
        self.groups.iter().map(|group| group.jobs.len()).sum()
    }

    /// Turn the first failure into its error, keeping the report on success.
    pub fn into_result(self) -> Result<Self, AppError> {
        let error = self.first_failure().and_then(JobReport::error);
        match error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
