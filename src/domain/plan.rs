//! Execution plan: which jobs run, grouped in execution order.

use crate::domain::{AppError, Document, JobSpec};

/// Jobs and groups requested on the command line.
///
/// An empty selection means every job. Otherwise a job is selected when it is
/// named directly or its group is named.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub jobs: Vec<String>,
    pub groups: Vec<String>,
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.jobs.is_empty() && self.groups.is_empty()
    }

    fn includes(&self, job: &JobSpec) -> bool {
        self.is_all() || self.jobs.contains(&job.name) || self.groups.contains(&job.group)
    }
}

/// One group of the plan with the jobs selected from it.
#[derive(Debug, Clone)]
pub struct Stage<'a> {
    pub group: &'a str,
    pub jobs: Vec<&'a JobSpec>,
}

/// Ordered stages; each stage is a barrier for the next.
#[derive(Debug, Clone)]
pub struct ExecutionPlan<'a> {
    stages: Vec<Stage<'a>>,
}

impl<'a> ExecutionPlan<'a> {
    /// Resolve `selection` against `document`.
    ///
    /// Unknown names fail before anything is planned. Groups left without any
    /// selected job are dropped.
    pub fn build(document: &'a Document, selection: &Selection) -> Result<Self, AppError> {
        for name in &selection.jobs {
            if !document.jobs.contains_key(name) {
                return Err(AppError::JobNotFound {
                    name: name.clone(),
                    available: join_names(document.jobs.keys()),
                });
            }
        }
        for name in &selection.groups {
            if !document.groups.contains(name) {
                return Err(AppError::GroupNotFound {
                    name: name.clone(),
                    available: join_names(document.groups.iter()),
                });
            }
        }

        let stages = document
            .groups
            .iter()
            .map(|group| Stage {
                group: group.as_str(),
                jobs: document.jobs_in_group(group).filter(|job| selection.includes(job)).collect(),
            })
            .filter(|stage| !stage.jobs.is_empty())
            .collect();

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage<'a>] {
        &self.stages
    }

    pub fn job_count(&self) -> usize {
        self.stages.iter().map(|stage| stage.jobs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

fn join_names<'n>(names: impl Iterator<Item = &'n String>) -> String {
    let names: Vec<&str> = names.map(String::as_str).collect();
    if names.is_empty() { "(none)".to_string() } else { names.join(", ") }
}
