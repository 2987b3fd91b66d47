//! Job file validation report.

use std::path::PathBuf;

use crate::app::config::LoadedDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub jobs: usize,
    pub groups: usize,
    /// Groups no job belongs to; valid, but probably a mistake.
    pub empty_groups: Vec<String>,
}

/// Summarize an already validated document.
///
/// Loading performs every hard check; this only gathers counts and warnings.
pub fn execute(loaded: &LoadedDocument) -> CheckOutcome {
    let document = &loaded.document;
    CheckOutcome {
        path: loaded.path.clone(),
        jobs: document.jobs.len(),
        groups: document.groups.len(),
        empty_groups: document.empty_groups().into_iter().map(str::to_string).collect(),
    }
}
