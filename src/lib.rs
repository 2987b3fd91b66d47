//! ci-jobs: run grouped CI jobs (format, lint, test) declared in a job file.
//!
//! A job file lists `groups` in execution order and `jobs`, each with a
//! `script` of shell commands and the `group` it belongs to. Groups run one
//! after another; the jobs of a group run concurrently.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::ShellCommandRunner;
use app::commands::run as dispatch;

pub use app::api::{
    CheckOutcome, GroupListing, JobListing, PlannedGroup, RunOptions, check_at, list_at, load,
    load_at, plan_at, run_at, show_at,
};
pub use app::config::{LoadedDocument, Settings};
pub use domain::{
    AppError, Document, DocumentFormat, GroupReport, JobFailure, JobReport, JobSpec, RunReport,
    Selection,
};

/// Run every job of `document` from the current directory with default options.
///
/// Returns the report when every job passed, or the first failure as
/// [`AppError::CommandFailed`] (or [`AppError::SpawnFailed`]).
pub fn run(document: &Document) -> Result<RunReport, AppError> {
    let runner = ShellCommandRunner::new(Settings::default().shell, std::env::current_dir()?);
    dispatch::execute(document, &runner, &RunOptions::default())?.into_result()
}

/// Parse job file text in the given format.
pub fn parse(content: &str, format: DocumentFormat) -> Result<Document, AppError> {
    Document::parse(content, format, "job file")
}
