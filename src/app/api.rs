//! API facade for the application.
//!
//! These functions glue together job file discovery, context creation, and
//! command execution. The `_at` variants take an explicit start directory;
//! the others start from the current directory.

use std::path::Path;

use crate::adapters::ShellCommandRunner;
use crate::app::AppContext;
use crate::app::commands::{check, list, run};
use crate::app::config::{LoadedDocument, Settings, load_document, locate_document};
use crate::domain::{AppError, DocumentFormat, RunReport, Selection};

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::list::{GroupListing, JobListing};
pub use crate::app::commands::run::{PlannedGroup, RunOptions};

fn create_context(
    start: &Path,
    settings: &Settings,
) -> Result<AppContext<ShellCommandRunner>, AppError> {
    let loaded = load_at(start, settings)?;
    let runner = ShellCommandRunner::new(settings.shell.clone(), loaded.root().to_path_buf());
    tracing::debug!(
        working_dir = %runner.working_dir().display(),
        shell = %settings.shell.program,
        "prepared command runner"
    );
    Ok(AppContext::new(loaded, runner))
}

// =============================================================================
// Loading
// =============================================================================

/// Locate and load the job file, starting from the current directory.
pub fn load(settings: &Settings) -> Result<LoadedDocument, AppError> {
    load_at(&std::env::current_dir()?, settings)
}

/// Locate and load the job file, starting from `start`.
pub fn load_at(start: &Path, settings: &Settings) -> Result<LoadedDocument, AppError> {
    let path = locate_document(start, settings.file.as_deref())?;
    load_document(&path)
}

// =============================================================================
// Inspection
// =============================================================================

/// Validate the job file and summarize it.
pub fn check(settings: &Settings) -> Result<CheckOutcome, AppError> {
    check_at(&std::env::current_dir()?, settings)
}

pub fn check_at(start: &Path, settings: &Settings) -> Result<CheckOutcome, AppError> {
    Ok(check::execute(&load_at(start, settings)?))
}

/// List groups in execution order with their jobs.
pub fn list(settings: &Settings) -> Result<Vec<GroupListing>, AppError> {
    list_at(&std::env::current_dir()?, settings)
}

pub fn list_at(start: &Path, settings: &Settings) -> Result<Vec<GroupListing>, AppError> {
    Ok(list::execute(&load_at(start, settings)?.document))
}

/// Render the normalized job file.
pub fn show(settings: &Settings, format: DocumentFormat) -> Result<String, AppError> {
    show_at(&std::env::current_dir()?, settings, format)
}

pub fn show_at(
    start: &Path,
    settings: &Settings,
    format: DocumentFormat,
) -> Result<String, AppError> {
    load_at(start, settings)?.document.render(format)
}

/// Resolve a selection into the groups and jobs that would run.
pub fn plan(settings: &Settings, selection: &Selection) -> Result<Vec<PlannedGroup>, AppError> {
    plan_at(&std::env::current_dir()?, settings, selection)
}

pub fn plan_at(
    start: &Path,
    settings: &Settings,
    selection: &Selection,
) -> Result<Vec<PlannedGroup>, AppError> {
    run::plan(&load_at(start, settings)?.document, selection)
}

// =============================================================================
// Run
// =============================================================================

/// Run the selected jobs from the current directory's job file.
///
/// Job failures are recorded in the returned report; use
/// [`RunReport::into_result`] to turn them into an error.
pub fn run(settings: &Settings, options: &RunOptions) -> Result<RunReport, AppError> {
    run_at(&std::env::current_dir()?, settings, options)
}

pub fn run_at(
    start: &Path,
    settings: &Settings,
    options: &RunOptions,
) -> Result<RunReport, AppError> {
    let ctx = create_context(start, settings)?;
    run::execute(&ctx.loaded().document, ctx.runner(), options)
}
