//! Read-only commands: list, check, show.

use crate::app::api;
use crate::app::config::Settings;
use crate::domain::{AppError, DocumentFormat};

pub fn run_list(settings: &Settings) -> Result<(), AppError> {
    for group in api::list(settings)? {
        println!("{}", group.name);
        if group.jobs.is_empty() {
            println!("  (no jobs)");
        }
        for job in group.jobs {
            println!("  {} ({} command(s))", job.name, job.commands);
        }
    }
    Ok(())
}

pub fn run_check(settings: &Settings) -> Result<(), AppError> {
    let outcome = api::check(settings)?;
    println!(
        "✅ {} is valid: {} job(s) in {} group(s)",
        outcome.path.display(),
        outcome.jobs,
        outcome.groups
    );
    for group in &outcome.empty_groups {
        println!("⚠️  Group '{}' has no jobs", group);
    }
    Ok(())
}

pub fn run_show(settings: &Settings, format: DocumentFormat) -> Result<(), AppError> {
    print!("{}", api::show(settings, format)?);
    Ok(())
}
