//! Job dispatcher.
//!
//! Groups run strictly in listed order. Jobs inside a group run concurrently
//! (one scoped thread each) unless `parallel` is off. A failing job never
//! cancels its siblings; once a group has failed, later groups are skipped
//! unless `keep_going` is set.

use std::thread;
use std::time::Instant;

use crate::domain::{
    AppError, Document, ExecutionPlan, GroupReport, JobFailure, JobReport, JobSpec, RunReport,
    Selection, Stage,
};
use crate::ports::CommandRunner;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub selection: Selection,
    pub parallel: bool,
    pub keep_going: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { selection: Selection::all(), parallel: true, keep_going: false }
    }
}

/// A planned group with owned copies of its selected jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedGroup {
    pub group: String,
    pub jobs: Vec<JobSpec>,
}

/// Resolve the selection without running anything.
pub fn plan(document: &Document, selection: &Selection) -> Result<Vec<PlannedGroup>, AppError> {
    let plan = ExecutionPlan::build(document, selection)?;
    Ok(plan
        .stages()
        .iter()
        .map(|stage| PlannedGroup {
            group: stage.group.to_string(),
            jobs: stage.jobs.iter().map(|job| (*job).clone()).collect(),
        })
        .collect())
}

/// Plan and run the selected jobs of `document`.
///
/// Selection errors surface before any command starts. Job failures do not
/// produce `Err`; they are recorded in the report (see [`RunReport::into_result`]).
pub fn execute<R: CommandRunner>(
    document: &Document,
    runner: &R,
    options: &RunOptions,
) -> Result<RunReport, AppError> {
    let plan = ExecutionPlan::build(document, &options.selection)?;
    Ok(dispatch(&plan, runner, options))
}

pub fn dispatch<R: CommandRunner>(
    plan: &ExecutionPlan<'_>,
    runner: &R,
    options: &RunOptions,
) -> RunReport {
    let mut report = RunReport::default();
    let mut stages = plan.stages().iter();

    while let Some(stage) = stages.next() {
        tracing::info!(group = stage.group, jobs = stage.jobs.len(), "starting group");

        let jobs = if options.parallel && stage.jobs.len() > 1 {
            run_concurrently(stage, runner)
        } else {
            stage.jobs.iter().map(|job| run_job(job, runner)).collect()
        };

        let group = GroupReport { name: stage.group.to_string(), jobs };
        let failed = !group.succeeded();
        if failed {
            tracing::warn!(group = stage.group, "group failed");
        } else {
            tracing::info!(group = stage.group, "group passed");
        }
        report.groups.push(group);

        if failed && !options.keep_going {
            report.skipped_groups = stages.by_ref().map(|stage| stage.group.to_string()).collect();
            break;
        }
    }

    report
}

fn run_concurrently<R: CommandRunner>(stage: &Stage<'_>, runner: &R) -> Vec<JobReport> {
    thread::scope(|scope| {
        let handles: Vec<_> =
            stage.jobs.iter().map(|job| scope.spawn(move || run_job(job, runner))).collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}

/// Run one job's script in order, stopping at the first unsuccessful command.
fn run_job<R: CommandRunner>(job: &JobSpec, runner: &R) -> JobReport {
    let _span = tracing::info_span!("job", job = %job.name, group = %job.group).entered();
    tracing::info!("starting job");

    let started = Instant::now();
    let mut failure = None;
    let mut commands_run = 0;

    for command in &job.script {
        commands_run += 1;
        match runner.run(&job.name, command) {
            Ok(status) if status.success() => {}
            Ok(status) => {
                failure = Some(JobFailure::Exited { command: command.clone(), code: status.code() });
                break;
            }
            Err(err) => {
                let details = match err {
                    AppError::SpawnFailed { details, .. } => details,
                    other => other.to_string(),
                };
                failure = Some(JobFailure::Spawn { command: command.clone(), details });
                break;
            }
        }
    }

    let elapsed = started.elapsed();
    match &failure {
        Some(failure) => {
            tracing::warn!(command = failure.command(), elapsed = ?elapsed, "job failed")
        }
        None => tracing::info!(elapsed = ?elapsed, "job passed"),
    }

    JobReport {
        name: job.name.clone(),
        group: job.group.clone(),
        commands_run,
        elapsed,
        failure,
    }
}
