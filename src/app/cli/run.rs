//! Run command implementation.

use clap::Args;

use crate::app::api::{self, PlannedGroup, RunOptions};
use crate::app::config::Settings;
use crate::domain::{AppError, GroupReport, RunReport, Selection};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Jobs to run (default: every job)
    pub jobs: Vec<String>,
    /// Run every job of these groups (repeatable)
    #[arg(short = 'g', long = "group")]
    pub groups: Vec<String>,
    /// Run jobs of a group one after another instead of concurrently
    #[arg(short = 's', long)]
    pub sequential: bool,
    /// Keep starting later groups after a group fails
    #[arg(short = 'k', long)]
    pub keep_going: bool,
    /// Print the execution plan without running anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

pub fn run_jobs(settings: &Settings, args: RunArgs) -> Result<i32, AppError> {
    let selection = Selection { jobs: args.jobs, groups: args.groups };

    if args.dry_run {
        let planned = api::plan(settings, &selection)?;
        print_plan(&planned);
        return Ok(0);
    }

    let options = RunOptions { selection, parallel: !args.sequential, keep_going: args.keep_going };
    let report = api::run(settings, &options)?;
    print_summary(&report);
    report.into_result().map(|_| 0)
}

fn print_plan(planned: &[PlannedGroup]) {
    if planned.is_empty() {
        println!("Nothing to run");
        return;
    }
    for group in planned {
        println!("{}", group.group);
        for job in &group.jobs {
            println!("  {}", job.name);
            for command in &job.script {
                println!("    $ {}", command);
            }
        }
    }
}

fn print_summary(report: &RunReport) {
    if report.groups.is_empty() {
        println!("Nothing to run");
        return;
    }
    for group in &report.groups {
        println!("{}", group_line(group));
    }
    for group in &report.skipped_groups {
        println!("⏭️  {}: skipped", group);
    }
    if report.succeeded() {
        println!("✅ All {} job(s) passed", report.job_count());
    }
}

fn group_line(group: &GroupReport) -> String {
    if group.succeeded() {
        return format!("✅ {}: {} job(s) passed", group.name, group.jobs.len());
    }
    let failed: Vec<String> = group
        .failed_jobs()
        .map(|job| match &job.failure {
            Some(failure) => format!("{} (`{}`)", job.name, failure.command()),
            None => job.name.clone(),
        })
        .collect();
    format!("❌ {}: failed {}", group.name, failed.join(", "))
}
