//! CLI Adapter.

mod inspect;
mod run;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::config::Settings;
use crate::app::logging::{self, Verbosity};
use crate::domain::{AppError, DocumentFormat};

#[derive(Parser)]
#[command(name = "ci-jobs")]
#[command(version)]
#[command(about = "Run grouped CI jobs declared in a job file", long_about = None)]
struct Cli {
    /// Job file to use instead of searching upward for ci-jobs.yml
    #[arg(short = 'f', long, global = true)]
    file: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run jobs group by group (the default command)
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// List groups in execution order with their jobs
    #[clap(visible_alias = "ls")]
    List,
    /// Validate the job file
    #[clap(visible_alias = "c")]
    Check,
    /// Print the normalized job file
    Show {
        /// Output format: yaml, toml, or json
        #[arg(long, default_value_t = DocumentFormat::Yaml)]
        format: DocumentFormat,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let settings = Settings::from_env().with_file(cli.file);
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose), settings.log_filter.as_deref())?;

    match cli.command.unwrap_or_else(|| Commands::Run(run::RunArgs::default())) {
        Commands::Run(args) => run::run_jobs(&settings, args),
        Commands::List => inspect::run_list(&settings).map(|_| 0),
        Commands::Check => inspect::run_check(&settings).map(|_| 0),
        Commands::Show { format } => inspect::run_show(&settings, format).map(|_| 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["ci-jobs"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_accepts_jobs_and_groups() {
        let cli =
            Cli::try_parse_from(["ci-jobs", "run", "clippy", "-g", "fmt", "--sequential", "-k"])
                .unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.jobs, vec!["clippy"]);
                assert_eq!(args.groups, vec!["fmt"]);
                assert!(args.sequential);
                assert!(args.keep_going);
                assert!(!args.dry_run);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn show_parses_format() {
        let cli = Cli::try_parse_from(["ci-jobs", "show", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { format: DocumentFormat::Json })));
        assert!(Cli::try_parse_from(["ci-jobs", "show", "--format", "xml"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["ci-jobs", "-q", "-v", "list"]).is_err());
    }
}
