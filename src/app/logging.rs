//! Diagnostic logging on stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Verbosity requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "warn,ci_jobs=info",
            Verbosity::Debug => "warn,ci_jobs=debug",
            Verbosity::Trace => "warn,ci_jobs=trace",
        }
    }
}

/// Build the filter: explicit directives win over the verbosity flags.
pub fn make_filter(verbosity: Verbosity, directives: Option<&str>) -> Result<EnvFilter, AppError> {
    let directives = directives.unwrap_or(verbosity.directive());
    EnvFilter::try_new(directives).map_err(|_| AppError::InvalidLogFilter(directives.to_string()))
}

/// Install the global subscriber.
pub fn init(verbosity: Verbosity, directives: Option<&str>) -> Result<(), AppError> {
    let filter = make_filter(verbosity, directives)?;
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).without_time();

    // A subscriber may already be installed when the library is embedded.
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
    Ok(())
}
