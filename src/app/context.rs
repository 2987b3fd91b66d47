use crate::app::config::LoadedDocument;
use crate::ports::CommandRunner;

/// Application context holding the loaded job file and the command runner.
pub struct AppContext<R: CommandRunner> {
    loaded: LoadedDocument,
    runner: R,
}

impl<R: CommandRunner> AppContext<R> {
    pub fn new(loaded: LoadedDocument, runner: R) -> Self {
        Self { loaded, runner }
    }

    pub fn loaded(&self) -> &LoadedDocument {
        &self.loaded
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
