//! Job file discovery, loading, and runtime settings.
//!
//! Pure document parsing lives in `domain::document`.

mod load_document;
mod locate_document;
mod settings;

pub use load_document::{LoadedDocument, load_document};
pub use locate_document::{DOCUMENT_FILE_NAMES, locate_document};
pub use settings::{FILE_ENV, LOG_ENV, SHELL_ENV, Settings};
