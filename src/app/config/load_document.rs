//! Job file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Document, DocumentFormat};

/// A validated document together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub document: Document,
}

impl LoadedDocument {
    /// Directory the job file lives in; every command runs from here.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Read, parse, and validate the job file at `path`.
///
/// The format follows the file extension.
pub fn load_document(path: &Path) -> Result<LoadedDocument, AppError> {
    let content = fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    let document = Document::parse(&content, format, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        %format,
        jobs = document.jobs.len(),
        groups = document.groups.len(),
        "loaded job file"
    );

    Ok(LoadedDocument { path: path.to_path_buf(), document })
}
