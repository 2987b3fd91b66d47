//! Job file discovery.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// File names tried in each directory, in priority order.
pub const DOCUMENT_FILE_NAMES: &[&str] = &[
    "ci-jobs.yml",
    "ci-jobs.yaml",
    ".ci-jobs.yml",
    ".ci-jobs.yaml",
    "ci-jobs.toml",
    "ci-jobs.json",
];

/// Resolve the job file to load.
///
/// An explicit path is used as given (relative paths resolve against `start`).
/// Otherwise `start` and then each of its ancestors is searched for the first
/// known file name.
pub fn locate_document(start: &Path, explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(explicit) = explicit {
        let path = start.join(explicit);
        if !path.is_file() {
            return Err(AppError::DocumentMissing(path.display().to_string()));
        }
        return Ok(path);
    }

    for dir in start.ancestors() {
        for name in DOCUMENT_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found job file");
                return Ok(candidate);
            }
        }
    }

    Err(AppError::ConfigNotFound {
        start: start.display().to_string(),
        searched: DOCUMENT_FILE_NAMES.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_file_in_start_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ci-jobs.toml"), "").unwrap();

        let found = locate_document(dir.path(), None).unwrap();
        assert_eq!(found, dir.path().join("ci-jobs.toml"));
    }

    #[test]
    fn prefers_yaml_over_other_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ci-jobs.json"), "").unwrap();
        fs::write(dir.path().join(".ci-jobs.yml"), "").unwrap();

        let found = locate_document(dir.path(), None).unwrap();
        assert_eq!(found, dir.path().join(".ci-jobs.yml"));
    }

    #[test]
    fn walks_up_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("crates/core/src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("ci-jobs.yml"), "").unwrap();

        let found = locate_document(&nested, None).unwrap();
        assert_eq!(found, dir.path().join("ci-jobs.yml"));
    }

    #[test]
    fn explicit_path_resolves_against_start() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pipeline.yml"), "").unwrap();

        let found = locate_document(dir.path(), Some(Path::new("pipeline.yml"))).unwrap();
        assert_eq!(found, dir.path().join("pipeline.yml"));
    }

    #[test]
    fn missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ci-jobs.yml"), "").unwrap();

        let err = locate_document(dir.path(), Some(Path::new("other.yml"))).unwrap_err();
        assert!(matches!(err, AppError::DocumentMissing(_)));
    }
}
