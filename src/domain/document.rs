//! Job file document model.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// Document format versions this build can run.
pub const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// A named unit of work: an ordered script bound to one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSpec {
    #[serde(skip)]
    pub name: String,
    pub script: Vec<String>,
    pub group: String,
}

impl JobSpec {
    pub fn new<I, S>(name: impl Into<String>, group: impl Into<String>, script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            script: script.into_iter().map(Into::into).collect(),
            group: group.into(),
        }
    }
}

/// Parsed and validated job file.
///
/// `groups` is serialized ahead of `jobs` so the TOML rendering keeps plain
/// values before tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub version: String,
    pub groups: Vec<String>,
    pub jobs: BTreeMap<String, JobSpec>,
}

impl Document {
    /// Build a document from parts, enforcing every document invariant.
    ///
    /// The version is checked before anything else.
    pub fn new(
        version: impl Into<String>,
        groups: Vec<String>,
        jobs: impl IntoIterator<Item = JobSpec>,
    ) -> Result<Self, AppError> {
        let version = version.into();
        check_version(&version)?;

        let mut seen = BTreeSet::new();
        for group in &groups {
            if !seen.insert(group.as_str()) {
                return Err(AppError::DuplicateGroup(group.clone()));
            }
        }

        let mut by_name: BTreeMap<String, JobSpec> = BTreeMap::new();
        for job in jobs {
            match by_name.entry(job.name.clone()) {
                Entry::Occupied(_) => return Err(AppError::DuplicateJob(job.name)),
                Entry::Vacant(slot) => {
                    slot.insert(job);
                }
            }
        }
        let jobs = by_name;

        for job in jobs.values() {
            if job.script.is_empty() {
                return Err(AppError::EmptyScript(job.name.clone()));
            }
            if let Some(index) = job.script.iter().position(|line| line.trim().is_empty()) {
                return Err(AppError::BlankCommand { job: job.name.clone(), index });
            }
            if !seen.contains(job.group.as_str()) {
                return Err(AppError::DanglingGroupReference {
                    job: job.name.clone(),
                    group: job.group.clone(),
                });
            }
        }

        Ok(Self { version, groups, jobs })
    }

    /// Parse document text in the given format.
    ///
    /// `what` names the source in error messages (usually the file path).
    pub fn parse(content: &str, format: DocumentFormat, what: &str) -> Result<Self, AppError> {
        let dto: dto::DocumentDto = match format {
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| AppError::parse_error(what, e))?
            }
            DocumentFormat::Toml => {
                toml::from_str(content).map_err(|e| AppError::parse_error(what, e))?
            }
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| AppError::parse_error(what, e))?
            }
        };
        dto.into_document(what)
    }

    /// Render the document in the given format.
    pub fn render(&self, format: DocumentFormat) -> Result<String, AppError> {
        match format {
            DocumentFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| AppError::parse_error("document", e))
            }
            DocumentFormat::Toml => {
                toml::to_string(self).map_err(|e| AppError::parse_error("document", e))
            }
            DocumentFormat::Json => serde_json::to_string_pretty(self)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| AppError::parse_error("document", e)),
        }
    }

    /// Jobs belonging to `group`, in name order.
    pub fn jobs_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a JobSpec> + 'a {
        self.jobs.values().filter(move |job| job.group == group)
    }

    /// Groups that no job belongs to.
    pub fn empty_groups(&self) -> Vec<&str> {
        self.groups
            .iter()
            .map(String::as_str)
            .filter(|group| self.jobs_in_group(group).next().is_none())
            .collect()
    }
}

fn check_version(version: &str) -> Result<(), AppError> {
    if SUPPORTED_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(AppError::UnsupportedVersion {
            found: version.to_string(),
            supported: SUPPORTED_VERSIONS.join(", "),
        })
    }
}

/// On-disk encoding of a job file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything unrecognized is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            "json" => Ok(DocumentFormat::Json),
            other => Err(format!("unknown format '{other}' (expected yaml, toml, or json)")),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Toml => "toml",
            DocumentFormat::Json => "json",
        };
        f.write_str(name)
    }
}

mod dto {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer};

    use super::{Document, JobSpec};
    use crate::domain::AppError;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct DocumentDto {
        pub version: Option<VersionDto>,
        pub jobs: Option<JobEntries>,
        pub groups: Option<Vec<String>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct JobDto {
        pub script: Option<Vec<String>>,
        pub group: Option<String>,
    }

    /// Job map entries in source order, repeated names included.
    #[derive(Debug)]
    pub struct JobEntries(Vec<(String, JobDto)>);

    impl<'de> Deserialize<'de> for JobEntries {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct EntriesVisitor;

            impl<'de> Visitor<'de> for EntriesVisitor {
                type Value = JobEntries;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map of job names to jobs")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JobEntries, A::Error> {
                    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                    while let Some(entry) = map.next_entry::<String, JobDto>()? {
                        entries.push(entry);
                    }
                    Ok(JobEntries(entries))
                }
            }

            deserializer.deserialize_map(EntriesVisitor)
        }
    }

    /// `version: 1.0` is accepted as well as `version: "1.0"`.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum VersionDto {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    impl VersionDto {
        fn into_string(self) -> String {
            match self {
                VersionDto::Text(text) => text,
                VersionDto::Integer(value) => value.to_string(),
                VersionDto::Float(value) => format!("{value:?}"),
            }
        }
    }

    impl DocumentDto {
        pub fn into_document(self, what: &str) -> Result<Document, AppError> {
            let missing = |key: &str| AppError::parse_error(what, format!("missing `{key}`"));

            let version = self.version.ok_or_else(|| missing("version"))?.into_string();
            let jobs = self.jobs.ok_or_else(|| missing("jobs"))?;
            let groups = self.groups.ok_or_else(|| missing("groups"))?;

            // An unsupported version wins over any job shape error.
            super::check_version(&version)?;

            let mut specs = Vec::with_capacity(jobs.0.len());
            for (name, job) in jobs.0 {
                let script = job.script.ok_or_else(|| {
                    AppError::parse_error(what, format!("job '{name}' is missing `script`"))
                })?;
                let group = job.group.ok_or_else(|| {
                    AppError::parse_error(what, format!("job '{name}' is missing `group`"))
                })?;
                specs.push(JobSpec { name, script, group });
            }

            Document::new(version, groups, specs)
        }
    }
}
