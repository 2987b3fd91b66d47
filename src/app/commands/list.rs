//! Group and job listing.

use crate::domain::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub name: String,
    pub commands: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    pub name: String,
    pub jobs: Vec<JobListing>,
}

/// Every group in execution order with the jobs it contains.
pub fn execute(document: &Document) -> Vec<GroupListing> {
    document
        .groups
        .iter()
        .map(|group| GroupListing {
            name: group.clone(),
            jobs: document
                .jobs_in_group(group)
                .map(|job| JobListing { name: job.name.clone(), commands: job.script.len() })
                .collect(),
        })
        .collect()
}
