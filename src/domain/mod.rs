pub mod document;
pub mod error;
pub mod plan;
pub mod report;

pub use document::{Document, DocumentFormat, JobSpec, SUPPORTED_VERSIONS};
pub use error::AppError;
pub use plan::{ExecutionPlan, Selection, Stage};
pub use report::{GroupReport, JobFailure, JobReport, RunReport};
