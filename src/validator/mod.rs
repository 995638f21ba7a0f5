//! Single-document validation and directory-wide aggregation.

mod document;
mod result;
mod service;

pub use document::DocumentValidator;
pub use result::{
    FileValidation, SpecStatus, StatusCounts, ValidationReport, ValidationResult,
    checklist_fraction,
};
pub use service::SpecValidator;
