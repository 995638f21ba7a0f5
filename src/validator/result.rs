use std::path::PathBuf;

use serde::Serialize;

use crate::document::{CHECKLIST_SIZE, ChecklistInfo};

/// Verdict for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub complete: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub checklist: ChecklistInfo,
}

impl ValidationResult {
    /// A result carrying a single error, with no further analysis.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            complete: false,
            errors: vec![message.into()],
            warnings: Vec::new(),
            checklist: ChecklistInfo::default(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> SpecStatus {
        if !self.valid {
            SpecStatus::Error
        } else if self.complete {
            SpecStatus::Complete
        } else {
            SpecStatus::Incomplete
        }
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.valid
    }
}

/// The three mutually exclusive states of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecStatus {
    Complete,
    Incomplete,
    Error,
}

/// Per-status tallies; `complete + incomplete + with_errors == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub with_errors: usize,
}

impl StatusCounts {
    pub const fn record(&mut self, status: SpecStatus) {
        self.total += 1;
        match status {
            SpecStatus::Complete => self.complete += 1,
            SpecStatus::Incomplete => self.incomplete += 1,
            SpecStatus::Error => self.with_errors += 1,
        }
    }

    pub fn tally(statuses: impl IntoIterator<Item = SpecStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.record(status);
        }
        counts
    }
}

/// Result for one file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    pub path: PathBuf,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Outcome of validating a file or a whole directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// The path that was validated.
    pub root: PathBuf,
    /// Whether `root` was a directory.
    pub directory: bool,
    pub results: Vec<FileValidation>,
    pub summary: StatusCounts,
}

impl ValidationReport {
    #[must_use]
    pub fn new(root: PathBuf, directory: bool, results: Vec<FileValidation>) -> Self {
        let summary = StatusCounts::tally(results.iter().map(|file| file.result.status()));
        Self {
            root,
            directory,
            results,
            summary,
        }
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.summary.with_errors > 0
    }
}

/// Checklist progress rendered as `<marked>/6`.
#[must_use]
pub fn checklist_fraction(checklist: &ChecklistInfo) -> String {
    format!("{}/{CHECKLIST_SIZE}", checklist.marked_count)
}
