//! Per-spec status listing with inclusive status filters.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::ChecklistInfo;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::scanner::{DirectoryScanner, SpecLabel};
use crate::validator::{SpecStatus, SpecValidator, StatusCounts};

/// Which statuses to keep. No flag set keeps everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub complete: bool,
    pub incomplete: bool,
    pub errors: bool,
}

impl ListFilter {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.complete || self.incomplete || self.errors
    }

    #[must_use]
    pub const fn matches(&self, status: SpecStatus) -> bool {
        if !self.is_active() {
            return true;
        }
        match status {
            SpecStatus::Complete => self.complete,
            SpecStatus::Incomplete => self.incomplete,
            SpecStatus::Error => self.errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecEntry {
    pub path: PathBuf,
    pub number: String,
    pub name: String,
    pub status: SpecStatus,
    pub checklist: ChecklistInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub specs: Vec<SpecEntry>,
    /// Counts over `specs` only, after filtering.
    pub summary: StatusCounts,
}

pub struct SpecLister<'a, F: FileSystem> {
    fs: &'a F,
    validator: SpecValidator<'a, F>,
}

impl<'a, F: FileSystem> SpecLister<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            validator: SpecValidator::new(fs),
        }
    }

    /// Lists the specs below `root` sorted by number, keeping those `filter` accepts.
    ///
    /// # Errors
    /// Returns an error if `root` is not an existing, readable directory.
    pub fn list(&self, root: &Path, filter: ListFilter) -> Result<Listing> {
        let files = DirectoryScanner::new(self.fs).scan_dir(root)?;

        let mut specs: Vec<SpecEntry> = files
            .into_iter()
            .map(|path| {
                let label = SpecLabel::from_path(&path);
                let validation = self.validator.validate_entry(path);
                SpecEntry {
                    path: validation.path,
                    number: label.number,
                    name: label.name,
                    status: validation.result.status(),
                    checklist: validation.result.checklist,
                    errors: validation.result.errors,
                }
            })
            .filter(|entry| filter.matches(entry.status))
            .collect();
        specs.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.path.cmp(&b.path)));

        let summary = StatusCounts::tally(specs.iter().map(|entry| entry.status));
        Ok(Listing { specs, summary })
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
