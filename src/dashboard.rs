//! Progress dashboard: checklist progress and requirement counts per spec.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::CHECKLIST_SIZE;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::scanner::{DirectoryScanner, SpecFilter, SpecLabel, ensure_directory};
use crate::validator::{DocumentValidator, SpecStatus};

/// File-name glob of spec templates shipped by `init`.
pub const TEMPLATE_PATTERN: &str = "template-*.spec.md";

/// Marked checklist items against the items possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub marked: usize,
    pub total: usize,
}

impl Progress {
    /// Whole percentage, truncated. Zero when nothing is possible.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.marked * 100 / self.total
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}% complete)",
            self.marked,
            self.total,
            self.percent()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecProgress {
    pub path: PathBuf,
    pub number: String,
    pub name: String,
    pub status: SpecStatus,
    pub requirements: usize,
    pub progress: Progress,
}

impl SpecProgress {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, SpecStatus::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_specs: usize,
    pub total_requirements: usize,
    pub complete: usize,
    pub in_progress: usize,
    pub overall: Progress,
    /// `overall` rendered as `<marked>/<total> (<percent>% complete)`.
    pub overall_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    /// Every spec, sorted by number.
    pub specs: Vec<SpecProgress>,
}

impl Dashboard {
    #[must_use]
    pub fn new(mut specs: Vec<SpecProgress>) -> Self {
        specs.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.path.cmp(&b.path)));

        let complete = specs.iter().filter(|spec| spec.is_complete()).count();
        let marked: usize = specs.iter().map(|spec| spec.progress.marked).sum();
        let overall = Progress {
            marked,
            total: CHECKLIST_SIZE * specs.len(),
        };

        Self {
            summary: DashboardSummary {
                total_specs: specs.len(),
                total_requirements: specs.iter().map(|spec| spec.requirements).sum(),
                complete,
                in_progress: specs.len() - complete,
                overall,
                overall_label: overall.to_string(),
            },
            specs,
        }
    }

    /// Incomplete specs, least progressed first.
    #[must_use]
    pub fn in_progress(&self) -> Vec<&SpecProgress> {
        let mut specs: Vec<&SpecProgress> =
            self.specs.iter().filter(|spec| !spec.is_complete()).collect();
        specs.sort_by_key(|spec| spec.progress.marked);
        specs
    }

    pub fn complete(&self) -> impl Iterator<Item = &SpecProgress> {
        self.specs.iter().filter(|spec| spec.is_complete())
    }
}

pub struct DashboardBuilder<'a, F: FileSystem> {
    fs: &'a F,
    validator: DocumentValidator,
    exclude_templates: bool,
}

impl<'a, F: FileSystem> DashboardBuilder<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            validator: DocumentValidator::new(),
            exclude_templates: false,
        }
    }

    /// Skip files named like [`TEMPLATE_PATTERN`].
    #[must_use]
    pub const fn exclude_templates(mut self, exclude: bool) -> Self {
        self.exclude_templates = exclude;
        self
    }

    /// Builds the dashboard for the spec directory `root`.
    ///
    /// # Errors
    /// Returns an error if `root` is not an existing, readable directory.
    pub fn build(&self, root: &Path) -> Result<Dashboard> {
        ensure_directory(self.fs, root)?;
        let patterns: &[&str] = if self.exclude_templates {
            &[TEMPLATE_PATTERN]
        } else {
            &[]
        };
        let filter = SpecFilter::new(patterns)?;
        let files = DirectoryScanner::with_filter(self.fs, filter).scan(root)?;

        let specs = files.into_iter().map(|path| self.spec_progress(path)).collect();
        Ok(Dashboard::new(specs))
    }

    fn spec_progress(&self, path: PathBuf) -> SpecProgress {
        let label = SpecLabel::from_path(&path);
        let (status, marked, requirements) = match self.fs.read(&path) {
            Ok(bytes) => {
                let result = self.validator.validate(&bytes);
                let requirements = self
                    .validator
                    .parser()
                    .requirement_count(&String::from_utf8_lossy(&bytes));
                (result.status(), result.checklist.marked_count, requirements)
            }
            Err(_) => (SpecStatus::Error, 0, 0),
        };

        SpecProgress {
            path,
            number: label.number,
            name: label.name,
            status,
            requirements,
            progress: Progress {
                marked,
                total: CHECKLIST_SIZE,
            },
        }
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
