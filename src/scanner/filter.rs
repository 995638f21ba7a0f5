use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SpecsError};

use super::SPEC_SUFFIX;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts `*.spec.md` files whose file name matches none of the exclude globs.
pub struct SpecFilter {
    exclude_patterns: GlobSet,
}

impl SpecFilter {
    /// Create a filter that drops file names matching any of `exclude_patterns`.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SpecsError::InvalidPattern {
                pattern: (*pattern).to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| SpecsError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_patterns.is_match(file_name)
    }
}

impl Default for SpecFilter {
    fn default() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for SpecFilter {
    fn should_include(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        file_name.ends_with(SPEC_SUFFIX) && !self.is_excluded(file_name)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
