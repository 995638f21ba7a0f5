use std::path::{Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;
use crate::scanner::{DirectoryScanner, SPEC_SUFFIX};

use super::document::DocumentValidator;
use super::result::{FileValidation, ValidationReport, ValidationResult};

/// Validates a single spec file or every spec file below a directory.
pub struct SpecValidator<'a, F: FileSystem> {
    fs: &'a F,
    validator: DocumentValidator,
}

impl<'a, F: FileSystem> SpecValidator<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            validator: DocumentValidator::new(),
        }
    }

    /// Validates `path`.
    ///
    /// # Errors
    /// Returns an error if the path does not exist, if a file path lacks the
    /// `.spec.md` suffix, or if the directory or single file cannot be read.
    /// Unreadable files found while scanning a directory become per-file errors.
    pub fn validate(&self, path: &Path) -> Result<ValidationReport> {
        if !self.fs.exists(path) {
            return Err(SpecsError::PathNotFound(path.to_path_buf()));
        }

        if self.fs.is_dir(path) {
            let files = DirectoryScanner::new(self.fs).scan(path)?;
            let results = files.into_iter().map(|file| self.validate_entry(file)).collect();
            return Ok(ValidationReport::new(path.to_path_buf(), true, results));
        }

        if !path.to_string_lossy().ends_with(SPEC_SUFFIX) {
            return Err(SpecsError::InvalidExtension(path.to_path_buf()));
        }
        let bytes = self.fs.read(path).map_err(|source| SpecsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let result = FileValidation {
            path: path.to_path_buf(),
            result: self.validator.validate(&bytes),
        };
        Ok(ValidationReport::new(path.to_path_buf(), false, vec![result]))
    }

    /// Validates one discovered file; read failures are recorded, not raised.
    pub fn validate_entry(&self, path: PathBuf) -> FileValidation {
        let result = match self.fs.read(&path) {
            Ok(bytes) => self.validator.validate(&bytes),
            Err(err) => ValidationResult::failed(format!("failed to read file: {err}")),
        };
        FileValidation { path, result }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
