use std::path::{Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;

use super::{FileFilter, SpecFilter};

/// Recursively collects spec documents below a root directory.
pub struct DirectoryScanner<'a, F: FileSystem, P: FileFilter = SpecFilter> {
    fs: &'a F,
    filter: P,
}

impl<'a, F: FileSystem> DirectoryScanner<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            filter: SpecFilter::default(),
        }
    }
}

impl<'a, F: FileSystem, P: FileFilter> DirectoryScanner<'a, F, P> {
    #[must_use]
    pub const fn with_filter(fs: &'a F, filter: P) -> Self {
        Self { fs, filter }
    }

    /// Spec files under `root`, sorted by path.
    ///
    /// # Errors
    /// Returns an error if `root` or any directory below it cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = self
            .fs
            .walk_files(root)
            .map_err(|source| SpecsError::FileRead {
                path: root.to_path_buf(),
                source,
            })?;
        Ok(files
            .into_iter()
            .filter(|path| self.filter.should_include(path))
            .collect())
    }

    /// Like [`scan`](Self::scan), but first requires `root` to be an existing directory.
    ///
    /// # Errors
    /// Returns `PathNotFound`/`NotADirectory` for a bad root, or a read error.
    pub fn scan_dir(&self, root: &Path) -> Result<Vec<PathBuf>> {
        ensure_directory(self.fs, root)?;
        self.scan(root)
    }
}

/// Input check shared by the directory-only commands.
///
/// # Errors
/// Returns `PathNotFound` if `path` is missing and `NotADirectory` if it is a file.
pub fn ensure_directory<F: FileSystem>(fs: &F, path: &Path) -> Result<()> {
    if !fs.exists(path) {
        return Err(SpecsError::PathNotFound(path.to_path_buf()));
    }
    if !fs.is_dir(path) {
        return Err(SpecsError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
