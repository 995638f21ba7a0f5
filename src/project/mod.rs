//! Project scaffolding: `init` creates a specs project, `update` refreshes it.

mod init;
pub mod rules;
mod update;

use std::path::{Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;
use crate::templates::TemplateProvider;

pub use init::{InitOptions, InitReport, ProjectInitializer};
pub use update::{
    BACKUP_DIR, MAX_BACKUPS, ProjectUpdater, RulesAction, UpdateOptions, UpdateReport,
};

/// Directory holding the spec documents of a project.
pub const SPECS_DIR: &str = "specs";

const WRITE_TEST_FILE: &str = ".specs-write-test";

#[must_use]
pub fn specs_dir(project: &Path) -> PathBuf {
    project.join(SPECS_DIR)
}

/// A directory is a project when `specs/` holds at least one `00-` template.
pub fn is_project<F: FileSystem, T: TemplateProvider>(fs: &F, templates: &T, dir: &Path) -> bool {
    let specs = specs_dir(dir);
    fs.is_dir(&specs)
        && templates
            .spec_template_names()
            .iter()
            .filter(|name| name.starts_with("00-"))
            .any(|name| fs.exists(&specs.join(name)))
}

/// Probes `dir` by writing and removing a scratch file.
///
/// Returns the probe path when it was written but could not be removed.
fn check_writable<F: FileSystem>(fs: &F, dir: &Path) -> Result<Option<PathBuf>> {
    let probe = dir.join(WRITE_TEST_FILE);
    fs.write(&probe, b"test")
        .map_err(|source| SpecsError::FileWrite {
            path: probe.clone(),
            source,
        })?;
    Ok(fs.remove_file(&probe).err().map(|_| probe))
}

fn write_file<F: FileSystem>(fs: &F, path: &Path, content: &str) -> Result<()> {
    fs.write(path, content.as_bytes())
        .map_err(|source| SpecsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

fn create_dir<F: FileSystem>(fs: &F, path: &Path) -> Result<()> {
    fs.create_dir_all(path)
        .map_err(|source| SpecsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}
