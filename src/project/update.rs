use std::path::{Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;
use crate::templates::{CHECKLIST, DEFAULT_TEMPLATE, RULES_FILE, TemplateProvider};

use super::rules::{is_customized, merge};
use super::{check_writable, create_dir, is_project, specs_dir, write_file};

/// Backups live in `<project>/.specs-backup/<YYYYMMDD-HHMMSS>/`.
pub const BACKUP_DIR: &str = ".specs-backup";

/// Number of backup directories kept after an update.
pub const MAX_BACKUPS: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Spec-directory templates refreshed by an update.
const REFRESHED_TEMPLATES: [&str; 2] = [CHECKLIST, DEFAULT_TEMPLATE];

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
    /// Overwrite a customized rules file.
    pub force: bool,
    pub no_backup: bool,
    /// Also write a merged rules file when the project's copy is customized.
    pub merge: bool,
}

/// What happened (or would happen, in a dry run) to the rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesAction {
    /// The project had no rules file.
    Created,
    /// Replaced an unmodified or lightly edited copy.
    Replaced,
    /// Replaced a customized copy because of `--force`.
    Overwritten,
    /// Left the customized copy in place and wrote the new version beside it.
    KeptCustomized {
        updated: PathBuf,
        merged: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub dry_run: bool,
    pub backup_dir: Option<PathBuf>,
    /// Refreshed spec-directory templates.
    pub templates_updated: Vec<PathBuf>,
    pub rules: RulesAction,
    pub pruned_backups: Vec<PathBuf>,
    /// Backups that could not be removed, with the reason.
    pub prune_failures: Vec<(PathBuf, String)>,
    /// Writability probe that could not be removed.
    pub stray_probe: Option<PathBuf>,
}

pub struct ProjectUpdater<'a, F: FileSystem, T: TemplateProvider> {
    fs: &'a F,
    templates: &'a T,
    timestamp: Option<String>,
}

impl<'a, F: FileSystem, T: TemplateProvider> ProjectUpdater<'a, F, T> {
    #[must_use]
    pub const fn new(fs: &'a F, templates: &'a T) -> Self {
        Self {
            fs,
            templates,
            timestamp: None,
        }
    }

    /// Use a fixed backup directory name instead of the current local time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Refreshes the checklist, the default template and the rules file of
    /// the project in `target`.
    ///
    /// # Errors
    /// Returns `NotAProject` if `target` holds no specs project, or an error if
    /// the backup or a refreshed file cannot be written.
    pub fn update(&self, target: &Path, options: UpdateOptions) -> Result<UpdateReport> {
        if !is_project(self.fs, self.templates, target) {
            return Err(SpecsError::NotAProject(target.to_path_buf()));
        }

        let writes = !options.dry_run;
        let stray_probe = if writes {
            check_writable(self.fs, target)?
        } else {
            None
        };

        let backup_dir = if writes && !options.no_backup {
            Some(self.create_backup(target)?)
        } else {
            None
        };

        let templates_updated = self.refresh_templates(target, writes)?;
        let rules = self.update_rules(target, options)?;

        let (pruned_backups, prune_failures) = if backup_dir.is_some() {
            self.prune_backups(target)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(UpdateReport {
            dry_run: options.dry_run,
            backup_dir,
            templates_updated,
            rules,
            pruned_backups,
            prune_failures,
            stray_probe,
        })
    }

    fn timestamp(&self) -> String {
        self.timestamp
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Copies the files an update replaces into a fresh backup directory.
    fn create_backup(&self, target: &Path) -> Result<PathBuf> {
        let backup_dir = target.join(BACKUP_DIR).join(self.timestamp());
        let backup_specs = specs_dir(&backup_dir);
        create_dir(self.fs, &backup_specs)?;

        let specs = specs_dir(target);
        let sources = REFRESHED_TEMPLATES
            .iter()
            .map(|name| (specs.join(name), backup_specs.join(name)))
            .chain(std::iter::once((
                target.join(RULES_FILE),
                backup_dir.join(RULES_FILE),
            )));

        for (source, destination) in sources {
            if !self.fs.exists(&source) {
                continue;
            }
            let content = self.fs.read(&source).map_err(|e| SpecsError::FileRead {
                path: source.clone(),
                source: e,
            })?;
            self.fs
                .write(&destination, &content)
                .map_err(|e| SpecsError::FileWrite {
                    path: destination.clone(),
                    source: e,
                })?;
        }

        Ok(backup_dir)
    }

    fn refresh_templates(&self, target: &Path, writes: bool) -> Result<Vec<PathBuf>> {
        let specs = specs_dir(target);
        let mut updated = Vec::new();
        for name in REFRESHED_TEMPLATES {
            let content = self
                .templates
                .get(name)
                .ok_or_else(|| SpecsError::TemplateNotFound(name.to_string()))?;
            let path = specs.join(name);
            if writes {
                write_file(self.fs, &path, content)?;
            }
            updated.push(path);
        }
        Ok(updated)
    }

    fn update_rules(&self, target: &Path, options: UpdateOptions) -> Result<RulesAction> {
        let path = target.join(RULES_FILE);
        let boilerplate = self.templates.rules();
        let writes = !options.dry_run;

        if !self.fs.exists(&path) {
            if writes {
                write_file(self.fs, &path, boilerplate)?;
            }
            return Ok(RulesAction::Created);
        }

        let current = self
            .fs
            .read_to_string(&path)
            .map_err(|source| SpecsError::FileRead {
                path: path.clone(),
                source,
            })?;

        if !is_customized(&current, boilerplate) {
            if writes {
                write_file(self.fs, &path, boilerplate)?;
            }
            return Ok(RulesAction::Replaced);
        }

        if options.force {
            if writes {
                write_file(self.fs, &path, boilerplate)?;
            }
            return Ok(RulesAction::Overwritten);
        }

        let updated = target.join(format!("{RULES_FILE}-updated"));
        let merged = options
            .merge
            .then(|| target.join(format!("{RULES_FILE}-merged")));
        if writes {
            write_file(self.fs, &updated, boilerplate)?;
            if let Some(merged_path) = &merged {
                write_file(self.fs, merged_path, &merge(&current, boilerplate))?;
            }
        }
        Ok(RulesAction::KeptCustomized { updated, merged })
    }

    /// Removes the oldest backups beyond [`MAX_BACKUPS`]. Failures are
    /// collected, never raised.
    fn prune_backups(&self, target: &Path) -> (Vec<PathBuf>, Vec<(PathBuf, String)>) {
        let root = target.join(BACKUP_DIR);
        let Ok(backups) = self.fs.subdirectories(&root) else {
            return (Vec::new(), Vec::new());
        };

        let excess = backups.len().saturating_sub(MAX_BACKUPS);
        let mut pruned = Vec::new();
        let mut failures = Vec::new();
        for name in backups.iter().take(excess) {
            let path = root.join(name);
            match self.fs.remove_dir_all(&path) {
                Ok(()) => pruned.push(path),
                Err(e) => failures.push((path, e.to_string())),
            }
        }
        (pruned, failures)
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
