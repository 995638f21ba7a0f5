use std::path::{Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;
use crate::templates::TemplateProvider;

use super::{check_writable, create_dir, is_project, specs_dir, write_file};

#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Also write a `boilerplate/specs/` copy of the templates.
    pub with_boilerplate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub specs_dir: PathBuf,
    /// The directory was already a project; nothing was written.
    pub already_initialized: bool,
    pub directories_created: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
    /// Existing files left untouched.
    pub files_kept: Vec<PathBuf>,
    /// Writability probe that could not be removed.
    pub stray_probe: Option<PathBuf>,
}

pub struct ProjectInitializer<'a, F: FileSystem, T: TemplateProvider> {
    fs: &'a F,
    templates: &'a T,
}

impl<'a, F: FileSystem, T: TemplateProvider> ProjectInitializer<'a, F, T> {
    #[must_use]
    pub const fn new(fs: &'a F, templates: &'a T) -> Self {
        Self { fs, templates }
    }

    /// Creates `specs/`, the spec templates, `.cursorrules` and `README.md`
    /// inside `target`.
    ///
    /// # Errors
    /// Returns an error if `target` is not an existing directory, is not
    /// writable, or a file cannot be written.
    pub fn init(&self, target: &Path, options: InitOptions) -> Result<InitReport> {
        if !self.fs.exists(target) {
            return Err(SpecsError::PathNotFound(target.to_path_buf()));
        }
        if !self.fs.is_dir(target) {
            return Err(SpecsError::NotADirectory(target.to_path_buf()));
        }

        let mut report = InitReport {
            specs_dir: specs_dir(target),
            ..InitReport::default()
        };
        if is_project(self.fs, self.templates, target) {
            report.already_initialized = true;
            return Ok(report);
        }

        report.stray_probe = check_writable(self.fs, target)?;

        let specs = report.specs_dir.clone();
        self.create_directory(&specs, &mut report)?;
        self.copy_spec_templates(&specs, options.force, &mut report)?;
        self.write_unless_present(
            &target.join(crate::templates::RULES_FILE),
            self.templates.rules(),
            options.force,
            &mut report,
        )?;
        self.write_unless_present(
            &target.join(crate::templates::README_FILE),
            self.templates.readme(),
            options.force,
            &mut report,
        )?;

        if options.with_boilerplate {
            let boilerplate = target.join("boilerplate").join(super::SPECS_DIR);
            self.create_directory(&boilerplate, &mut report)?;
            self.copy_spec_templates(&boilerplate, options.force, &mut report)?;
        }

        Ok(report)
    }

    fn create_directory(&self, dir: &Path, report: &mut InitReport) -> Result<()> {
        if !self.fs.is_dir(dir) {
            create_dir(self.fs, dir)?;
            report.directories_created.push(dir.to_path_buf());
        }
        Ok(())
    }

    fn copy_spec_templates(&self, dir: &Path, force: bool, report: &mut InitReport) -> Result<()> {
        for name in self.templates.spec_template_names() {
            let content = self
                .templates
                .get(name)
                .ok_or_else(|| SpecsError::TemplateNotFound((*name).to_string()))?;
            self.write_unless_present(&dir.join(name), content, force, report)?;
        }
        Ok(())
    }

    fn write_unless_present(
        &self,
        path: &Path,
        content: &str,
        force: bool,
        report: &mut InitReport,
    ) -> Result<()> {
        if self.fs.exists(path) && !force {
            report.files_kept.push(path.to_path_buf());
            return Ok(());
        }
        write_file(self.fs, path, content)?;
        report.files_written.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
