use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;

use super::model::{Config, ConfigKey};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes the per-user configuration file.
pub struct ConfigStore<'a, F: FileSystem> {
    fs: &'a F,
    path_override: Option<PathBuf>,
}

impl<'a, F: FileSystem> ConfigStore<'a, F> {
    #[must_use]
    pub const fn new(fs: &'a F) -> Self {
        Self {
            fs,
            path_override: None,
        }
    }

    /// Use `path` instead of the per-user location.
    #[must_use]
    pub fn with_path(fs: &'a F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path_override: Some(path.into()),
        }
    }

    /// Location of the configuration file.
    ///
    /// # Errors
    /// Returns an error if no configuration directory can be determined.
    pub fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path_override {
            return Ok(path.clone());
        }
        self.fs
            .config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SpecsError::Config("could not determine the configuration directory".to_string())
            })
    }

    /// Whether the configuration file exists.
    ///
    /// # Errors
    /// Returns an error if no configuration directory can be determined.
    pub fn exists(&self) -> Result<bool> {
        Ok(self.fs.exists(&self.path()?))
    }

    /// Loads the file, or the defaults when it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(&self) -> Result<Config> {
        let path = self.path()?;
        if !self.fs.exists(&path) {
            return Ok(Config::default());
        }

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| SpecsError::FileRead {
                path: path.clone(),
                source,
            })?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            SpecsError::Config(format!("invalid configuration file {}: {e}", path.display()))
        })?;
        Ok(config.with_defaults_applied())
    }

    /// Writes `config` as pretty JSON, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, config: &Config) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| SpecsError::FileWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        self.fs
            .write(&path, content.as_bytes())
            .map_err(|source| SpecsError::FileWrite { path, source })
    }

    /// Validates and stores one key, returning the canonical value written.
    ///
    /// # Errors
    /// Returns an error for an unknown key, an invalid value, or a failed save.
    pub fn set(&self, key: &str, value: &str) -> Result<String> {
        let key: ConfigKey = key.parse()?;
        let mut config = self.load()?;
        let stored = config.set(key, value)?;
        self.save(&config)?;
        Ok(stored)
    }

    /// # Errors
    /// Returns an error for an unknown key or an unreadable file.
    pub fn get(&self, key: &str) -> Result<String> {
        let key: ConfigKey = key.parse()?;
        Ok(self.load()?.get(key))
    }
}

/// Turns the configured spec directory into an absolute path.
///
/// Relative values are joined to the current directory.
///
/// # Errors
/// Returns an error if the current directory cannot be determined.
pub fn resolve_default_path<F: FileSystem>(fs: &F, config: &Config) -> Result<PathBuf> {
    let configured = Path::new(&config.specs.default_path);
    if configured.is_absolute() {
        return Ok(configured.to_path_buf());
    }

    let cwd = fs.current_dir()?;
    let relative: PathBuf = configured
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        return Ok(cwd);
    }
    Ok(cwd.join(relative))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
