use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecsError};

pub const DEFAULT_SPECS_PATH: &str = "./specs";

/// Per-user settings stored as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub specs: SpecsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecsConfig {
    /// Spec directory used when a command gets no path.
    #[serde(default = "default_specs_path")]
    pub default_path: String,

    /// Leave `template-*.spec.md` files out of the dashboard.
    #[serde(default = "default_true")]
    pub exclude_templates: bool,
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            default_path: default_specs_path(),
            exclude_templates: true,
        }
    }
}

fn default_specs_path() -> String {
    DEFAULT_SPECS_PATH.to_string()
}

const fn default_true() -> bool {
    true
}

/// A settable configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultPath,
    ExcludeTemplates,
}

impl ConfigKey {
    pub const ALL: [Self; 2] = [Self::DefaultPath, Self::ExcludeTemplates];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultPath => "specs.default_path",
            Self::ExcludeTemplates => "specs.exclude_templates",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = SpecsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SpecsError::UnknownConfigKey(s.to_string()))
    }
}

impl Config {
    /// Fills values an edited file may have left blank.
    #[must_use]
    pub fn with_defaults_applied(mut self) -> Self {
        if self.specs.default_path.trim().is_empty() {
            self.specs.default_path = default_specs_path();
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DefaultPath => self.specs.default_path.clone(),
            ConfigKey::ExcludeTemplates => self.specs.exclude_templates.to_string(),
        }
    }

    /// Parses and stores `value`, returning it in canonical form.
    ///
    /// # Errors
    /// Returns `InvalidConfigValue` for an empty path or a non-boolean flag.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<String> {
        match key {
            ConfigKey::DefaultPath => {
                if value.trim().is_empty() {
                    return Err(invalid_value(key, "must not be empty"));
                }
                self.specs.default_path = value.to_string();
            }
            ConfigKey::ExcludeTemplates => {
                self.specs.exclude_templates = parse_bool(value)
                    .ok_or_else(|| invalid_value(key, "expected a boolean (true/false)"))?;
            }
        }
        Ok(self.get(key))
    }
}

fn invalid_value(key: ConfigKey, reason: &str) -> SpecsError {
    SpecsError::InvalidConfigValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
