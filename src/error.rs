use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecsError {
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("file must have the .spec.md extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("directory does not contain a specs project: {}", .0.display())]
    NotAProject(PathBuf),

    #[error("unknown configuration key: {0}")]
    UnknownConfigKey(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidConfigValue { key: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecsError {
    /// Whether the error was caused by what the user typed rather than by the
    /// environment. Input errors map to the usage exit code.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound(_)
                | Self::NotADirectory(_)
                | Self::InvalidExtension(_)
                | Self::NotAProject(_)
                | Self::UnknownConfigKey(_)
                | Self::InvalidConfigValue { .. }
        )
    }

    /// Short category shown before the message in error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound(_)
            | Self::NotADirectory(_)
            | Self::InvalidExtension(_)
            | Self::NotAProject(_) => "Invalid path",
            Self::UnknownConfigKey(_) | Self::InvalidConfigValue { .. } | Self::Config(_) => {
                "Configuration error"
            }
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO error",
            Self::InvalidPattern { .. } => "Pattern error",
            Self::TemplateNotFound(_) => "Template error",
            Self::Json(_) => "JSON error",
        }
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidExtension(_) => Some("spec documents are named NN-name.spec.md"),
            Self::NotAProject(_) => Some("run `specs init` first"),
            Self::UnknownConfigKey(_) => {
                Some("available keys: specs.default_path, specs.exclude_templates")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
