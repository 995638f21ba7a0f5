mod error_output;
mod json;
mod path;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use path::display_path;
pub use text::{ColorMode, TextFormatter};

use text::ansi;

use crate::checker::CheckReport;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::lister::Listing;
use crate::validator::ValidationReport;

/// Renders command reports into a printable document.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format_validation(&self, report: &ValidationReport) -> Result<String>;

    /// # Errors
    /// Returns an error if the listing cannot be serialized.
    fn format_listing(&self, listing: &Listing) -> Result<String>;

    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format_check(&self, report: &CheckReport) -> Result<String>;

    /// # Errors
    /// Returns an error if the dashboard cannot be serialized.
    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Picks the formatter for `format`. `base` is the directory text reports
/// print paths relative to.
#[must_use]
pub fn formatter_for(
    format: OutputFormat,
    mode: ColorMode,
    base: Option<&std::path::Path>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(mode);
            Box::new(match base {
                Some(base) => formatter.with_base(base),
                None => formatter,
            })
        }
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
