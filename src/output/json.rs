use crate::checker::CheckReport;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::lister::Listing;
use crate::validator::ValidationReport;

use super::OutputFormatter;

/// Pretty-printed JSON of the report values themselves.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_listing(&self, listing: &Listing) -> Result<String> {
        Ok(serde_json::to_string_pretty(listing)?)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String> {
        Ok(serde_json::to_string_pretty(dashboard)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
