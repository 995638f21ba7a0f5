use crate::document::{CHECKLIST_SIZE, DocumentParser, check_hierarchy};

use super::result::ValidationResult;

/// Validates the raw bytes of one spec document. Pure; no I/O.
#[derive(Default)]
pub struct DocumentValidator {
    parser: DocumentParser,
}

impl DocumentValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn parser(&self) -> &DocumentParser {
        &self.parser
    }

    /// Runs every structural rule and collects all findings.
    ///
    /// Non-UTF-8 and blank input stop after a single error.
    #[must_use]
    pub fn validate(&self, bytes: &[u8]) -> ValidationResult {
        let Ok(content) = std::str::from_utf8(bytes) else {
            return ValidationResult::failed("file is not valid UTF-8");
        };
        if content.trim().is_empty() {
            return ValidationResult::failed("file is empty");
        }

        let mut errors: Vec<String> = check_hierarchy(content)
            .iter()
            .map(|issue| issue.message())
            .collect();

        errors.extend(
            self.parser
                .missing_sections(content)
                .into_iter()
                .map(|section| format!("section '{section}' missing")),
        );

        let checklist = self.parser.checklist(content);
        let mut warnings = Vec::new();
        if !checklist.found {
            errors.push("checklist not found".to_string());
        } else if !checklist.has_valid_format() {
            errors.push(format!(
                "checklist has invalid format (expected {CHECKLIST_SIZE} items, found {})",
                checklist.item_count
            ));
        } else if checklist.marked_count < CHECKLIST_SIZE {
            warnings.push(format!(
                "checklist incomplete ({}/{CHECKLIST_SIZE} items)",
                checklist.marked_count
            ));
        }

        let valid = errors.is_empty();
        ValidationResult {
            valid,
            complete: valid && checklist.marked_count == CHECKLIST_SIZE,
            errors,
            warnings,
            checklist,
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
