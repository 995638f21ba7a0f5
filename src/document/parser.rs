use regex::Regex;

use super::checklist::ChecklistInfo;
use super::heading::parse_heading;
use super::section::{CanonicalSection, SectionName, normalize_section_name};

/// Extracts structural facts from the text of one spec document.
pub struct DocumentParser {
    section_pattern: Regex,
    item_pattern: Regex,
    requirement_pattern: Regex,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            section_pattern: Regex::new(r"^##\s+(?:\d+\.\s*)?(.+)$").expect("Invalid regex"),
            item_pattern: Regex::new(r"^-\s+\[([ x])\]\s+(.+)$").expect("Invalid regex"),
            requirement_pattern: Regex::new(r"^-\s+\*\*RF\d+").expect("Invalid regex"),
        }
    }

    /// Normalized names of every `## ` section, in document order.
    #[must_use]
    pub fn sections(&self, content: &str) -> Vec<SectionName> {
        content
            .lines()
            .filter_map(|line| self.section_pattern.captures(line.trim()))
            .filter_map(|caps| caps.get(1))
            .map(|title| normalize_section_name(title.as_str()))
            .collect()
    }

    /// Required sections absent from the document, in canonical order.
    #[must_use]
    pub fn missing_sections(&self, content: &str) -> Vec<CanonicalSection> {
        let found: Vec<CanonicalSection> = self
            .sections(content)
            .iter()
            .filter_map(SectionName::canonical)
            .collect();
        CanonicalSection::ALL
            .into_iter()
            .filter(|section| !found.contains(section))
            .collect()
    }

    /// Locates and counts the checklist.
    ///
    /// The checklist lives under a heading containing "checklist" that follows
    /// a heading containing "abertos" (both case-insensitive). It starts at
    /// the first item line after that heading and runs until the next heading.
    #[must_use]
    pub fn checklist(&self, content: &str) -> ChecklistInfo {
        let mut info = ChecklistInfo::default();
        let mut after_open_section = false;
        let mut in_checklist_section = false;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if let Some(heading) = parse_heading(trimmed, index + 1) {
                if info.found {
                    break;
                }
                let text = heading.text.to_lowercase();
                if text.contains("abertos") {
                    after_open_section = true;
                }
                if after_open_section && text.contains("checklist") {
                    in_checklist_section = true;
                }
                continue;
            }

            if !in_checklist_section {
                continue;
            }
            if let Some(caps) = self.item_pattern.captures(trimmed) {
                info.found = true;
                info.item_count += 1;
                if caps.get(1).is_some_and(|mark| mark.as_str() == "x") {
                    info.marked_count += 1;
                }
            }
        }

        info
    }

    /// Counts `- **RF<n>` lines in the functional requirements section.
    #[must_use]
    pub fn requirement_count(&self, content: &str) -> usize {
        let mut in_requirements = false;
        let mut count = 0;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if let Some(heading) = parse_heading(trimmed, index + 1) {
                if in_requirements {
                    break;
                }
                in_requirements = is_requirements_heading(heading.text);
                continue;
            }
            if in_requirements && self.requirement_pattern.is_match(trimmed) {
                count += 1;
            }
        }

        count
    }
}

fn is_requirements_heading(text: &str) -> bool {
    let title = text.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
    normalize_section_name(title).canonical() == Some(CanonicalSection::FunctionalRequirements)
        || text.contains(CanonicalSection::FunctionalRequirements.name())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
