//! Structural parsing of spec documents.
//!
//! A spec document is a markdown file with a level-1 title, twelve required
//! `## ` sections and a six-item checklist after the open-questions section.

mod checklist;
mod heading;
mod parser;
#[cfg(test)]
pub(crate) mod sample;
mod section;

pub use checklist::{CHECKLIST_SIZE, ChecklistInfo};
pub use heading::{Heading, StructureIssue, check_hierarchy, headings, parse_heading};
pub use parser::DocumentParser;
pub use section::{CanonicalSection, SectionName, normalize_section_name};
