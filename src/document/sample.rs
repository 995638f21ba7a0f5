//! Sample documents shared by unit tests.

use super::CanonicalSection;

/// A document with all required sections and a checklist of `total` items,
/// the first `marked` of which are checked.
pub fn spec_with_checklist(marked: usize, total: usize) -> String {
    let mut doc = String::from("# 01 - Sample\n\n");
    for (index, section) in CanonicalSection::ALL.iter().enumerate() {
        doc.push_str(&format!("## {}. {}\n\n", index + 1, section.name()));
        if *section == CanonicalSection::FunctionalRequirements {
            doc.push_str("- **RF01**: first\n- **RF02**: second\n\n");
        } else {
            doc.push_str("Text.\n\n");
        }
    }
    doc.push_str("## Checklist Rápido\n\n");
    for item in 0..total {
        let mark = if item < marked { 'x' } else { ' ' };
        doc.push_str(&format!("- [{mark}] Item {}\n", item + 1));
    }
    doc
}

pub fn complete_spec() -> String {
    spec_with_checklist(6, 6)
}
