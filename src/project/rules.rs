//! Section-level comparison and merge of the project rules file.

use indexmap::IndexMap;

/// Differences above this many lines mark a section as customized.
const CUSTOMIZATION_THRESHOLD: usize = 3;

/// A rules file split at its `## ` headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesDocument {
    /// Text before the first section heading.
    pub preamble: String,
    /// Section title to body, in file order.
    pub sections: IndexMap<String, String>,
}

impl RulesDocument {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut preamble = Vec::new();
        let mut sections: IndexMap<String, Vec<&str>> = IndexMap::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            if let Some(title) = line.strip_prefix("## ") {
                // A repeated title replaces the earlier body.
                let title = title.trim().to_string();
                sections.insert(title.clone(), Vec::new());
                current = Some(title);
            } else if let Some(title) = &current {
                if let Some(body) = sections.get_mut(title) {
                    body.push(line);
                }
            } else {
                preamble.push(line);
            }
        }

        Self {
            preamble: preamble.join("\n"),
            sections: sections
                .into_iter()
                .map(|(title, body)| (title, body.join("\n")))
                .collect(),
        }
    }

    fn render(&self) -> String {
        let preamble = self.preamble.trim_end();
        let mut out = String::new();
        if !preamble.is_empty() {
            out.push_str(preamble);
            out.push('\n');
        }
        for (title, body) in &self.sections {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("## ");
            out.push_str(title);
            out.push('\n');
            let body = body.trim_matches('\n').trim_end();
            if !body.is_empty() {
                out.push_str(body);
                out.push('\n');
            }
        }
        out
    }
}

/// Number of positions whose trimmed lines differ, after trimming both bodies.
/// The shorter body is padded with blank lines.
fn differing_lines(a: &str, b: &str) -> usize {
    let a: Vec<&str> = a.trim().lines().map(str::trim).collect();
    let b: Vec<&str> = b.trim().lines().map(str::trim).collect();
    (0..a.len().max(b.len()))
        .filter(|&i| a.get(i).copied().unwrap_or("") != b.get(i).copied().unwrap_or(""))
        .count()
}

fn line_count(body: &str) -> usize {
    body.trim().lines().count()
}

fn is_section_customized(current: &str, boilerplate: &str) -> bool {
    line_count(current).abs_diff(line_count(boilerplate)) > CUSTOMIZATION_THRESHOLD
        || differing_lines(current, boilerplate) > CUSTOMIZATION_THRESHOLD
}

/// Whether the project's rules file departs meaningfully from the boilerplate.
///
/// Small edits (up to three lines per section) do not count. A section the
/// boilerplate lacks always does.
#[must_use]
pub fn is_customized(current: &str, boilerplate: &str) -> bool {
    if current == boilerplate {
        return false;
    }
    let current = RulesDocument::parse(current);
    let boilerplate = RulesDocument::parse(boilerplate);

    current.sections.iter().any(|(title, body)| {
        boilerplate
            .sections
            .get(title)
            .is_none_or(|template| is_section_customized(body, template))
    })
}

/// Combines the boilerplate with the project's customizations.
///
/// Output keeps the boilerplate preamble and section order. A shared section
/// keeps the project's body when it differs by more than three lines.
/// Sections only the project has are appended in their original order.
#[must_use]
pub fn merge(current: &str, boilerplate: &str) -> String {
    let current = RulesDocument::parse(current);
    let boilerplate = RulesDocument::parse(boilerplate);

    let mut merged = RulesDocument {
        preamble: boilerplate.preamble.clone(),
        sections: IndexMap::new(),
    };
    for (title, template) in &boilerplate.sections {
        let body = match current.sections.get(title) {
            Some(body) if differing_lines(body, template) > CUSTOMIZATION_THRESHOLD => body,
            _ => template,
        };
        merged.sections.insert(title.clone(), body.clone());
    }
    for (title, body) in &current.sections {
        if !boilerplate.sections.contains_key(title) {
            merged.sections.insert(title.clone(), body.clone());
        }
    }

    merged.render()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
