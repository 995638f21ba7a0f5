/// A markdown ATX heading found on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters (1 to 6).
    pub level: usize,
    /// Heading text after the marker, trimmed.
    pub text: &'a str,
    /// 1-based line number.
    pub line: usize,
}

/// A heading-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    /// The first non-blank line is not a level-1 heading.
    MissingTitle,
    /// A heading went deeper than one level below its predecessor.
    SkippedLevel { line: usize, from: usize, to: usize },
}

impl StructureIssue {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MissingTitle => "document must start with a level-1 title (#)".to_string(),
            Self::SkippedLevel { line, from, to } => format!(
                "invalid heading hierarchy at line {line}: skipped from level {from} to {to}"
            ),
        }
    }
}

/// Parses a heading line: after trimming, one to six `#` followed by whitespace.
#[must_use]
pub fn parse_heading(line: &str, line_number: usize) -> Option<Heading<'_>> {
    let trimmed = line.trim();
    let bytes = trimmed.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    if !bytes.get(level).is_some_and(u8::is_ascii_whitespace) {
        return None;
    }
    Some(Heading {
        level,
        text: trimmed[level..].trim(),
        line: line_number,
    })
}

/// Iterates over every heading of a document, top to bottom.
pub fn headings(content: &str) -> impl Iterator<Item = Heading<'_>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_heading(line, index + 1))
}

/// Checks the title rule and the no-skipped-levels rule, reporting every violation.
#[must_use]
pub fn check_hierarchy(content: &str) -> Vec<StructureIssue> {
    let mut issues = Vec::new();

    let first_line = content
        .lines()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty());
    let starts_with_title = first_line
        .and_then(|(index, line)| parse_heading(line, index + 1))
        .is_some_and(|heading| heading.level == 1);
    if !starts_with_title {
        issues.push(StructureIssue::MissingTitle);
    }

    let mut previous_level = 0;
    for heading in headings(content) {
        if previous_level > 0 && heading.level > previous_level + 1 {
            issues.push(StructureIssue::SkippedLevel {
                line: heading.line,
                from: previous_level,
                to: heading.level,
            });
        }
        previous_level = heading.level;
    }

    issues
}

#[cfg(test)]
#[path = "heading_tests.rs"]
mod tests;
