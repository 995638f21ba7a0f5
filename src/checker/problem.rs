use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Finding category, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Numbering,
    Links,
    Format,
    Orphans,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Numbering, Self::Links, Self::Format, Self::Orphans];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numbering => "Numbering",
            Self::Links => "Links",
            Self::Format => "Format",
            Self::Orphans => "Orphans",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub category: Category,
    pub severity: Severity,
    /// Path relative to the checked directory, with `/` separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Problem {
    #[must_use]
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: Severity::Error,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(category, message)
        }
    }

    #[must_use]
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// `file:line`, `file`, or nothing, depending on what is known.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{file}:{line}")),
            (Some(file), None) => Some(file.clone()),
            (None, _) => None,
        }
    }
}

/// All findings of one consistency-check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub total_specs: usize,
    pub problems: Vec<Problem>,
    /// Problem count per category, every category present, in display order.
    pub summary: IndexMap<Category, usize>,
}

impl CheckReport {
    #[must_use]
    pub fn new(total_specs: usize, problems: Vec<Problem>) -> Self {
        let mut summary: IndexMap<Category, usize> =
            Category::ALL.iter().map(|category| (*category, 0)).collect();
        for problem in &problems {
            *summary.entry(problem.category).or_insert(0) += 1;
        }
        Self {
            total_specs,
            problems,
            summary,
        }
    }

    #[must_use]
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Problem> {
        self.problems
            .iter()
            .filter(move |problem| problem.category == category)
    }

    #[must_use]
    pub fn count(&self, category: Category, severity: Severity) -> usize {
        self.in_category(category)
            .filter(|problem| problem.severity == severity)
            .count()
    }
}
