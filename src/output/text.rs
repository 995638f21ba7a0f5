use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::checker::{Category, CheckReport, Problem, Severity};
use crate::dashboard::{Dashboard, Progress, SpecProgress};
use crate::error::Result;
use crate::lister::{Listing, SpecEntry};
use crate::validator::{
    FileValidation, SpecStatus, StatusCounts, ValidationReport, checklist_fraction,
};

use super::OutputFormatter;
use super::path::display_path;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

const PROGRESS_BAR_WIDTH: usize = 10;
const NAME_COLUMN_WIDTH: usize = 30;

const MIN_NUMBER_WIDTH: usize = 10;
const MIN_NAME_WIDTH: usize = 20;
const MIN_STATUS_WIDTH: usize = 10;

pub struct TextFormatter {
    use_colors: bool,
    base: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            base: None,
        }
    }

    /// Print paths relative to `base` when they live below it.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn display(&self, path: &Path) -> String {
        display_path(path, self.base.as_deref())
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn status_icon(status: SpecStatus) -> &'static str {
        match status {
            SpecStatus::Complete => "✓",
            SpecStatus::Incomplete => "⚠",
            SpecStatus::Error => "✗",
        }
    }

    const fn status_color(status: SpecStatus) -> &'static str {
        match status {
            SpecStatus::Complete => ansi::GREEN,
            SpecStatus::Incomplete => ansi::YELLOW,
            SpecStatus::Error => ansi::RED,
        }
    }

    const fn status_word(status: SpecStatus) -> &'static str {
        match status {
            SpecStatus::Complete => "complete",
            SpecStatus::Incomplete => "incomplete",
            SpecStatus::Error => "error",
        }
    }

    fn format_file(&self, output: &mut String, file: &FileValidation) {
        let status = file.result.status();
        let icon = Self::status_icon(status);
        let word = self.colorize(Self::status_word(status), Self::status_color(status));
        let path = self.display(&file.path);

        match file.result.errors.as_slice() {
            [] => {
                let fraction = checklist_fraction(&file.result.checklist);
                writeln!(output, "{icon} {path}: {word} ({fraction} checklist items)").ok();
            }
            [error] => {
                writeln!(output, "{icon} {path}: {word} - {error}").ok();
            }
            errors => {
                writeln!(output, "{icon} {path}: {word}").ok();
                for error in errors {
                    writeln!(output, "   - {error}").ok();
                }
            }
        }
    }

    fn format_counts(&self, output: &mut String, counts: &StatusCounts) {
        writeln!(output, "Summary:").ok();
        writeln!(output, "  Total: {} specs", counts.total).ok();
        writeln!(
            output,
            "  Complete: {}",
            self.colorize(&counts.complete.to_string(), ansi::GREEN)
        )
        .ok();
        writeln!(
            output,
            "  Incomplete: {}",
            self.colorize(&counts.incomplete.to_string(), ansi::YELLOW)
        )
        .ok();
        writeln!(
            output,
            "  With errors: {}",
            self.colorize(&counts.with_errors.to_string(), ansi::RED)
        )
        .ok();
    }

    fn format_table(&self, output: &mut String, specs: &[SpecEntry]) {
        let status_text = |spec: &SpecEntry| {
            format!(
                "{} {}",
                Self::status_icon(spec.status),
                Self::status_word(spec.status)
            )
        };

        let number_width = specs
            .iter()
            .map(|spec| spec.number.chars().count())
            .fold(MIN_NUMBER_WIDTH, usize::max);
        let name_width = specs
            .iter()
            .map(|spec| spec.name.chars().count())
            .fold(MIN_NAME_WIDTH, usize::max);
        let status_width = specs
            .iter()
            .map(|spec| status_text(spec).chars().count())
            .fold(MIN_STATUS_WIDTH, usize::max);

        writeln!(
            output,
            "{:<number_width$}  {:<name_width$}  Status",
            "Number", "Name"
        )
        .ok();
        writeln!(
            output,
            "{}  {}  {}",
            "─".repeat(number_width),
            "─".repeat(name_width),
            "─".repeat(status_width)
        )
        .ok();

        for spec in specs {
            let status = self.colorize(&status_text(spec), Self::status_color(spec.status));
            writeln!(
                output,
                "{:<number_width$}  {:<name_width$}  {status}",
                spec.number, spec.name
            )
            .ok();
        }
    }

    fn format_category(&self, output: &mut String, report: &CheckReport, category: Category) {
        let problems: Vec<&Problem> = report.in_category(category).collect();
        if problems.is_empty() {
            writeln!(output, "{} {category}: OK", self.colorize("✓", ansi::GREEN)).ok();
            return;
        }

        let errors = report.count(category, Severity::Error);
        let warnings = report.count(category, Severity::Warning);
        let (icon, color) = if errors > 0 {
            ("✗", ansi::RED)
        } else {
            ("⚠", ansi::YELLOW)
        };
        let headline = match (errors, warnings) {
            (0, w) => format!("{} found", plural(w, "warning")),
            (e, 0) => format!("{} found", plural(e, "problem")),
            (e, w) => format!(
                "{} found ({}, {})",
                plural(e + w, "problem"),
                plural(e, "error"),
                plural(w, "warning")
            ),
        };
        writeln!(output, "{} {category}: {headline}", self.colorize(icon, color)).ok();

        for problem in problems {
            match problem.location() {
                Some(location) => writeln!(output, "  - {location}: {}", problem.message).ok(),
                None => writeln!(output, "  - {}", problem.message).ok(),
            };
        }
        writeln!(output).ok();
    }

    fn progress_bar(progress: Progress) -> String {
        let filled = if progress.total == 0 {
            0
        } else {
            (progress.marked * PROGRESS_BAR_WIDTH / progress.total).min(PROGRESS_BAR_WIDTH)
        };
        format!(
            "[{}{}]",
            "█".repeat(filled),
            " ".repeat(PROGRESS_BAR_WIDTH - filled)
        )
    }
}

/// `"1 warning"`, `"2 warnings"`.
fn plural(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}

/// `NN-name` when the spec has a number, otherwise just the name.
fn spec_title(spec: &SpecProgress) -> String {
    if spec.number.is_empty() {
        spec.name.clone()
    } else {
        format!("{}-{}", spec.number, spec.name)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();

        if report.directory {
            let root = self.display(&report.root);
            if report.results.is_empty() {
                writeln!(output, "No specs found in {root}").ok();
                return Ok(output);
            }
            writeln!(output, "Validating specs in {root}...").ok();
            writeln!(output).ok();
        }

        for file in &report.results {
            self.format_file(&mut output, file);
        }

        if report.directory {
            writeln!(output).ok();
            self.format_counts(&mut output, &report.summary);
        }

        Ok(output)
    }

    fn format_listing(&self, listing: &Listing) -> Result<String> {
        let mut output = String::new();

        if listing.specs.is_empty() {
            writeln!(output, "No specs found").ok();
            return Ok(output);
        }

        self.format_table(&mut output, &listing.specs);
        writeln!(output).ok();
        self.format_counts(&mut output, &listing.summary);

        Ok(output)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        if !report.has_problems() {
            for category in Category::ALL {
                writeln!(output, "{} {category}: OK", self.colorize("✓", ansi::GREEN)).ok();
            }
            writeln!(output).ok();
            writeln!(output, "All checks passed!").ok();
            return Ok(output);
        }

        for category in Category::ALL {
            self.format_category(&mut output, report, category);
        }

        writeln!(output, "Summary:").ok();
        writeln!(output, "  Total specs: {}", report.total_specs).ok();
        writeln!(output, "  Problems found: {}", report.problems.len()).ok();
        for (category, count) in &report.summary {
            writeln!(output, "  - {category}: {count}").ok();
        }

        Ok(output)
    }

    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String> {
        let mut output = String::new();
        let summary = &dashboard.summary;

        writeln!(output, "{}", self.colorize("Specs Dashboard", ansi::BOLD)).ok();
        writeln!(output).ok();
        writeln!(output, "Summary:").ok();
        writeln!(
            output,
            "  Specifications: {} specs, {} requirements",
            summary.total_specs, summary.total_requirements
        )
        .ok();
        writeln!(output, "  In progress: {}", summary.in_progress).ok();
        writeln!(output, "  Complete: {}", summary.complete).ok();
        writeln!(output, "  Overall progress: {}", summary.overall_label).ok();
        writeln!(output).ok();

        let in_progress = dashboard.in_progress();
        if !in_progress.is_empty() {
            writeln!(output, "In progress:").ok();
            for spec in in_progress {
                let bar = self.colorize(&Self::progress_bar(spec.progress), ansi::CYAN);
                writeln!(
                    output,
                    "  {:<NAME_COLUMN_WIDTH$} {bar} {}%",
                    spec_title(spec),
                    spec.progress.percent()
                )
                .ok();
            }
            writeln!(output).ok();
        }

        let mut complete = dashboard.complete().peekable();
        if complete.peek().is_some() {
            writeln!(output, "Complete:").ok();
            for spec in complete {
                writeln!(
                    output,
                    "  {} {}",
                    self.colorize("✓", ansi::GREEN),
                    spec_title(spec)
                )
                .ok();
            }
            writeln!(output).ok();
        }

        writeln!(output, "Specifications:").ok();
        for spec in &dashboard.specs {
            writeln!(
                output,
                "  {:<NAME_COLUMN_WIDTH$} {} requirements",
                spec_title(spec),
                spec.requirements
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
