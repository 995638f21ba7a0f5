use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

use regex::Regex;

use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::scanner::{DirectoryScanner, SPEC_SUFFIX, SpecNumber, file_name};

use super::problem::{Category, CheckReport, Problem};

struct SpecEntry {
    rel_path: String,
    file_name: String,
    /// Lossy text; `None` when the file could not be read.
    content: Option<String>,
}

/// Checks file naming, numbering and cross-links across a spec directory.
///
/// Section and checklist rules are the validator's concern and are not
/// looked at here.
pub struct ConsistencyChecker<'a, F: FileSystem> {
    fs: &'a F,
    name_pattern: Regex,
    link_pattern: Regex,
}

impl<'a, F: FileSystem> ConsistencyChecker<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            name_pattern: Regex::new(r"^(\d{2})-(.*?)\.spec\.md$").expect("Invalid regex"),
            link_pattern: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid regex"),
        }
    }

    /// Runs every check over the spec files below `root`.
    ///
    /// # Errors
    /// Returns an error if `root` is not an existing directory or cannot be walked.
    /// Unreadable spec files are skipped by the link checks.
    pub fn check(&self, root: &Path) -> Result<CheckReport> {
        let files = DirectoryScanner::new(self.fs).scan_dir(root)?;
        let entries: Vec<SpecEntry> = files
            .iter()
            .map(|path| SpecEntry {
                rel_path: rel_posix(root, path),
                file_name: file_name(path),
                content: self
                    .fs
                    .read(path)
                    .ok()
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
            })
            .collect();

        let numbers = number_map(&entries);

        let mut problems = Vec::new();
        check_duplicates(&numbers, &mut problems);
        check_gaps(&numbers, &mut problems);
        self.check_file_names(&entries, &mut problems);
        self.check_links(root, &entries, &numbers, &mut problems);
        self.check_orphans(root, &entries, &mut problems);

        Ok(CheckReport::new(entries.len(), problems))
    }

    fn check_file_names(&self, entries: &[SpecEntry], problems: &mut Vec<Problem>) {
        for entry in entries {
            let message = match self.name_pattern.captures(&entry.file_name) {
                None => "file name does not follow the {number}-{name}.spec.md pattern",
                Some(caps) if caps.get(2).is_none_or(|name| name.as_str().is_empty()) => {
                    "descriptive name is empty"
                }
                Some(_) => continue,
            };
            problems.push(Problem::error(Category::Format, message).in_file(&entry.rel_path));
        }
    }

    fn check_links(
        &self,
        root: &Path,
        entries: &[SpecEntry],
        numbers: &BTreeMap<SpecNumber, Vec<String>>,
        problems: &mut Vec<Problem>,
    ) {
        for entry in entries {
            let Some(content) = &entry.content else {
                continue;
            };
            for (index, line) in content.lines().enumerate() {
                for target in self.spec_links(line) {
                    let linked_name = link_file_name(target);
                    let missing_name = match SpecNumber::from_file_name(linked_name) {
                        Some(number) if !numbers.contains_key(&number) => linked_name,
                        Some(_) => continue,
                        None if !self.fs.exists(&root.join(target)) => target,
                        None => continue,
                    };
                    problems.push(
                        Problem::error(
                            Category::Links,
                            format!("link to '{missing_name}' not found"),
                        )
                        .in_file(&entry.rel_path)
                        .at_line(index + 1),
                    );
                }
            }
        }
    }

    fn check_orphans(&self, root: &Path, entries: &[SpecEntry], problems: &mut Vec<Problem>) {
        let existing: BTreeSet<&str> = entries
            .iter()
            .map(|entry| entry.file_name.as_str())
            .collect();

        let referenced: BTreeSet<&str> = entries
            .iter()
            .filter_map(|entry| entry.content.as_deref())
            .flat_map(str::lines)
            .flat_map(|line| self.spec_links(line))
            .map(link_file_name)
            .collect();

        for name in referenced {
            if existing.contains(name) || self.fs.exists(&root.join(name)) {
                continue;
            }
            problems.push(Problem::error(
                Category::Orphans,
                format!("referenced spec does not exist: {name}"),
            ));
        }
    }

    /// Targets of `[label](target)` links on `line` that point at spec files.
    fn spec_links<'l>(&self, line: &'l str) -> Vec<&'l str> {
        self.link_pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(2))
            .map(|target| target.as_str())
            .filter(|target| target.ends_with(SPEC_SUFFIX))
            .collect()
    }
}

fn number_map(entries: &[SpecEntry]) -> BTreeMap<SpecNumber, Vec<String>> {
    let mut numbers: BTreeMap<SpecNumber, Vec<String>> = BTreeMap::new();
    for entry in entries {
        if let Some(number) = SpecNumber::from_file_name(&entry.file_name) {
            numbers.entry(number).or_default().push(entry.rel_path.clone());
        }
    }
    numbers
}

fn check_duplicates(numbers: &BTreeMap<SpecNumber, Vec<String>>, problems: &mut Vec<Problem>) {
    for (number, files) in numbers {
        if files.len() < 2 {
            continue;
        }
        for file in files {
            problems.push(
                Problem::error(
                    Category::Numbering,
                    format!("duplicate numbering: {number} used in {} files", files.len()),
                )
                .in_file(file),
            );
        }
    }
}

/// Warns about every unused number between the lowest and highest used one.
fn check_gaps(numbers: &BTreeMap<SpecNumber, Vec<String>>, problems: &mut Vec<Problem>) {
    let (Some((first, _)), Some((last, _))) = (numbers.first_key_value(), numbers.last_key_value())
    else {
        return;
    };
    for value in first.value()..=last.value() {
        let number = SpecNumber::from_value(value);
        if !numbers.contains_key(&number) {
            problems.push(Problem::warning(
                Category::Numbering,
                format!("gap detected: missing {number}"),
            ));
        }
    }
}

fn link_file_name(target: &str) -> &str {
    target
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(target)
}

fn rel_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::CurDir => Some(".".to_string()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();
    if parts.is_empty() {
        return file_name(path);
    }
    parts.join("/")
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
