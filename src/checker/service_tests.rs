use std::path::Path;

use super::*;
use crate::checker::Severity;
use crate::error::SpecsError;
use crate::filesystem::memory::MemoryFileSystem;

fn check(fs: &MemoryFileSystem) -> CheckReport {
    ConsistencyChecker::new(fs).check(Path::new("/specs")).unwrap()
}

fn messages(report: &CheckReport, category: Category) -> Vec<String> {
    report
        .in_category(category)
        .map(|problem| problem.message.clone())
        .collect()
}

#[test]
fn clean_directory_has_no_problems() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/00-context.spec.md", "# C\nSee [next](01-auth.spec.md)\n")
        .with_file("/specs/01-auth.spec.md", "# A\n");
    let report = check(&fs);
    assert_eq!(report.total_specs, 2);
    assert!(!report.has_problems());
    assert!(report.summary.values().all(|count| *count == 0));
}

#[test]
fn gap_produces_single_warning() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/00-a.spec.md", "# A\n")
        .with_file("/specs/01-b.spec.md", "# B\n")
        .with_file("/specs/03-c.spec.md", "# C\n");
    let report = check(&fs);
    assert_eq!(messages(&report, Category::Numbering), vec!["gap detected: missing 02"]);
    assert_eq!(report.count(Category::Numbering, Severity::Warning), 1);
    assert_eq!(report.count(Category::Numbering, Severity::Error), 0);
}

#[test]
fn gaps_are_bounded_by_observed_numbers() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/05-a.spec.md", "# A\n")
        .with_file("/specs/07-b.spec.md", "# B\n");
    let report = check(&fs);
    assert_eq!(messages(&report, Category::Numbering), vec!["gap detected: missing 06"]);
}

#[test]
fn duplicate_number_reports_each_file() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/01-a.spec.md", "# A\n")
        .with_file("/specs/01-b.spec.md", "# B\n");
    let report = check(&fs);
    let duplicates: Vec<_> = report.in_category(Category::Numbering).collect();
    assert_eq!(duplicates.len(), 2);
    for problem in &duplicates {
        assert_eq!(problem.severity, Severity::Error);
        assert_eq!(problem.message, "duplicate numbering: 01 used in 2 files");
    }
    assert_eq!(duplicates[0].file.as_deref(), Some("01-a.spec.md"));
    assert_eq!(duplicates[1].file.as_deref(), Some("01-b.spec.md"));
}

#[test]
fn broken_numbered_link_reports_line() {
    let fs = MemoryFileSystem::new().with_file(
        "/specs/01-a.spec.md",
        "# A\n\nText\nDepends on [x](02-missing.spec.md).\n",
    );
    let report = check(&fs);
    let links: Vec<_> = report.in_category(Category::Links).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].message, "link to '02-missing.spec.md' not found");
    assert_eq!(links[0].file.as_deref(), Some("01-a.spec.md"));
    assert_eq!(links[0].line, Some(4));
    assert_eq!(links[0].location().as_deref(), Some("01-a.spec.md:4"));
}

#[test]
fn numbered_link_resolves_by_number_not_name() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/01-a.spec.md", "# A\n[b](02-old-name.spec.md)\n")
        .with_file("/specs/02-b.spec.md", "# B\n");
    let report = check(&fs);
    assert_eq!(report.count(Category::Links, Severity::Error), 0);
    assert_eq!(
        messages(&report, Category::Orphans),
        vec!["referenced spec does not exist: 02-old-name.spec.md"]
    );
}

#[test]
fn unnumbered_link_checks_file_on_disk() {
    let fs = MemoryFileSystem::new()
        .with_file(
            "/specs/01-a.spec.md",
            "# A\n[t](template-default.spec.md)\n[g](guide.spec.md)\n",
        )
        .with_file("/specs/template-default.spec.md", "# T\n");
    let report = check(&fs);
    let links: Vec<_> = report.in_category(Category::Links).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].message, "link to 'guide.spec.md' not found");
    assert_eq!(links[0].line, Some(3));
}

#[test]
fn links_to_other_files_are_ignored() {
    let fs = MemoryFileSystem::new().with_file(
        "/specs/01-a.spec.md",
        "# A\n[docs](https://example.com)\n[readme](../README.md)\n",
    );
    assert!(!check(&fs).has_problems());
}

#[test]
fn orphans_are_deduplicated_by_name() {
    let fs = MemoryFileSystem::new()
        .with_file(
            "/specs/01-a.spec.md",
            "# A\n[x](05-gone.spec.md) and [y](05-gone.spec.md)\n",
        )
        .with_file("/specs/02-b.spec.md", "# B\n[z](sub/05-gone.spec.md)\n");
    let report = check(&fs);
    assert_eq!(report.count(Category::Links, Severity::Error), 3);
    assert_eq!(
        messages(&report, Category::Orphans),
        vec!["referenced spec does not exist: 05-gone.spec.md"]
    );
    assert_eq!(report.summary[&Category::Orphans], 1);
}

#[test]
fn file_without_number_is_a_format_error() {
    let fs = MemoryFileSystem::new().with_file("/specs/invalid-format.spec.md", "# X\n");
    let report = check(&fs);
    assert_eq!(report.problems.len(), 1);
    assert_eq!(report.problems[0].category, Category::Format);
    assert_eq!(
        report.problems[0].message,
        "file name does not follow the {number}-{name}.spec.md pattern"
    );
}

#[test]
fn empty_descriptive_name_is_a_distinct_format_error() {
    let fs = MemoryFileSystem::new().with_file("/specs/01-.spec.md", "# X\n");
    let report = check(&fs);
    assert_eq!(
        messages(&report, Category::Format),
        vec!["descriptive name is empty"]
    );
}

#[test]
fn nested_files_use_forward_slash_relative_paths() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/sub/01-a.spec.md", "# A\n")
        .with_file("/specs/sub/deeper/01-b.spec.md", "# B\n");
    let report = check(&fs);
    let files: Vec<_> = report
        .in_category(Category::Numbering)
        .filter_map(|problem| problem.file.clone())
        .collect();
    assert_eq!(files, vec!["sub/01-a.spec.md", "sub/deeper/01-b.spec.md"]);
}

#[test]
fn summary_lists_every_category_in_display_order() {
    let fs = MemoryFileSystem::new().with_file("/specs/bad.spec.md", "# X\n");
    let report = check(&fs);
    let keys: Vec<_> = report.summary.keys().copied().collect();
    assert_eq!(keys, Category::ALL.to_vec());
    assert_eq!(report.summary[&Category::Format], 1);
}

#[test]
fn invalid_utf8_content_is_read_lossily() {
    let fs = MemoryFileSystem::new()
        .with_bytes("/specs/01-a.spec.md", &[0xff, 0xfe, b'[', b']'])
        .with_file("/specs/02-b.spec.md", "# B\n");
    let report = check(&fs);
    assert_eq!(report.total_specs, 2);
    assert!(!report.has_problems());
}

#[test]
fn root_must_be_a_directory() {
    let fs = MemoryFileSystem::new().with_file("/specs/01-a.spec.md", "# A\n");
    let checker = ConsistencyChecker::new(&fs);
    let err = checker
        .check(Path::new("/specs/01-a.spec.md"))
        .unwrap_err();
    assert!(matches!(err, SpecsError::NotADirectory(_)));
    let err = checker.check(Path::new("/nowhere")).unwrap_err();
    assert!(matches!(err, SpecsError::PathNotFound(_)));
}
