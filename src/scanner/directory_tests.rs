use std::path::{Path, PathBuf};

use super::*;
use crate::filesystem::memory::MemoryFileSystem;

fn fixture() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_file("/specs/01-login.spec.md", "# Login")
        .with_file("/specs/00-context.spec.md", "# Context")
        .with_file("/specs/checklist.md", "# Checklist")
        .with_file("/specs/nested/02-deep.spec.md", "# Deep")
        .with_file("/other/03-outside.spec.md", "# Outside")
}

#[test]
fn scan_collects_spec_files_recursively() {
    let fs = fixture();
    let files = DirectoryScanner::new(&fs).scan(Path::new("/specs")).unwrap();

    assert_eq!(
        files,
        vec![
            PathBuf::from("/specs/00-context.spec.md"),
            PathBuf::from("/specs/01-login.spec.md"),
            PathBuf::from("/specs/nested/02-deep.spec.md"),
        ]
    );
}

#[test]
fn scan_with_filter_excludes_templates() {
    let fs = MemoryFileSystem::new()
        .with_file("/specs/01-login.spec.md", "# Login")
        .with_file("/specs/template-default.spec.md", "# Template");
    let filter = SpecFilter::new(&["template-*.spec.md"]).unwrap();
    let files = DirectoryScanner::with_filter(&fs, filter)
        .scan(Path::new("/specs"))
        .unwrap();

    assert_eq!(files, vec![PathBuf::from("/specs/01-login.spec.md")]);
}

#[test]
fn scan_dir_rejects_missing_root() {
    let fs = fixture();
    let err = DirectoryScanner::new(&fs)
        .scan_dir(Path::new("/missing"))
        .unwrap_err();
    assert!(matches!(err, SpecsError::PathNotFound(_)));
}

#[test]
fn scan_dir_rejects_file_root() {
    let fs = fixture();
    let err = DirectoryScanner::new(&fs)
        .scan_dir(Path::new("/specs/01-login.spec.md"))
        .unwrap_err();
    assert!(matches!(err, SpecsError::NotADirectory(_)));
}

#[test]
fn empty_directory_yields_no_files() {
    let fs = MemoryFileSystem::new().with_dir("/empty");
    let files = DirectoryScanner::new(&fs)
        .scan_dir(Path::new("/empty"))
        .unwrap();
    assert!(files.is_empty());
}
