//! Integration tests for the `update` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

fn initialized() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.command().args(["init"]).assert().success();
    fixture
}

fn backups(fixture: &TestFixture) -> Vec<String> {
    let dir = fixture.path().join(".specs-backup");
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn update_outside_project_exits_two() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["update"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not contain a specs project"))
        .stderr(predicate::str::contains("specs init"));
}

#[test]
fn update_refreshes_templates_with_backup() {
    let fixture = initialized();
    fixture.create_file("specs/checklist.md", "edited checklist");

    fixture
        .command()
        .args(["update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created in"));

    assert_ne!(fixture.read("specs/checklist.md"), "edited checklist");
    let backups = backups(&fixture);
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fixture.read(&format!(".specs-backup/{}/specs/checklist.md", backups[0])),
        "edited checklist"
    );
}

#[test]
fn update_dry_run_writes_nothing() {
    let fixture = initialized();
    fixture.create_file("specs/checklist.md", "edited checklist");

    fixture
        .command()
        .args(["update", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(fixture.read("specs/checklist.md"), "edited checklist");
    assert!(backups(&fixture).is_empty());
}

#[test]
fn update_keeps_customized_rules() {
    let fixture = initialized();
    let custom = "# Team Rules\n\n## Deploy\n- Fridays only\n\n## Review\n- Two approvals\n";
    fixture.create_file(".cursorrules", custom);

    fixture
        .command()
        .args(["update", "--no-backup", "--merge"])
        .assert()
        .success()
        .stderr(predicate::str::contains("⚠ Warning"));

    assert_eq!(fixture.read(".cursorrules"), custom);
    assert!(fixture.path().join(".cursorrules-updated").exists());
    let merged = fixture.read(".cursorrules-merged");
    assert!(merged.contains("## Deploy"));
    assert!(backups(&fixture).is_empty());
}

#[test]
fn update_force_overwrites_customized_rules() {
    let fixture = initialized();
    fixture.create_file(".cursorrules", "# Mine\n\n## Only mine\n- a\n");

    fixture
        .command()
        .args(["update", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local changes overwritten"));

    assert!(!fixture.read(".cursorrules").contains("Only mine"));
}
