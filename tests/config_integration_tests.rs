//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_show_without_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("file does not exist"))
        .stdout(predicate::str::contains("\"default_path\": \"./specs\""));
}

#[test]
fn config_set_then_get() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "set", "specs.default_path", "docs"])
        .assert()
        .success()
        .stdout("Configuration updated: specs.default_path = docs\n");

    assert!(fixture.config_file().exists());

    fixture
        .command()
        .args(["config", "get", "specs.default_path"])
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn configured_default_path_drives_validate() {
    let fixture = TestFixture::new();
    fixture.create_spec("docs/01-login.spec.md", 6, 1);

    fixture
        .command()
        .args(["config", "set", "specs.default_path", "docs"])
        .assert()
        .success();

    fixture
        .command()
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/01-login.spec.md"));
}

#[test]
fn config_unknown_key_exits_two() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "set", "specs.theme", "dark"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown configuration key: specs.theme"));
}

#[test]
fn config_invalid_boolean_exits_two() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "set", "specs.exclude_templates", "maybe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected a boolean"));
}

#[test]
fn malformed_config_file_is_reported() {
    let fixture = TestFixture::new();
    fixture.create_config("{ not json");
    fixture.create_spec("specs/01-login.spec.md", 6, 1);

    fixture
        .command()
        .args(["validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration file"));
}
