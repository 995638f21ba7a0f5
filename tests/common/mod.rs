#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the specs binary.
#[macro_export]
macro_rules! specs {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("specs"))
    };
}

const SECTIONS: [&str; 12] = [
    "Contexto e Objetivo",
    "Requisitos Funcionais",
    "Contratos e Interfaces",
    "Fluxos e Estados",
    "Dados",
    "NFRs (Não Funcionais)",
    "Guardrails",
    "Critérios de Aceite",
    "Testes",
    "Migração / Rollback",
    "Observações Operacionais",
    "Abertos / Fora de Escopo",
];

/// Creates a temporary directory with test fixtures for integration tests.
///
/// The user configuration lives in `<temp>/config`, so tests never read or
/// write the real one.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `XDG_CONFIG_HOME` used by [`command`](Self::command).
    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home().join("specs").join("config.json")
    }

    /// Writes the user configuration file.
    pub fn create_config(&self, content: &str) {
        let path = self.config_file();
        fs::create_dir_all(path.parent().expect("config file has a parent"))
            .expect("Failed to create config directory");
        fs::write(path, content).expect("Failed to write config");
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A specs command running in the temp directory with an isolated config.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = specs!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1");
        cmd
    }

    /// Writes a well-formed spec with `marked` of six checklist items checked
    /// and `requirements` RF lines.
    pub fn create_spec(&self, relative_path: &str, marked: usize, requirements: usize) {
        self.create_file(relative_path, &spec_document(marked, requirements));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn spec_document(marked: usize, requirements: usize) -> String {
    let mut doc = String::from("# NN - Test Spec\n\n");
    for (index, section) in SECTIONS.iter().enumerate() {
        let _ = writeln!(doc, "## {}. {section}\n", index + 1);
        if index == 1 {
            for rf in 1..=requirements {
                let _ = writeln!(doc, "- **RF{rf:02}**: requirement {rf}");
            }
            doc.push('\n');
        } else {
            doc.push_str("Text.\n\n");
        }
    }
    doc.push_str("## Checklist Rápido\n\n");
    for item in 0..6 {
        let mark = if item < marked { 'x' } else { ' ' };
        let _ = writeln!(doc, "- [{mark}] Item {}", item + 1);
    }
    doc
}
