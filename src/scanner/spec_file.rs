use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Literal file-name suffix of a spec document.
pub const SPEC_SUFFIX: &str = ".spec.md";

/// Two-digit, zero-padded prefix of a spec file name (`07` in `07-auth.spec.md`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SpecNumber(String);

impl SpecNumber {
    /// Parses the part before the first hyphen; it must be exactly two ASCII digits.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (prefix, _) = file_name.split_once('-')?;
        (prefix.len() == 2 && prefix.bytes().all(|b| b.is_ascii_digit()))
            .then(|| Self(prefix.to_string()))
    }

    #[must_use]
    pub fn from_value(value: u32) -> Self {
        Self(format!("{value:02}"))
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpecNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number and descriptive name shown for a spec in listings and the dashboard.
///
/// `number` doubles as the sort key: the two-digit [`SpecNumber`] when the
/// file name has one, otherwise the leading digits of the stem (often empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecLabel {
    pub number: String,
    pub name: String,
}

impl SpecLabel {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let file_name = file_name(path);
        let stem = file_name.strip_suffix(SPEC_SUFFIX).unwrap_or(&file_name);

        if let Some(number) = SpecNumber::from_file_name(stem) {
            let name = stem[number.as_str().len() + 1..].to_string();
            return Self {
                number: number.0,
                name,
            };
        }

        let digits_len = stem.bytes().take_while(u8::is_ascii_digit).count();
        let rest = stem[digits_len..].trim_start_matches('-');
        let name = if rest.is_empty() { stem } else { rest };
        Self {
            number: stem[..digits_len].to_string(),
            name: name.to_string(),
        }
    }
}

/// Final path component as text.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "spec_file_tests.rs"]
mod tests;
