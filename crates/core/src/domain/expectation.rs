// Expectation Domain Model

use super::error::{DomainError, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

/// Label naming the MCP server a check belongs to
pub type Label = String;

/// A named line that must appear verbatim in the command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub label: Label,
    pub expected_line: String,
}

impl Expectation {
    /// Expect the "connected" line `gemini mcp list` prints for a stdio server
    /// launched through `npx -y <package>`.
    ///
    /// # Example
    /// ```
    /// use mcpcheck_core::domain::Expectation;
    ///
    /// let exp = Expectation::connected("gcloud", "gcloud-mcp").unwrap();
    /// assert_eq!(exp.expected_line, "gcloud: npx -y gcloud-mcp (stdio) - Connected");
    /// ```
    pub fn connected(label: impl Into<String>, package: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let package = package.into();
        if package.trim().is_empty() {
            return Err(DomainError::InvalidExpectation(format!(
                "package for '{}' must not be empty",
                label
            )));
        }
        let line = connected_line(&label, &package);
        Self::literal(label, line)
    }

    /// Expect an arbitrary literal line
    pub fn literal(label: impl Into<String>, line: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let expected_line = line.into();

        if label.trim().is_empty() {
            return Err(DomainError::InvalidExpectation(
                "label must not be empty".to_string(),
            ));
        }
        if expected_line.is_empty() {
            return Err(DomainError::InvalidExpectation(format!(
                "expected line for '{}' must not be empty",
                label
            )));
        }

        Ok(Self {
            label,
            expected_line,
        })
    }

    /// Literal substring test against captured output
    pub fn is_satisfied_by(&self, output: &str) -> bool {
        output.contains(&self.expected_line)
    }
}

fn connected_line(label: &str, package: &str) -> String {
    format!("{}: npx -y {} (stdio) - Connected", label, package)
}

/// Ordered, label-unique collection of expectations.
///
/// Built once before the run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationSet {
    expectations: Vec<Expectation>,
}

impl ExpectationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The servers the gcloud-mcp repository registers with the Gemini CLI
    pub fn gemini_defaults() -> Self {
        let mut set = Self::new();
        for (label, package) in [
            ("gcloud", "gcloud-mcp"),
            ("observability", "observability-mcp"),
        ] {
            // Constant inputs are non-empty and unique
            set.expectations.push(Expectation {
                label: label.to_string(),
                expected_line: connected_line(label, package),
            });
        }
        set
    }

    /// Build from `(label, package)` pairs using the "connected" template
    pub fn from_packages<I, L, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: Into<String>,
    {
        let mut set = Self::new();
        for (label, package) in pairs {
            set.push(Expectation::connected(label, package)?)?;
        }
        Ok(set)
    }

    /// Parse a JSON object of `{ "label": "package" }`.
    ///
    /// Entries are taken in file order; a repeated label is rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: PackageEntries = serde_json::from_str(json)
            .map_err(|e| DomainError::ValidationError(format!("invalid expectations JSON: {}", e)))?;

        Self::from_packages(entries.0)
    }

    /// Read and parse an expectations file (see `from_json_str`)
    pub fn from_json_file(path: &Path) -> crate::error::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&json)?)
    }

    /// Append an expectation, rejecting a label that is already present
    pub fn push(&mut self, expectation: Expectation) -> Result<()> {
        if self.contains_label(&expectation.label) {
            return Err(DomainError::DuplicateLabel(expectation.label));
        }
        self.expectations.push(expectation);
        Ok(())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.expectations.iter().any(|e| e.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expectation> {
        self.expectations.iter()
    }

    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

/// Every `(label, package)` entry of a JSON object, duplicates included.
///
/// `serde_json::Map` would keep only the last value of a repeated key.
struct PackageEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for PackageEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = PackageEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping labels to package names")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(PackageEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'a> IntoIterator for &'a ExpectationSet {
    type Item = &'a Expectation;
    type IntoIter = std::slice::Iter<'a, Expectation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
