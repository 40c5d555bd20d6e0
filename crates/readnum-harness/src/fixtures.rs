//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading fixture files.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single fixture test case.
///
/// `input` is the full scripted stream content, newlines included, exactly
/// as an interactive user would have typed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Entry point being tested (e.g. "read_i32", "read_line").
    pub function: String,
    /// C-heritage reference for the behavior under test.
    pub reference: String,
    /// Scripted stream content fed to the entry point.
    pub input: String,
    /// Expected returned value, rendered as text.
    pub expected_value: String,
    /// Expected diagnostic lines, in order.
    #[serde(default)]
    pub expected_diagnostics: Vec<String>,
}

/// A collection of fixture cases for one entry-point family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Entry-point family name (e.g. "scalar", "line").
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
