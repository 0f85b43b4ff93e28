//! Parsing the lines of a `require` block into dependency entries.

use crate::error::{MatchError, Result};
use regex::Regex;
use std::collections::HashMap;

/// `<name><whitespace><version-spec>`; the version keeps anything after the
/// first whitespace run verbatim, including `// indirect` comments.
const ENTRY_PATTERN: &str = r"^(\S+)\s+(.+)$";

/// Dependencies of one `require` block, in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    order: Vec<String>,
    versions: HashMap<String, String>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dependency.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if `name` is already present.
    pub fn push(&mut self, name: impl Into<String>, version: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.versions.contains_key(&name) {
            return Err(MatchError::DuplicateEntry(name));
        }
        self.versions.insert(name.clone(), version.into());
        self.order.push(name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Version spec recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    /// Names in listing order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Replaces the version of an existing dependency, returning the old one.
    ///
    /// Unknown names are ignored; the set of dependencies never grows.
    pub fn replace_version(&mut self, name: &str, version: &str) -> Option<String> {
        self.versions
            .get_mut(name)
            .map(|slot| std::mem::replace(slot, version.to_string()))
    }

    /// `(name, version)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.versions[name].as_str()))
    }
}

/// Parses the body of a `require` block.
///
/// Blank lines are skipped. Every other line is trimmed and split on its
/// first run of whitespace into name and version spec.
///
/// # Errors
///
/// - `MalformedEntry` if a non-blank line has no whitespace separator
/// - `DuplicateEntry` if a name appears twice
pub fn parse_entries(body: &str) -> Result<Requirements> {
    let pattern = Regex::new(ENTRY_PATTERN)?;
    let mut requirements = Requirements::new();

    for (idx, raw) in body.trim().lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let caps = pattern
            .captures(line)
            .ok_or_else(|| MatchError::MalformedEntry {
                line: idx + 1,
                content: line.to_string(),
            })?;

        requirements.push(&caps[1], &caps[2])?;
    }

    log::debug!("parsed {} require entries", requirements.len());
    Ok(requirements)
}
