//! Single-field pattern matching.

use regex::Regex;

/// A compiled extraction pattern for one logical field.
///
/// A pattern either yields its full first match or, when a capture group
/// index is configured, the content of that group.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    regex: Regex,
    group: Option<usize>,
}

impl FieldPattern {
    /// Compile a pattern whose full match is the field value.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            group: None,
        })
    }

    /// Compile a pattern whose value is the given capture group.
    pub fn with_group(pattern: &str, group: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            group: Some(group),
        })
    }

    /// Extract the field value from `text`.
    ///
    /// Returns `None` when the pattern has no match; a match is never an
    /// error. If the configured capture group did not participate in the
    /// match, the full match is returned instead.
    pub fn extract(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let matched = self
            .group
            .and_then(|g| caps.get(g))
            .or_else(|| caps.get(0))?;
        Some(matched.as_str().to_string())
    }
}
