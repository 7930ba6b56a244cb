//! Validated match patterns
//!
//! Table fragments arrive as plain strings. They are escaped and compiled
//! into a `Pattern` when the table is loaded, so no metacharacter in a
//! fragment can change what a rule matches.

use regex::Regex;

use crate::error::{GlyphError, Result};

/// A compiled, validated match pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    literal: Option<String>,
}

impl Pattern {
    /// Pattern matching `fragment` verbatim
    pub fn literal(fragment: &str) -> Result<Self> {
        if fragment.is_empty() {
            return Err(GlyphError::EmptyPattern);
        }
        let regex = compile(&regex::escape(fragment))?;
        Ok(Self {
            regex,
            literal: Some(fragment.to_string()),
        })
    }

    /// Pattern from regex syntax
    ///
    /// Patterns that can match the empty string are rejected: they would
    /// decorate nothing and stall a scan.
    pub fn regex(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(GlyphError::EmptyPattern);
        }
        let regex = compile(pattern)?;
        if regex.is_match("") {
            return Err(GlyphError::EmptyMatch(pattern.to_string()));
        }
        Ok(Self { regex, literal: None })
    }

    /// The fragment this pattern was built from, if it is a literal
    pub fn literal_text(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Regex source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the first match starting at or after byte `start`
    ///
    /// Text before `start` still counts as context for `\b` and friends.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start > text.len() {
            return None;
        }
        self.regex.find_at(text, start).map(|m| (m.start(), m.end()))
    }
}

/// Compile a regex, naming the offending source on failure
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| GlyphError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
