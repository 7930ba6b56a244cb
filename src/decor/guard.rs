//! Adjacency guards
//!
//! A guard inspects the text right before or right after a candidate
//! match. Rules use guards to stay out of each other's territory: the
//! bare `<` rule refuses to fire when the next character is `=`, so `<=`
//! is only ever decorated by the `<=` rule.
//!
//! Guards look at a fixed window of context, not the whole document. A
//! before-guard is anchored at the end of its window, an after-guard at
//! the start of its window.

use std::collections::HashMap;

use regex::Regex;

use super::pattern::compile;
use crate::error::Result;

/// Number of characters of context a guard can see
pub const CONTEXT_CHARS: usize = 32;

/// Double capital letter naming a set (`NN`, `RR`, ...)
///
/// Spelled out because the regex crate has no backreferences.
macro_rules! double_capital {
    () => {
        r"\b(?:AA|BB|CC|DD|EE|FF|GG|HH|II|JJ|KK|LL|MM|NN|OO|PP|QQ|RR|SS|TT|UU|VV|WW|XX|YY|ZZ)"
    };
}
pub(crate) use double_capital;

/// Which side of the match a guard inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Before,
    After,
}

/// Whether the context must or must not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Is,
    Not,
}

/// Uncompiled guard, as written in rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardSpec {
    pub polarity: Polarity,
    pub pattern: &'static str,
}

impl GuardSpec {
    /// Context must match `pattern`
    pub const fn is(pattern: &'static str) -> Self {
        Self {
            polarity: Polarity::Is,
            pattern,
        }
    }

    /// Context must not match `pattern`
    pub const fn not(pattern: &'static str) -> Self {
        Self {
            polarity: Polarity::Not,
            pattern,
        }
    }
}

/// Not preceded by a word character or a modifier dot
pub const START_WORD_LIMIT: GuardSpec = GuardSpec::not(r"[A-Za-z0-9.]");

/// Not followed by a word character, a `.modifier` or a call parenthesis
///
/// `_` and `^` may follow, so `x_1` and `alpha^2` keep their glyph.
pub const WORD_LIMIT: GuardSpec = GuardSpec::not(r"[A-Za-z0-9(]|\.[A-Za-z]");

/// Not touching another arrow or comparison character
pub const ARROW_LIMIT: GuardSpec = GuardSpec::not(r"[<>=|:!\-]");

/// A compiled guard bound to one side of a match
#[derive(Debug, Clone)]
pub struct Guard {
    side: Side,
    polarity: Polarity,
    regex: Regex,
}

impl Guard {
    /// Compile a guard for `side`
    pub fn new(side: Side, polarity: Polarity, pattern: &str) -> Result<Self> {
        let anchored = match side {
            Side::Before => format!(r"(?:{pattern})\z"),
            Side::After => format!(r"\A(?:{pattern})"),
        };
        Ok(Self {
            side,
            polarity,
            regex: compile(&anchored)?,
        })
    }

    /// Compile a guard from a table spec
    pub fn from_spec(side: Side, spec: GuardSpec) -> Result<Self> {
        Self::new(side, spec.polarity, spec.pattern)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Test this guard around the match `start..end`
    ///
    /// At a text boundary the context is empty: an `Is` guard fails and a
    /// `Not` guard holds.
    pub fn test(&self, text: &str, start: usize, end: usize) -> bool {
        let context = match self.side {
            Side::Before => before_window(text, start),
            Side::After => after_window(text, end),
        };
        let found = self.regex.is_match(context);
        match self.polarity {
            Polarity::Is => found,
            Polarity::Not => !found,
        }
    }
}

/// Check both guards of a candidate match
pub fn accepts(
    text: &str,
    start: usize,
    end: usize,
    before: Option<&Guard>,
    after: Option<&Guard>,
) -> bool {
    before.map_or(true, |guard| guard.test(text, start, end))
        && after.map_or(true, |guard| guard.test(text, start, end))
}

/// Up to `CONTEXT_CHARS` characters ending at `start`
fn before_window(text: &str, start: usize) -> &str {
    let head = text.get(..start).unwrap_or("");
    let from = head
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    &head[from..]
}

/// Up to `CONTEXT_CHARS` characters starting at `end`
fn after_window(text: &str, end: usize) -> &str {
    let tail = text.get(end..).unwrap_or("");
    let to = tail
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(tail.len(), |(i, _)| i);
    &tail[..to]
}

/// Compiled guards shared between rules
///
/// Most rules use one of a handful of word limits; each is compiled once
/// per generation.
#[derive(Debug, Default)]
pub struct GuardCache {
    guards: HashMap<(Side, GuardSpec), Guard>,
}

impl GuardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled guard for `spec` on `side`
    pub fn get(&mut self, side: Side, spec: GuardSpec) -> Result<Guard> {
        if let Some(guard) = self.guards.get(&(side, spec)) {
            return Ok(guard.clone());
        }
        let guard = Guard::from_spec(side, spec)?;
        self.guards.insert((side, spec), guard.clone());
        Ok(guard)
    }

    /// Compile an optional spec
    pub fn get_opt(&mut self, side: Side, spec: Option<GuardSpec>) -> Result<Option<Guard>> {
        spec.map(|spec| self.get(side, spec)).transpose()
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}
