//! Decoration registry
//!
//! The registry holds one entry per (category, sub-key) pair: a style that
//! is created once and a list of ranges that every pass replaces. Entries
//! keep their first-registration order, so the painted output is stable
//! from one redraw to the next.

use std::collections::HashMap;

use super::category::Category;
use super::style::{MatchInstance, Style};

/// Style and current ranges of one (category, sub-key) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub category: Category,
    pub sub_key: String,
    /// Fixed when the entry is created
    pub style: Style,
    /// Matches of the latest pass
    pub ranges: Vec<MatchInstance>,
}

/// One paint instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration<'r> {
    pub category: Category,
    pub sub_key: &'r str,
    pub style: &'r Style,
    pub ranges: &'r [MatchInstance],
}

/// Owned table of registry entries
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    index: HashMap<(Category, String), usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find or create the entry for `category`/`sub_key`
    ///
    /// An existing entry keeps the style it was created with.
    pub fn register(&mut self, category: Category, sub_key: &str, style: Style) -> &mut RegistryEntry {
        let key = (category, sub_key.to_string());
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.entries.push(RegistryEntry {
                    category,
                    sub_key: key.1.clone(),
                    style,
                    ranges: Vec::new(),
                });
                let idx = self.entries.len() - 1;
                self.index.insert(key, idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    /// Record one match, creating the entry if needed
    pub fn push(&mut self, category: Category, sub_key: &str, style: Style, instance: MatchInstance) {
        self.register(category, sub_key, style).ranges.push(instance);
    }

    /// Look up an entry
    pub fn get(&self, category: Category, sub_key: &str) -> Option<&RegistryEntry> {
        self.index
            .get(&(category, sub_key.to_string()))
            .map(|&idx| &self.entries[idx])
    }

    /// Clear every entry's ranges, keeping the styles
    pub fn reset_ranges(&mut self) {
        for entry in &mut self.entries {
            entry.ranges.clear();
        }
    }

    /// Drop every entry
    pub fn reset_all(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Paint instructions, in first-registration order
    ///
    /// Entries without ranges are included so a renderer can clear them.
    pub fn flatten(&self) -> Vec<Decoration<'_>> {
        self.entries
            .iter()
            .map(|entry| Decoration {
                category: entry.category,
                sub_key: &entry.sub_key,
                style: &entry.style,
                ranges: &entry.ranges,
            })
            .collect()
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of ranges across all entries
    pub fn total_ranges(&self) -> usize {
        self.entries.iter().map(|entry| entry.ranges.len()).sum()
    }
}
