//! Glyph table
//!
//! The table maps source fragments to glyphs, grouped into sections.
//! Fragments are compiled into literal patterns while the table loads, so
//! a table that loaded is a table that can be matched.

use std::fs;
use std::path::Path;

use log::{info, warn};
use toml::{Table, Value};

use super::category::Category;
use super::pattern::Pattern;
use crate::error::Result;

/// Built-in glyph table
const BUILTIN_SYMBOLS: &str = include_str!("../../symbols.toml");

/// Named sections of the glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Comparison,
    Arrows,
    Operators,
    Basics,
    BigLetters,
    Keywords,
    Sets,
    SetVariants,
    GreekLetters,
}

impl Section {
    /// Every section, in generation order
    pub const ALL: [Section; 9] = [
        Section::Comparison,
        Section::Arrows,
        Section::Operators,
        Section::Basics,
        Section::BigLetters,
        Section::Keywords,
        Section::Sets,
        Section::SetVariants,
        Section::GreekLetters,
    ];

    /// Key of this section in the table file
    pub fn key(&self) -> &'static str {
        match self {
            Section::Comparison => "comparison",
            Section::Arrows => "arrows",
            Section::Operators => "operators",
            Section::Basics => "basics",
            Section::BigLetters => "big-letters",
            Section::Keywords => "keywords",
            Section::Sets => "sets",
            Section::SetVariants => "set-variants",
            Section::GreekLetters => "greek-letters",
        }
    }

    /// Older camelCase key, still accepted
    fn alias(&self) -> Option<&'static str> {
        match self {
            Section::BigLetters => Some("bigLetters"),
            Section::SetVariants => Some("setsVariants"),
            Section::GreekLetters => Some("greekLetters"),
            _ => None,
        }
    }

    /// Category the section's rules are painted as
    pub fn category(&self) -> Category {
        match self {
            Section::Comparison => Category::Comparison,
            Section::Arrows => Category::Arrow,
            Section::Operators => Category::Operator,
            Section::Basics => Category::Number,
            Section::BigLetters => Category::BigLetter,
            Section::Keywords => Category::Keyword,
            Section::Sets | Section::SetVariants => Category::Set,
            Section::GreekLetters => Category::Letter,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|section| section == self).unwrap_or(0)
    }
}

/// One fragment → glyph mapping
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub fragment: String,
    pub pattern: Pattern,
    pub glyph: String,
}

/// Parsed glyph table
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    sections: [Vec<TableEntry>; 9],
}

impl GlyphTable {
    /// Table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SYMBOLS)
    }

    /// Read and parse a table file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = Self::parse(&contents)?;
        info!("loaded {} glyphs from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse a table document
    ///
    /// Only a syntax error fails the whole table. Missing sections are
    /// empty and malformed entries are skipped one by one.
    pub fn parse(contents: &str) -> Result<Self> {
        let document: Table = contents.parse()?;
        let mut table = Self::default();

        for section in Section::ALL {
            let value = document
                .get(section.key())
                .or_else(|| section.alias().and_then(|alias| document.get(alias)));
            let Some(value) = value else {
                continue;
            };
            let Some(entries) = value.as_table() else {
                warn!("glyph table section `{}` is not a table, skipped", section.key());
                continue;
            };
            for (fragment, glyph) in entries {
                if let Some(entry) = parse_entry(section, fragment, glyph) {
                    table.sections[section.index()].push(entry);
                }
            }
        }

        Ok(table)
    }

    /// Entries of one section, in file order
    pub fn entries(&self, section: Section) -> &[TableEntry] {
        &self.sections[section.index()]
    }

    /// Glyph for a fragment, searching every section
    pub fn glyph(&self, fragment: &str) -> Option<&str> {
        self.sections
            .iter()
            .flatten()
            .find(|entry| entry.fragment == fragment)
            .map(|entry| entry.glyph.as_str())
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_entry(section: Section, fragment: &str, glyph: &Value) -> Option<TableEntry> {
    let Some(glyph) = glyph.as_str().filter(|glyph| !glyph.is_empty()) else {
        warn!("glyph table `{}`: `{}` has no glyph, skipped", section.key(), fragment);
        return None;
    };
    match Pattern::literal(fragment) {
        Ok(pattern) => Some(TableEntry {
            fragment: fragment.to_string(),
            pattern,
            glyph: glyph.to_string(),
        }),
        Err(err) => {
            warn!("glyph table `{}`: `{}` skipped: {}", section.key(), fragment, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;

    #[test]
    fn test_parse_sections() {
        let table = GlyphTable::parse(
            r#"
[comparison]
"eq.not" = "≠"

[greek-letters]
alpha = "α"
beta = "β"
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.entries(Section::Comparison).len(), 1);
        assert!(table.entries(Section::Arrows).is_empty());
        let greek: Vec<_> = table
            .entries(Section::GreekLetters)
            .iter()
            .map(|entry| entry.fragment.as_str())
            .collect();
        assert_eq!(greek, vec!["alpha", "beta"]);
        assert_eq!(table.glyph("beta"), Some("β"));
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let table = GlyphTable::parse(
            r#"
sets = "not a table"

[operators]
times = "×"
broken = 42
"" = "?"
empty = ""
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.glyph("times"), Some("×"));
        assert!(table.entries(Section::Sets).is_empty());
    }

    #[test]
    fn test_camel_case_aliases() {
        let table = GlyphTable::parse(
            r#"
[bigLetters]
sum = "∑"

[setsVariants]
RR = "ℝ"
            "#,
        )
        .unwrap();

        assert_eq!(table.entries(Section::BigLetters).len(), 1);
        assert_eq!(table.entries(Section::SetVariants).len(), 1);
    }

    #[test]
    fn test_syntax_error_fails() {
        let err = GlyphTable::parse("[comparison\n").unwrap_err();
        assert!(matches!(err, GlyphError::TableSyntax(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GlyphTable::load(Path::new("/nonexistent/symbols.toml")).unwrap_err();
        assert!(matches!(err, GlyphError::Io(_)));
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = GlyphTable::builtin().unwrap();
        for section in Section::ALL {
            assert!(!table.entries(section).is_empty(), "{} is empty", section.key());
        }
        assert_eq!(table.glyph("RR"), Some("ℝ"));
        assert_eq!(table.glyph("alpha"), Some("α"));
    }

    #[test]
    fn test_section_categories() {
        assert_eq!(Section::Arrows.category(), Category::Arrow);
        assert_eq!(Section::SetVariants.category(), Category::Set);
        assert_eq!(Section::GreekLetters.category(), Category::Letter);
    }
}
