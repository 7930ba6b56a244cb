//! Rule generation
//!
//! Compiles every rule family for one activation: the hand-declared
//! shorthands, the glyph table sections, the set brackets and markers, the
//! alphabets and accents, and the dynamic script rules.

use log::info;

use super::builtin;
use super::dynamic::{self, AbsRule};
use super::guard::WORD_LIMIT;
use super::rules::{DynamicRule, RuleCompiler, RuleDecl, StaticRule};
use super::table::{GlyphTable, Section};
use super::variants;
use crate::config::RenderingMode;

/// Whether this is the first generation since activation or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Subsequent,
}

/// Output of one generation
#[derive(Debug, Clone, Default)]
pub struct Generated {
    /// Static rules, in scan order
    pub base: Vec<StaticRule>,
    /// One-time family, only compiled in the initial phase
    pub extras: Vec<StaticRule>,
    pub dynamic: Vec<DynamicRule>,
    pub abs: Option<AbsRule>,
}

impl Generated {
    /// Number of compiled rules of every kind
    pub fn rule_count(&self) -> usize {
        self.base.len() + self.extras.len() + self.dynamic.len() + usize::from(self.abs.is_some())
    }
}

/// Compile every rule for `table`
pub fn generate(table: &GlyphTable, compiler: &mut RuleCompiler<'_>, phase: Phase) -> Generated {
    let mut base = builtin::comparison_rules(compiler);
    base.extend(table_rules(table, compiler));
    base.extend(builtin::bracket_rules(compiler));
    base.extend(variants::expand(compiler));
    base.extend(builtin::alphabet_rules(compiler));
    base.extend(builtin::letter_accents(compiler));

    let extras = if phase == Phase::Initial && compiler.mode() == RenderingMode::Full {
        builtin::function_rules(compiler)
    } else {
        Vec::new()
    };

    let generated = Generated {
        base,
        extras,
        dynamic: dynamic::rules(compiler),
        abs: AbsRule::compile(compiler),
    };
    info!(
        "generated {} rules ({} one-time) from {} table entries",
        generated.rule_count(),
        generated.extras.len(),
        table.len()
    );
    generated
}

/// Word-limited rules for every table entry
///
/// Greek letters also get their accented forms.
fn table_rules(table: &GlyphTable, compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    let mut rules = Vec::new();
    for section in Section::ALL {
        for entry in table.entries(section) {
            let decl = RuleDecl::new(section.category(), entry.fragment.as_str(), entry.pattern.clone(), entry.glyph.as_str());
            let decl = match section {
                Section::GreekLetters => decl.before(builtin::LETTER_START).after(WORD_LIMIT),
                _ => decl.word_limits(),
            };
            rules.extend(compiler.compile(decl));
            if section == Section::GreekLetters {
                rules.extend(builtin::accent_rules(compiler, &entry.fragment, &entry.glyph));
            }
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    fn table() -> GlyphTable {
        GlyphTable::parse(
            r#"
[comparison]
"eq.not" = "≠"

[greek-letters]
alpha = "α"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_extras_only_on_initial_full() {
        let palette = Palette::default();
        let table = table();

        let mut full = RuleCompiler::new(RenderingMode::Full, &palette);
        assert!(!generate(&table, &mut full, Phase::Initial).extras.is_empty());
        assert!(generate(&table, &mut full, Phase::Subsequent).extras.is_empty());

        let mut normal = RuleCompiler::new(RenderingMode::Normal, &palette);
        assert!(generate(&table, &mut normal, Phase::Initial).extras.is_empty());
    }

    #[test]
    fn test_table_entries_become_rules() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        let generated = generate(&table(), &mut compiler, Phase::Initial);

        let names: Vec<_> = generated.base.iter().map(|rule| rule.name.as_str()).collect();
        assert!(names.contains(&"eq.not"));
        assert!(names.contains(&"alpha"));
        assert!(names.contains(&"hat(alpha)"));
        assert!(names.contains(&"nonzero/alone"));
        assert!(names.contains(&"bb(R)"));
        assert_eq!(generated.dynamic.len(), 6);
        assert!(generated.abs.is_some());
    }

    #[test]
    fn test_off_generates_nothing() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Off, &palette);
        let generated = generate(&table(), &mut compiler, Phase::Initial);
        assert_eq!(generated.rule_count(), 0);
    }
}
