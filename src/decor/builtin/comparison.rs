//! Comparison and arrow shorthands typed as ASCII
//!
//! Many of these share prefixes (`<`, `<=`, `<==`, `<==>`). Each rule's
//! guards reject the positions where a longer shorthand owns the text, so
//! exactly one of them fires for any run of these characters.

use crate::decor::category::Category;
use crate::decor::guard::{GuardSpec, ARROW_LIMIT};
use crate::decor::rules::{RuleCompiler, RuleDecl, StaticRule};

const NOT_ASSIGN: GuardSpec = GuardSpec::not(r"[:<>!=]");
const NOT_COLON: GuardSpec = GuardSpec::not(":");
const NOT_LT: GuardSpec = GuardSpec::not("<");
const NOT_GT: GuardSpec = GuardSpec::not(">");
const NOT_LT_EQ: GuardSpec = GuardSpec::not("[<=]");
const NOT_GT_EQ: GuardSpec = GuardSpec::not("[>=]");
const NOT_SHAFT: GuardSpec = GuardSpec::not(r"[-><|]");

struct Shorthand {
    category: Category,
    source: &'static str,
    glyph: &'static str,
    before: Option<GuardSpec>,
    after: Option<GuardSpec>,
}

const fn cmp(source: &'static str, glyph: &'static str, before: Option<GuardSpec>, after: Option<GuardSpec>) -> Shorthand {
    Shorthand {
        category: Category::Comparison,
        source,
        glyph,
        before,
        after,
    }
}

const fn arrow(source: &'static str, glyph: &'static str, before: Option<GuardSpec>, after: Option<GuardSpec>) -> Shorthand {
    Shorthand {
        category: Category::Arrow,
        source,
        glyph,
        before,
        after,
    }
}

const SHORTHANDS: &[Shorthand] = &[
    cmp("=", "=", Some(NOT_ASSIGN), Some(NOT_ASSIGN)),
    cmp("<", "<", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp(">", ">", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp("<<", "≪", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp(">>", "≫", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp("<<<", "⋘", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp(">>>", "⋙", Some(ARROW_LIMIT), Some(ARROW_LIMIT)),
    cmp("!=", "≠", None, None),
    cmp(":=", "≔", Some(NOT_COLON), None),
    cmp("::=", "⩴", None, None),
    arrow("=>", "⇒", Some(NOT_LT_EQ), None),
    arrow("==>", "⟹", Some(NOT_LT), None),
    arrow("<=>", "⇔", Some(NOT_LT), None),
    arrow("<==>", "⟺", Some(NOT_LT), None),
    arrow("<==", "⟸", Some(NOT_LT), Some(NOT_GT)),
    cmp("<=", "≤", Some(NOT_LT), Some(NOT_GT_EQ)),
    cmp(">=", "≥", Some(NOT_GT), Some(NOT_GT_EQ)),
    arrow("->", "→", Some(NOT_SHAFT), None),
    arrow("-->", "⟶", Some(NOT_SHAFT), None),
    arrow("|->", "↦", None, None),
    arrow("<-", "←", None, Some(NOT_SHAFT)),
    arrow("<--", "⟵", None, Some(NOT_SHAFT)),
    arrow("<->", "↔", None, None),
    arrow("<-->", "⟷", None, None),
];

/// Compile the shorthand rules
pub fn comparison_rules(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    SHORTHANDS
        .iter()
        .filter_map(|shorthand| {
            let decl = RuleDecl::literal(shorthand.category, shorthand.source, shorthand.glyph).map(|decl| RuleDecl {
                before: shorthand.before,
                after: shorthand.after,
                ..decl
            });
            compiler.compile_result(decl)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Palette, RenderingMode};

    fn glyphs(text: &str) -> Vec<(usize, usize, String)> {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        let mut found: Vec<_> = comparison_rules(&mut compiler)
            .iter()
            .flat_map(|rule| rule.matches(text))
            .map(|m| (m.start, m.end, m.glyph))
            .collect();
        found.sort();
        found
    }

    #[test]
    fn test_all_shorthands_compile() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        assert_eq!(comparison_rules(&mut compiler).len(), SHORTHANDS.len());
    }

    #[test]
    fn test_each_shorthand_alone_fires_once() {
        for shorthand in SHORTHANDS {
            let text = format!("a {} b", shorthand.source);
            let end = 2 + shorthand.source.len();
            assert_eq!(
                glyphs(&text),
                vec![(2, end, shorthand.glyph.to_string())],
                "{}",
                shorthand.source
            );
        }
    }

    #[test]
    fn test_long_arrow_wins() {
        assert_eq!(glyphs("<=="), vec![(0, 3, "⟸".to_string())]);
        assert_eq!(glyphs("p <==> q"), vec![(2, 6, "⟺".to_string())]);
        assert_eq!(glyphs("<<<"), vec![(0, 3, "⋘".to_string())]);
    }

    #[test]
    fn test_text_boundaries() {
        assert_eq!(glyphs("<="), vec![(0, 2, "≤".to_string())]);
        assert_eq!(glyphs("->"), vec![(0, 2, "→".to_string())]);
        assert_eq!(glyphs("<-"), vec![(0, 2, "←".to_string())]);
    }

    #[test]
    fn test_several_in_one_line() {
        let found = glyphs("x <= y, y != z, f: A -> B");
        let found: Vec<_> = found.into_iter().map(|(_, _, glyph)| glyph).collect();
        assert_eq!(found, vec!["≤", "≠", "→"]);
    }
}
