//! Accented letters
//!
//! `hat(x)`, `arrow(v)`, `dot.double(alpha)`... are drawn as the base glyph
//! followed by a combining mark.

use crate::decor::category::Category;
use crate::decor::guard::{GuardSpec, START_WORD_LIMIT};
use crate::decor::rules::{RuleCompiler, RuleDecl, StaticRule};

use super::alphabets::{DIGITS, LETTERS};

/// Accent functions and their combining marks
pub const ACCENTS: [(&str, char); 13] = [
    ("grave", '\u{0300}'),
    ("acute", '\u{0301}'),
    ("hat", '\u{0302}'),
    ("tilde", '\u{0303}'),
    ("macron", '\u{0304}'),
    ("overline", '\u{0305}'),
    ("breve", '\u{0306}'),
    ("dot", '\u{0307}'),
    ("dot.double", '\u{0308}'),
    ("dot.triple", '\u{20DB}'),
    ("circle", '\u{030A}'),
    ("caron", '\u{030C}'),
    ("arrow", '\u{20D7}'),
];

/// Start limit for letters that can also appear inside an accent call
pub const LETTER_START: GuardSpec = GuardSpec::not(
    r"[A-Za-z0-9.]|\b(?:grave|acute|hat|tilde|macron|overline|breve|dot|dot\.double|dot\.triple|circle|caron|arrow)\(",
);

/// Every accent applied to `base`, drawn over `glyph`
pub fn accent_rules(compiler: &mut RuleCompiler<'_>, base: &str, glyph: &str) -> Vec<StaticRule> {
    ACCENTS
        .iter()
        .filter_map(|&(accent, mark)| {
            let decl = RuleDecl::literal(Category::Accent, &format!("{accent}({base})"), format!("{glyph}{mark}"))
                .map(|decl| decl.before(START_WORD_LIMIT));
            compiler.compile_result(decl)
        })
        .collect()
}

/// Every accent applied to the ASCII letters and digits
pub fn letter_accents(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    LETTERS
        .chars()
        .chain(DIGITS.chars())
        .flat_map(|c| {
            let base = c.to_string();
            accent_rules(compiler, &base, &base)
        })
        .collect()
}
