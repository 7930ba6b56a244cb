//! Math alphabet functions
//!
//! `bold(A)`, `italic(A)`, `sans(A)` and `mono(A)` map onto the
//! Mathematical Alphanumeric Symbols block (U+1D400..U+1D7FF). Letters come
//! in rows of 26, upper case then lower case; digits in rows of 10.

use crate::decor::category::Category;
use crate::decor::guard::START_WORD_LIMIT;
use crate::decor::rules::{RuleCompiler, RuleDecl, StaticRule};

use super::alphabets::{DIGITS, LETTERS};

const LETTER_BLOCK: u32 = 0x1D400;
const DIGIT_BLOCK: u32 = 0x1D7CE;

/// Holes in the italic rows, filled from Letterlike Symbols
const ITALIC_SMALL_H: char = '\u{210E}';

/// A math alphabet function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFont {
    Bold,
    Italic,
    Sans,
    Mono,
}

impl MathFont {
    pub const ALL: [MathFont; 4] = [MathFont::Bold, MathFont::Italic, MathFont::Sans, MathFont::Mono];

    pub fn name(&self) -> &'static str {
        match self {
            MathFont::Bold => "bold",
            MathFont::Italic => "italic",
            MathFont::Sans => "sans",
            MathFont::Mono => "mono",
        }
    }

    /// Row of the upper-case letters
    fn letter_row(&self) -> u32 {
        match self {
            MathFont::Bold => 0,
            MathFont::Italic => 2,
            MathFont::Sans => 16,
            MathFont::Mono => 24,
        }
    }

    fn digit_row(&self) -> Option<u32> {
        match self {
            MathFont::Bold => Some(0),
            MathFont::Italic => None,
            MathFont::Sans => Some(2),
            MathFont::Mono => Some(4),
        }
    }

    /// Styled form of an ASCII letter or digit
    pub fn apply(&self, c: char) -> Option<char> {
        if *self == MathFont::Italic && c == 'h' {
            return Some(ITALIC_SMALL_H);
        }
        let code = match c {
            'A'..='Z' => LETTER_BLOCK + self.letter_row() * 26 + (c as u32 - 'A' as u32),
            'a'..='z' => LETTER_BLOCK + (self.letter_row() + 1) * 26 + (c as u32 - 'a' as u32),
            '0'..='9' => DIGIT_BLOCK + self.digit_row()? * 10 + (c as u32 - '0' as u32),
            _ => return None,
        };
        char::from_u32(code)
    }
}

/// Compile `font(c)` rules for every font, letter and digit
pub fn function_rules(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    let mut rules = Vec::new();
    for font in MathFont::ALL {
        for c in LETTERS.chars().chain(DIGITS.chars()) {
            let Some(glyph) = font.apply(c) else {
                continue;
            };
            let decl = RuleDecl::literal(Category::Function, &format!("{}({c})", font.name()), glyph.to_string())
                .map(|decl| decl.before(START_WORD_LIMIT));
            rules.extend(compiler.compile_result(decl));
        }
    }
    rules
}
