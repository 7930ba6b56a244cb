//! Script, fraktur and double-struck alphabets
//!
//! `cal(A)`, `frak(A)` and `bb(A)` for every ASCII letter, plus
//! `bb(0)`..`bb(9)`. Several letters live in the Letterlike Symbols block
//! rather than the math alphanumerics, so the glyphs are listed outright.

use crate::decor::category::Category;
use crate::decor::guard::START_WORD_LIMIT;
use crate::decor::rules::{RuleCompiler, RuleDecl, StaticRule};

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

const CAL: &str = "𝒜ℬ𝒞𝒟ℰℱ𝒢ℋℐ𝒥𝒦ℒℳ𝒩𝒪𝒫𝒬ℛ𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵𝒶𝒷𝒸𝒹ℯ𝒻ℊ𝒽𝒾𝒿𝓀𝓁𝓂𝓃ℴ𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏";
const FRAK: &str = "𝔄𝔅ℭ𝔇𝔈𝔉𝔊ℌℑ𝔍𝔎𝔏𝔐𝔑𝔒𝔓𝔔ℜ𝔖𝔗𝔘𝔙𝔚𝔛𝔜ℨ𝔞𝔟𝔠𝔡𝔢𝔣𝔤𝔥𝔦𝔧𝔨𝔩𝔪𝔫𝔬𝔭𝔮𝔯𝔰𝔱𝔲𝔳𝔴𝔵𝔶𝔷";
/// Letters, then digits
const BB: &str = "𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡";

const ALPHABETS: [(&str, &str, &str); 3] = [
    ("cal", LETTERS, CAL),
    ("frak", LETTERS, FRAK),
    ("bb", concat!("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz", "0123456789"), BB),
];

/// Compile `name(c)` rules for every alphabet
pub fn alphabet_rules(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    let mut rules = Vec::new();
    for (name, sources, glyphs) in ALPHABETS {
        for (source, glyph) in sources.chars().zip(glyphs.chars()) {
            let decl = RuleDecl::literal(Category::Alphabet, &format!("{name}({source})"), glyph.to_string())
                .map(|decl| decl.before(START_WORD_LIMIT));
            rules.extend(compiler.compile_result(decl));
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Palette, RenderingMode};

    #[test]
    fn test_alphabet_lengths() {
        assert_eq!(CAL.chars().count(), LETTERS.len());
        assert_eq!(FRAK.chars().count(), LETTERS.len());
        assert_eq!(BB.chars().count(), LETTERS.len() + DIGITS.len());
        assert_eq!(ALPHABETS[2].1, format!("{LETTERS}{DIGITS}"));
    }

    #[test]
    fn test_rules() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        let rules = alphabet_rules(&mut compiler);
        assert_eq!(rules.len(), 52 * 3 + 10);

        let glyph = |name: &str| rules.iter().find(|rule| rule.name == name).unwrap().glyph.as_str();
        assert_eq!(glyph("bb(R)"), "ℝ");
        assert_eq!(glyph("cal(A)"), "𝒜");
        assert_eq!(glyph("cal(e)"), "ℯ");
        assert_eq!(glyph("frak(C)"), "ℭ");
        assert_eq!(glyph("bb(1)"), "𝟙");
    }

    #[test]
    fn test_start_limit() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        let rules = alphabet_rules(&mut compiler);
        let bb_r = rules.iter().find(|rule| rule.name == "bb(R)").unwrap();
        assert_eq!(bb_r.matches("x in bb(R)").len(), 1);
        assert!(bb_r.matches("xbb(R)").is_empty());
    }
}
