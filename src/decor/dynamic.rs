//! Dynamic rules
//!
//! These rules are evaluated on every redraw because their glyph depends
//! on the matched text: digit super- and subscripts, small expression
//! scripts such as `^(n+1)`, and the bars of `abs(-3)`.

use log::warn;

use super::category::Category;
use super::guard::{self, Guard, Side, START_WORD_LIMIT};
use super::registry::Registry;
use super::rules::{DynamicRule, RuleCompiler, Substitution, Transform};
use super::style::{MatchInstance, Style};

pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
pub const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
pub const SUPERSCRIPT_MINUS: char = '⁻';
pub const SUBSCRIPT_MINUS: char = '₋';

/// Glyph painted over `abs(` and its closing parenthesis
pub const ABS_BAR: &str = "|";

/// Map ASCII digits through a digit table
///
/// Returns `None` if `digits` holds anything else.
pub fn map_digits(digits: &str, table: &[char; 10]) -> Option<String> {
    digits
        .chars()
        .map(|c| c.to_digit(10).map(|d| table[d as usize]))
        .collect()
}

/// Superscript form of a signed integer literal
pub fn superscript(number: &str) -> Option<String> {
    signed(number, &SUPERSCRIPT_DIGITS, SUPERSCRIPT_MINUS)
}

/// Subscript form of a signed integer literal
pub fn subscript(number: &str) -> Option<String> {
    signed(number, &SUBSCRIPT_DIGITS, SUBSCRIPT_MINUS)
}

fn signed(number: &str, table: &[char; 10], minus: char) -> Option<String> {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => (Some(minus), digits),
        None => (None, number),
    };
    if digits.is_empty() {
        return None;
    }
    let mapped = map_digits(digits, table)?;
    Some(sign.into_iter().chain(mapped.chars()).collect())
}

/// Content of a script: marker and parentheses removed
fn script_body(matched: &str) -> Option<&str> {
    let body = matched.get(1..)?;
    Some(
        body.strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(body),
    )
}

fn power(matched: &str) -> Option<Substitution> {
    let glyph = superscript(script_body(matched)?)?;
    Some(Substitution::whole(matched, glyph))
}

fn sub(matched: &str) -> Option<Substitution> {
    let glyph = subscript(script_body(matched)?)?;
    Some(Substitution::whole(matched, glyph))
}

/// `^(n+1)` and `_(k=0)` are shown as their content
fn expression(matched: &str) -> Option<Substitution> {
    let content = script_body(matched)?;
    Some(Substitution::whole(matched, content))
}

/// Compile the script rules, in evaluation order
pub fn rules(compiler: &mut RuleCompiler<'_>) -> Vec<DynamicRule> {
    let power_style = compiler.style(Category::Power).with_mono_font();
    let sub_style = compiler
        .style(Category::Subscript)
        .with_mono_font()
        .with_shift(-5, 20)
        .with_padding_right(10);

    let decls: [(Category, &'static str, &'static str, Style, Transform); 6] = [
        (
            Category::Power,
            "powers/positive",
            r"\^(\d+\b|\(\d+\))",
            power_style.with_letter_spacing(-15).with_shift(-15, 0),
            power,
        ),
        (
            Category::Power,
            "powers/negative",
            r"\^\(-\d+\)",
            power_style.with_letter_spacing(-10).with_shift(-15, 0),
            power,
        ),
        (
            Category::Subscript,
            "subscripts/positive",
            r"_(\d+\b|\(\d+\))",
            sub_style.with_letter_spacing(-15),
            sub,
        ),
        (
            Category::Subscript,
            "subscripts/negative",
            r"_\(-\d+\)",
            sub_style.with_letter_spacing(-10),
            sub,
        ),
        (
            Category::Power,
            "powers/expression",
            r"\^\([A-Za-z][+=\-].\)",
            power_style.with_scale(80).with_shift(0, -30),
            expression,
        ),
        (
            Category::Subscript,
            "subscripts/expression",
            r"_\([A-Za-z][+=\-].\)",
            compiler
                .style(Category::Subscript)
                .with_mono_font()
                .with_scale(80)
                .with_shift(0, 20),
            expression,
        ),
    ];

    decls
        .into_iter()
        .filter_map(|(category, name, pattern, style, transform)| {
            compiler.dynamic(category, name, pattern, style, transform, None, None)
        })
        .collect()
}

/// Evaluate `rule` and record its matches
pub fn scan(registry: &mut Registry, text: &str, rule: &DynamicRule) {
    let found = rule.evaluate(text);
    registry
        .register(rule.category, rule.name, rule.style)
        .ranges
        .extend(found);
}

/// Absolute value bars for `abs(<integer>)`
#[derive(Debug, Clone)]
pub struct AbsRule {
    pub style: Style,
    before: Option<Guard>,
}

impl AbsRule {
    /// Registry sub-key
    pub const NAME: &'static str = "abs";

    /// Compile the rule; `None` when decoration is off
    pub fn compile(compiler: &mut RuleCompiler<'_>) -> Option<Self> {
        if !compiler.mode().is_enabled() {
            return None;
        }
        match compiler.guard(Side::Before, START_WORD_LIMIT) {
            Ok(before) => Some(Self {
                style: compiler.style(Category::Abs),
                before: Some(before),
            }),
            Err(err) => {
                warn!("dropping rule `{}`: {}", Self::NAME, err);
                None
            }
        }
    }

    /// Bars of every well-formed `abs(...)` in `text`
    ///
    /// Parentheses are tracked with a frame stack. `abs(` opens an abs
    /// frame, any other `(` a plain one. When an abs frame closes over a
    /// signed or unsigned integer, `abs(` and `)` both become bars. Other
    /// frames, stray `)` and unclosed frames paint nothing.
    pub fn evaluate(&self, text: &str) -> Vec<MatchInstance> {
        enum Frame {
            Abs(usize),
            Group,
        }

        let bytes = text.as_bytes();
        let mut stack = Vec::new();
        let mut found = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b'a' if text[pos..].starts_with("abs(")
                    && guard::accepts(text, pos, pos + 4, self.before.as_ref(), None) =>
                {
                    stack.push(Frame::Abs(pos));
                    pos += 4;
                    continue;
                }
                b'(' => stack.push(Frame::Group),
                b')' => {
                    if let Some(Frame::Abs(open)) = stack.pop() {
                        if is_integer(&text[open + 4..pos]) {
                            found.push(MatchInstance::new(open, open + 4, ABS_BAR));
                            found.push(MatchInstance::new(pos, pos + 1, ABS_BAR));
                        }
                    }
                }
                _ => {}
            }
            pos += 1;
        }

        found.sort_by_key(|m| m.start);
        found
    }

    /// Evaluate and record the bars
    pub fn scan(&self, registry: &mut Registry, text: &str) {
        let found = self.evaluate(text);
        registry
            .register(Category::Abs, Self::NAME, self.style)
            .ranges
            .extend(found);
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
