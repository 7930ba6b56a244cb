//! Decoration rules
//!
//! A static rule always paints the same glyph; a dynamic rule computes
//! its glyph from the matched text. Both find their matches through
//! `GuardedMatches`, which applies the rule's adjacency guards.

use std::ops::Range;

use log::warn;

use super::category::Category;
use super::guard::{self, Guard, GuardCache, GuardSpec, Side, START_WORD_LIMIT, WORD_LIMIT};
use super::pattern::Pattern;
use super::style::{MatchInstance, Style};
use crate::config::{Palette, RenderingMode};
use crate::error::Result;

/// A rule with a fixed glyph
#[derive(Debug, Clone)]
pub struct StaticRule {
    /// Registry sub-key, usually the source fragment
    pub name: String,
    pub category: Category,
    pub pattern: Pattern,
    pub glyph: String,
    pub before: Option<Guard>,
    pub after: Option<Guard>,
    pub style: Style,
}

impl StaticRule {
    /// Find the first accepted match at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        GuardedMatches::starting_at(&self.pattern, text, start, self.before.as_ref(), self.after.as_ref())
            .next()
    }

    /// All accepted matches in `text`
    pub fn matches(&self, text: &str) -> Vec<MatchInstance> {
        GuardedMatches::new(&self.pattern, text, self.before.as_ref(), self.after.as_ref())
            .map(|(start, end)| MatchInstance::new(start, end, self.glyph.as_str()))
            .collect()
    }
}

/// What a dynamic rule paints for one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Decorated range, relative to the start of the match
    pub range: Range<usize>,
    pub glyph: String,
}

impl Substitution {
    /// Decorate the whole match
    pub fn whole(matched: &str, glyph: impl Into<String>) -> Self {
        Self {
            range: 0..matched.len(),
            glyph: glyph.into(),
        }
    }
}

/// Glyph producer of a dynamic rule; `None` leaves the match undecorated
pub type Transform = fn(&str) -> Option<Substitution>;

/// A rule whose glyph depends on the matched text
#[derive(Debug, Clone)]
pub struct DynamicRule {
    /// Registry sub-key
    pub name: &'static str,
    pub category: Category,
    pub pattern: Pattern,
    pub style: Style,
    pub transform: Transform,
    pub before: Option<Guard>,
    pub after: Option<Guard>,
}

impl DynamicRule {
    /// Evaluate the rule against `text`
    pub fn evaluate(&self, text: &str) -> Vec<MatchInstance> {
        GuardedMatches::new(&self.pattern, text, self.before.as_ref(), self.after.as_ref())
            .filter_map(|(start, end)| {
                let sub = (self.transform)(&text[start..end])?;
                let span = (start + sub.range.start)..(start + sub.range.end);
                if sub.range.start > sub.range.end
                    || span.end > end
                    || !text.is_char_boundary(span.start)
                    || !text.is_char_boundary(span.end)
                {
                    warn!("rule `{}` produced an out-of-match span, skipped", self.name);
                    return None;
                }
                Some(MatchInstance::new(span.start, span.end, sub.glyph))
            })
            .collect()
    }
}

/// Iterator over non-overlapping matches accepted by a guard pair
///
/// A rejected match does not consume text: the scan resumes one
/// character after its start.
pub struct GuardedMatches<'r, 't> {
    pattern: &'r Pattern,
    text: &'t str,
    before: Option<&'r Guard>,
    after: Option<&'r Guard>,
    pos: usize,
}

impl<'r, 't> GuardedMatches<'r, 't> {
    pub fn new(
        pattern: &'r Pattern,
        text: &'t str,
        before: Option<&'r Guard>,
        after: Option<&'r Guard>,
    ) -> Self {
        Self::starting_at(pattern, text, 0, before, after)
    }

    pub fn starting_at(
        pattern: &'r Pattern,
        text: &'t str,
        pos: usize,
        before: Option<&'r Guard>,
        after: Option<&'r Guard>,
    ) -> Self {
        Self {
            pattern,
            text,
            before,
            after,
            pos,
        }
    }
}

impl Iterator for GuardedMatches<'_, '_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (start, end) = self.pattern.find_at(self.text, self.pos)?;
            if start == end || !guard::accepts(self.text, start, end, self.before, self.after) {
                self.pos = next_char(self.text, start);
                continue;
            }
            self.pos = end;
            return Some((start, end));
        }
    }
}

/// Byte offset of the character after the one at `pos`
fn next_char(text: &str, pos: usize) -> usize {
    pos + text
        .get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}

/// Input to the rule compiler
#[derive(Debug, Clone)]
pub struct RuleDecl {
    pub category: Category,
    pub name: String,
    pub pattern: Pattern,
    pub glyph: String,
    /// Explicit style; the category style when `None`
    pub style: Option<Style>,
    pub before: Option<GuardSpec>,
    pub after: Option<GuardSpec>,
}

impl RuleDecl {
    pub fn new(category: Category, name: impl Into<String>, pattern: Pattern, glyph: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            pattern,
            glyph: glyph.into(),
            style: None,
            before: None,
            after: None,
        }
    }

    /// Declaration matching `fragment` verbatim, named after it
    pub fn literal(category: Category, fragment: &str, glyph: impl Into<String>) -> Result<Self> {
        Ok(Self::new(category, fragment, Pattern::literal(fragment)?, glyph))
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn before(mut self, spec: GuardSpec) -> Self {
        self.before = Some(spec);
        self
    }

    pub fn after(mut self, spec: GuardSpec) -> Self {
        self.after = Some(spec);
        self
    }

    /// Guard both ends against surrounding words
    pub fn word_limits(self) -> Self {
        self.before(START_WORD_LIMIT).after(WORD_LIMIT)
    }
}

/// Turns rule declarations into static rules for one rendering mode
pub struct RuleCompiler<'p> {
    mode: RenderingMode,
    palette: &'p Palette,
    guards: GuardCache,
}

impl<'p> RuleCompiler<'p> {
    pub fn new(mode: RenderingMode, palette: &'p Palette) -> Self {
        Self {
            mode,
            palette,
            guards: GuardCache::new(),
        }
    }

    pub fn mode(&self) -> RenderingMode {
        self.mode
    }

    /// Style for `category` at the current fidelity
    pub fn style(&self, category: Category) -> Style {
        self.fidelity(category.base_style(self.palette.color(category)))
    }

    /// Reduce `style` to what the rendering mode paints
    pub fn fidelity(&self, style: Style) -> Style {
        if self.mode == RenderingMode::Basic {
            style.plain()
        } else {
            style
        }
    }

    /// Compiled guard from the shared cache
    pub fn guard(&mut self, side: Side, spec: GuardSpec) -> Result<Guard> {
        self.guards.get(side, spec)
    }

    /// Compile a declaration
    ///
    /// Returns `None` when decoration is off, or when a guard fails to
    /// compile (the rule is dropped and logged).
    pub fn compile(&mut self, decl: RuleDecl) -> Option<StaticRule> {
        if !self.mode.is_enabled() {
            return None;
        }
        let guards = self
            .guards
            .get_opt(Side::Before, decl.before)
            .and_then(|before| Ok((before, self.guards.get_opt(Side::After, decl.after)?)));
        let (before, after) = match guards {
            Ok(pair) => pair,
            Err(err) => {
                warn!("dropping rule `{}`: {}", decl.name, err);
                return None;
            }
        };
        let style = match decl.style {
            Some(style) => self.fidelity(style),
            None => self.style(decl.category),
        };
        Some(StaticRule {
            name: decl.name,
            category: decl.category,
            pattern: decl.pattern,
            glyph: decl.glyph,
            before,
            after,
            style,
        })
    }

    /// Compile a declaration that may have failed to build
    pub fn compile_result(&mut self, decl: Result<RuleDecl>) -> Option<StaticRule> {
        match decl {
            Ok(decl) => self.compile(decl),
            Err(err) => {
                warn!("dropping rule: {}", err);
                None
            }
        }
    }

    /// Compile a dynamic rule
    #[allow(clippy::too_many_arguments)]
    pub fn dynamic(
        &mut self,
        category: Category,
        name: &'static str,
        pattern: &str,
        style: Style,
        transform: Transform,
        before: Option<GuardSpec>,
        after: Option<GuardSpec>,
    ) -> Option<DynamicRule> {
        if !self.mode.is_enabled() {
            return None;
        }
        let compiled = Pattern::regex(pattern).and_then(|pattern| {
            let before = self.guards.get_opt(Side::Before, before)?;
            let after = self.guards.get_opt(Side::After, after)?;
            Ok((pattern, before, after))
        });
        match compiled {
            Ok((pattern, before, after)) => Some(DynamicRule {
                name,
                category,
                pattern,
                style: self.fidelity(style),
                transform,
                before,
                after,
            }),
            Err(err) => {
                warn!("dropping dynamic rule `{}`: {}", name, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler(palette: &Palette) -> RuleCompiler<'_> {
        RuleCompiler::new(RenderingMode::Normal, palette)
    }

    fn rule(compiler: &mut RuleCompiler<'_>, decl: RuleDecl) -> StaticRule {
        compiler.compile(decl).unwrap()
    }

    #[test]
    fn test_static_rule_matches() {
        let palette = Palette::default();
        let mut compiler = compiler(&palette);
        let le = rule(
            &mut compiler,
            RuleDecl::literal(Category::Comparison, "<=", "≤")
                .unwrap()
                .before(GuardSpec::not("<"))
                .after(GuardSpec::not("[>=]")),
        );
        let found = le.matches("a <= b, c <== d, e <=> f, g<=h");
        let spans: Vec<_> = found.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, vec![(2, 4), (27, 29)]);
        assert!(found.iter().all(|m| m.glyph == "≤"));
        assert_eq!(le.find_at("x <= y", 0), Some((2, 4)));
        assert_eq!(le.find_at("x <= y", 3), None);
    }

    #[test]
    fn test_rejected_match_does_not_consume_text() {
        let palette = Palette::default();
        let mut compiler = compiler(&palette);
        // The first `ab` is rejected, the overlapping `ab` after it is not
        let ab = rule(
            &mut compiler,
            RuleDecl::new(Category::Number, "ab", Pattern::regex("a+b").unwrap(), "x")
                .before(GuardSpec::not("z")),
        );
        let found = ab.matches("zaab");
        assert_eq!(found, vec![MatchInstance::new(2, 4, "x")]);
    }

    #[test]
    fn test_off_mode_compiles_nothing() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Off, &palette);
        let decl = RuleDecl::literal(Category::Comparison, "!=", "≠").unwrap();
        assert!(compiler.compile(decl).is_none());
    }

    #[test]
    fn test_bad_guard_drops_rule() {
        let palette = Palette::default();
        let mut compiler = compiler(&palette);
        let decl = RuleDecl::literal(Category::Comparison, "!=", "≠")
            .unwrap()
            .before(GuardSpec::not("[unclosed"));
        assert!(compiler.compile(decl).is_none());
        assert!(compiler.compile_result(RuleDecl::literal(Category::Comparison, "", "x")).is_none());
    }

    #[test]
    fn test_basic_mode_plain_styles() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Basic, &palette);
        let styled = Style::fg(Category::Accent.default_color()).with_mono_font().with_shift(10, -30);
        let decl = RuleDecl::literal(Category::Accent, "hat(x)", "x̂")
            .unwrap()
            .with_style(styled);
        let rule = compiler.compile(decl).unwrap();
        assert_eq!(rule.style, styled.plain());
    }

    #[test]
    fn test_dynamic_rule_narrowed_span() {
        fn inner(matched: &str) -> Option<Substitution> {
            Some(Substitution {
                range: 1..matched.len() - 1,
                glyph: matched[1..matched.len() - 1].to_uppercase(),
            })
        }
        let palette = Palette::default();
        let mut compiler = compiler(&palette);
        let rule = compiler
            .dynamic(Category::Number, "upper", r"<\w+>", Style::default(), inner, None, None)
            .unwrap();
        let found = rule.evaluate("a <bc> d");
        assert_eq!(found, vec![MatchInstance::new(3, 5, "BC")]);
    }

    #[test]
    fn test_dynamic_rule_out_of_range_skipped() {
        fn runaway(matched: &str) -> Option<Substitution> {
            Some(Substitution {
                range: 0..matched.len() + 3,
                glyph: String::new(),
            })
        }
        let palette = Palette::default();
        let mut compiler = compiler(&palette);
        let rule = compiler
            .dynamic(Category::Number, "runaway", r"x", Style::default(), runaway, None, None)
            .unwrap();
        assert!(rule.evaluate("x y x").is_empty());
    }
}
