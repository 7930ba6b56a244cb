//! Set variant markers
//!
//! A named set such as `RR` can carry a non-zero marker (`^*`) and a sign
//! marker (`_+`, `_-`), in either order. Each marker gets its own rule per
//! arrangement, so the glyph can be placed relative to its neighbour.

use super::category::Category;
use super::guard::{double_capital, GuardSpec};
use super::rules::{RuleCompiler, RuleDecl, StaticRule};
use super::style::Style;

/// Modifier following a named set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `^*`
    NonZero,
    /// `_+`
    Plus,
    /// `_-`
    Minus,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::NonZero, Marker::Plus, Marker::Minus];

    /// Source text of the marker
    pub fn source(&self) -> &'static str {
        match self {
            Marker::NonZero => "^*",
            Marker::Plus => "_+",
            Marker::Minus => "_-",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Marker::NonZero => "*",
            Marker::Plus => "₊",
            Marker::Minus => "₋",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Marker::NonZero => "nonzero",
            Marker::Plus => "plus",
            Marker::Minus => "minus",
        }
    }

    /// Pattern of the marker kind this one can combine with
    fn other(&self) -> &'static str {
        match self {
            Marker::NonZero => r"_[+-]",
            Marker::Plus | Marker::Minus => r"\^\*",
        }
    }

    /// Named set followed by the other marker kind
    fn after_other(&self) -> &'static str {
        match self {
            Marker::NonZero => concat!(double_capital!(), r"_[+-]"),
            Marker::Plus | Marker::Minus => concat!(double_capital!(), r"\^\*"),
        }
    }
}

/// Position of a marker relative to the other marker kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrangement {
    /// No other marker
    Alone,
    /// First of two markers
    Leading,
    /// Second of two markers
    Trailing,
}

impl Arrangement {
    fn name(&self) -> &'static str {
        match self {
            Arrangement::Alone => "alone",
            Arrangement::Leading => "leading",
            Arrangement::Trailing => "trailing",
        }
    }
}

/// Every marker in every arrangement
pub const COMBINATIONS: [(Marker, Arrangement); 9] = [
    (Marker::NonZero, Arrangement::Alone),
    (Marker::NonZero, Arrangement::Leading),
    (Marker::NonZero, Arrangement::Trailing),
    (Marker::Plus, Arrangement::Alone),
    (Marker::Plus, Arrangement::Leading),
    (Marker::Plus, Arrangement::Trailing),
    (Marker::Minus, Arrangement::Alone),
    (Marker::Minus, Arrangement::Leading),
    (Marker::Minus, Arrangement::Trailing),
];

/// Registry sub-key of a combination
pub fn sub_key(marker: Marker, arrangement: Arrangement) -> String {
    format!("{}/{}", marker.name(), arrangement.name())
}

fn guards(marker: Marker, arrangement: Arrangement) -> (GuardSpec, Option<GuardSpec>) {
    match arrangement {
        Arrangement::Alone => (
            GuardSpec::is(double_capital!()),
            Some(GuardSpec::not(marker.other())),
        ),
        Arrangement::Leading => (
            GuardSpec::is(double_capital!()),
            Some(GuardSpec::is(marker.other())),
        ),
        Arrangement::Trailing => (GuardSpec::is(marker.after_other()), None),
    }
}

fn style(marker: Marker, arrangement: Arrangement, base: Style) -> Style {
    match (marker, arrangement) {
        (Marker::NonZero, Arrangement::Alone) => base.with_scale(60).with_shift(0, -30),
        (Marker::NonZero, Arrangement::Leading) => base.with_scale(60).with_shift(20, -30),
        (Marker::NonZero, Arrangement::Trailing) => base.with_scale(60).with_shift(-80, -30),
        (_, Arrangement::Trailing) => base.with_shift(-37, 0),
        _ => base,
    }
}

/// Compile the marker rules
pub fn expand(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    let base = compiler.style(Category::SetVariant);
    COMBINATIONS
        .iter()
        .filter_map(|&(marker, arrangement)| {
            let (before, after) = guards(marker, arrangement);
            let decl = RuleDecl::literal(Category::SetVariant, marker.source(), marker.glyph()).map(|decl| {
                RuleDecl {
                    name: sub_key(marker, arrangement),
                    before: Some(before),
                    after,
                    ..decl
                }
                .with_style(style(marker, arrangement, base))
            });
            compiler.compile_result(decl)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::{Palette, RenderingMode};

    fn rules() -> Vec<StaticRule> {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Normal, &palette);
        expand(&mut compiler)
    }

    /// (sub-key, start, end) of every match in `text`
    fn fired(rules: &[StaticRule], text: &str) -> Vec<(String, usize, usize)> {
        let mut found = Vec::new();
        for rule in rules {
            for m in rule.matches(text) {
                found.push((rule.name.clone(), m.start, m.end));
            }
        }
        found.sort_by_key(|(_, start, _)| *start);
        found
    }

    #[test]
    fn test_combinations_exhaustive() {
        let unique: HashSet<_> = COMBINATIONS.iter().collect();
        assert_eq!(unique.len(), 9);
        for marker in Marker::ALL {
            for arrangement in [Arrangement::Alone, Arrangement::Leading, Arrangement::Trailing] {
                assert!(COMBINATIONS.contains(&(marker, arrangement)));
            }
        }
        assert_eq!(rules().len(), 9);
    }

    #[test]
    fn test_every_arrangement_fires_once_per_marker() {
        let rules = rules();
        let cases = [
            ("RR^*", vec![("nonzero/alone", 2, 4)]),
            ("RR_+", vec![("plus/alone", 2, 4)]),
            ("RR_-", vec![("minus/alone", 2, 4)]),
            ("RR^*_+", vec![("nonzero/leading", 2, 4), ("plus/trailing", 4, 6)]),
            ("RR^*_-", vec![("nonzero/leading", 2, 4), ("minus/trailing", 4, 6)]),
            ("RR_+^*", vec![("plus/leading", 2, 4), ("nonzero/trailing", 4, 6)]),
            ("RR_-^*", vec![("minus/leading", 2, 4), ("nonzero/trailing", 4, 6)]),
        ];
        let mut seen = HashSet::new();
        for (text, expected) in cases {
            let found = fired(&rules, text);
            let expected: Vec<_> = expected
                .into_iter()
                .map(|(key, start, end)| (key.to_string(), start, end))
                .collect();
            assert_eq!(found, expected, "{text}");
            seen.extend(found.into_iter().map(|(key, _, _)| key));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_markers_need_a_named_set() {
        let rules = rules();
        assert!(fired(&rules, "x^* y_+ z_-").is_empty());
        assert!(fired(&rules, "ARR^*").is_empty());
        assert!(fired(&rules, "RS^*").is_empty());
        assert_eq!(fired(&rules, "x in ZZ_+, y in NN^*").len(), 2);
    }

    #[test]
    fn test_styles() {
        let rules = rules();
        let by_name = |name: &str| rules.iter().find(|rule| rule.name == name).unwrap().style;
        assert_eq!(by_name("nonzero/alone").scale, Some(60));
        assert_eq!(by_name("nonzero/alone").shift_y, -30);
        assert_eq!(by_name("nonzero/leading").shift_x, 20);
        assert_eq!(by_name("nonzero/trailing").shift_x, -80);
        assert_eq!(by_name("minus/trailing").shift_x, -37);
        assert!(!by_name("plus/alone").is_shifted());
        assert!(!by_name("plus/leading").is_shifted());
    }

    #[test]
    fn test_basic_mode_drops_offsets() {
        let palette = Palette::default();
        let mut compiler = RuleCompiler::new(RenderingMode::Basic, &palette);
        let rules = expand(&mut compiler);
        assert!(rules.iter().all(|rule| !rule.style.is_shifted() && rule.style.scale.is_none()));
    }
}
