//! Decoration categories
//!
//! Every rule belongs to a category. The category picks the rule's colour
//! slot and base style, and is the first half of a registry key.

use super::style::{Color, Style};

/// Semantic categories of decorated notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Comparison shorthands and relations (<=, !=, eq.not)
    Comparison,
    /// Arrows (->, arrow.r.long)
    Arrow,
    /// Binary operators (times, plus.minus)
    Operator,
    /// Basic constants and symbols (oo, nabla, diff)
    Number,
    /// Big operators (sum, product, integral)
    BigLetter,
    /// Logic keywords (forall, exists, in)
    Keyword,
    /// Set operators, named sets and set brackets
    Set,
    /// Non-zero and signed markers after a named set
    SetVariant,
    /// Greek letters
    Letter,
    /// Letter alphabets (cal, frak, bb)
    Alphabet,
    /// Accented letters (hat(x), arrow(v))
    Accent,
    /// Superscripts
    Power,
    /// Subscripts
    Subscript,
    /// Absolute value bars
    Abs,
    /// Math alphabet functions (bold, italic, sans, mono)
    Function,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 15] = [
        Category::Comparison,
        Category::Arrow,
        Category::Operator,
        Category::Number,
        Category::BigLetter,
        Category::Keyword,
        Category::Set,
        Category::SetVariant,
        Category::Letter,
        Category::Alphabet,
        Category::Accent,
        Category::Power,
        Category::Subscript,
        Category::Abs,
        Category::Function,
    ];

    /// Default color for this category
    pub fn default_color(&self) -> Color {
        match self {
            Category::Comparison => Color::BrightMagenta,
            Category::Arrow => Color::BrightMagenta,
            Category::Operator => Color::Yellow,
            Category::Number => Color::Cyan,
            Category::BigLetter => Color::BrightYellow,
            Category::Keyword => Color::Magenta,
            Category::Set => Color::Blue,
            Category::SetVariant => Color::Blue,
            Category::Letter => Color::BrightCyan,
            Category::Alphabet => Color::Cyan,
            Category::Accent => Color::BrightCyan,
            Category::Power => Color::Cyan,
            Category::Subscript => Color::Cyan,
            Category::Abs => Color::Yellow,
            Category::Function => Color::BrightGreen,
        }
    }

    /// Base style for this category, painted in `color`
    pub fn base_style(&self, color: Color) -> Style {
        let style = Style::fg(color);
        match self {
            Category::Keyword => style.with_bold(),
            Category::BigLetter => style.with_scale(120),
            Category::Set => style.with_bold(),
            Category::Accent | Category::Function => style.with_mono_font(),
            _ => style,
        }
    }

    /// Get a config name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Comparison => "comparison",
            Category::Arrow => "arrow",
            Category::Operator => "operator",
            Category::Number => "number",
            Category::BigLetter => "big-letter",
            Category::Keyword => "keyword",
            Category::Set => "set",
            Category::SetVariant => "set-variant",
            Category::Letter => "letter",
            Category::Alphabet => "alphabet",
            Category::Accent => "accent",
            Category::Power => "power",
            Category::Subscript => "subscript",
            Category::Abs => "abs",
            Category::Function => "function",
        }
    }

    /// Parse a category from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("Comparison"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_base_style_uses_given_color() {
        let style = Category::Keyword.base_style(Color::Red);
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(Category::Accent.base_style(Color::Default).font.is_some());
        assert!(Category::Comparison.base_style(Color::Default).is_default());
    }
}
