//! Terminal preview of a decorated document
//!
//! Splits the text into plain runs and glyph runs, then writes them with
//! crossterm colours. Where decorations overlap, the one starting first
//! wins (the longer one on a tie) and the others are dropped.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::decor::{Color, Decoration, MatchInstance, Style};
use crate::error::Result;

/// A run of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Undecorated document text
    Text(&'t str),
    /// Glyph drawn in place of `source`
    Glyph {
        source: &'t str,
        glyph: String,
        style: Style,
    },
}

impl Segment<'_> {
    /// Text this segment prints
    pub fn display(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Glyph { glyph, .. } => glyph,
        }
    }
}

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => style::Color::Reset,
            Color::Black => style::Color::Black,
            Color::Red => style::Color::DarkRed,
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Blue => style::Color::DarkBlue,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Cyan => style::Color::DarkCyan,
            Color::White => style::Color::Grey,
            Color::BrightBlack => style::Color::DarkGrey,
            Color::BrightRed => style::Color::Red,
            Color::BrightGreen => style::Color::Green,
            Color::BrightYellow => style::Color::Yellow,
            Color::BrightBlue => style::Color::Blue,
            Color::BrightMagenta => style::Color::Magenta,
            Color::BrightCyan => style::Color::Cyan,
            Color::BrightWhite => style::Color::White,
        }
    }
}

/// Lay the decorations over `text`
///
/// With `keep_columns`, each glyph is padded with spaces to the display
/// width of the text it replaces.
pub fn overlay<'t>(text: &'t str, decorations: &[Decoration<'_>], keep_columns: bool) -> Vec<Segment<'t>> {
    let mut spans: Vec<(&MatchInstance, &Style)> = decorations
        .iter()
        .flat_map(|decoration| decoration.ranges.iter().map(move |m| (m, decoration.style)))
        .filter(|(m, _)| {
            !m.is_empty() && m.end <= text.len() && text.is_char_boundary(m.start) && text.is_char_boundary(m.end)
        })
        .collect();
    spans.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

    let mut segments = Vec::new();
    let mut pos = 0;
    for (m, style) in spans {
        if m.start < pos {
            continue;
        }
        if m.start > pos {
            segments.push(Segment::Text(&text[pos..m.start]));
        }
        let source = &text[m.start..m.end];
        let mut glyph = m.glyph.clone();
        if keep_columns {
            let missing = source.width().saturating_sub(glyph.width());
            glyph.extend(std::iter::repeat(' ').take(missing));
        }
        segments.push(Segment::Glyph {
            source,
            glyph,
            style: *style,
        });
        pos = m.end;
    }
    if pos < text.len() {
        segments.push(Segment::Text(&text[pos..]));
    }
    segments
}

/// Write segments to `writer`, colouring glyphs unless `plain`
pub fn render<W: Write>(writer: &mut W, segments: &[Segment<'_>], plain: bool) -> Result<()> {
    for segment in segments {
        match segment {
            Segment::Glyph { glyph, style, .. } if !plain && !style.is_default() => {
                queue!(writer, SetForegroundColor(style.fg.into()))?;
                if style.bold {
                    queue!(writer, SetAttribute(Attribute::Bold))?;
                }
                queue!(writer, Print(glyph), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            _ => queue!(writer, Print(segment.display()))?,
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::decor::{Category, Engine, GlyphTable};

    fn engine() -> Engine {
        Engine::new(Config::new(), GlyphTable::builtin().unwrap())
    }

    fn flat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::display).collect()
    }

    #[test]
    fn test_overlay() {
        let mut engine = engine();
        let text = "x <= y -> alpha";
        let decorations = engine.redraw(0, text).unwrap();
        let segments = overlay(text, &decorations, false);
        assert_eq!(flat(&segments), "x ≤ y → α");
        assert_eq!(segments[0], Segment::Text("x "));
        assert!(matches!(segments[1], Segment::Glyph { source: "<=", .. }));
    }

    #[test]
    fn test_keep_columns() {
        let mut engine = engine();
        let text = "alpha <= 1";
        let decorations = engine.redraw(0, text).unwrap();
        let padded = flat(&overlay(text, &decorations, true));
        assert_eq!(padded, "α     ≤  1");
        assert_eq!(padded.width(), text.width());
    }

    #[test]
    fn test_overlap_earliest_then_longest() {
        let style = Style::default();
        let ranges = [
            MatchInstance::new(2, 4, "B"),
            MatchInstance::new(0, 3, "A"),
            MatchInstance::new(0, 2, "a"),
            MatchInstance::new(4, 5, "C"),
        ];
        let decorations = [Decoration {
            category: Category::Comparison,
            sub_key: "test",
            style: &style,
            ranges: &ranges,
        }];
        let segments = overlay("01234", &decorations, false);
        assert_eq!(flat(&segments), "A3C");
    }

    #[test]
    fn test_out_of_range_spans_ignored() {
        let style = Style::default();
        let ranges = [MatchInstance::new(1, 2, "x"), MatchInstance::new(3, 9, "y")];
        let decorations = [Decoration {
            category: Category::Number,
            sub_key: "test",
            style: &style,
            ranges: &ranges,
        }];
        // Byte 1 is inside `α`
        assert_eq!(flat(&overlay("αb", &decorations, false)), "αb");
    }

    #[test]
    fn test_render() {
        let mut engine = engine();
        let text = "a != b\n";
        let decorations = engine.redraw(0, text).unwrap();
        let segments = overlay(text, &decorations, false);

        let mut plain = Vec::new();
        render(&mut plain, &segments, true).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "a ≠ b\n");

        let mut colored = Vec::new();
        render(&mut colored, &segments, false).unwrap();
        let colored = String::from_utf8(colored).unwrap();
        assert!(colored.contains('≠'));
        assert!(colored.contains("\u{1b}["));
    }
}
