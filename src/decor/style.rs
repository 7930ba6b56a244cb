//! Style descriptors and match instances
//!
//! A `Style` describes how a decorated span is painted: its colour plus
//! the non-text properties (baseline shift, scale, spacing, font) the
//! renderer applies to the overlaid glyph. Styles are plain values that
//! compare and hash by content, so a registry entry can keep one for the
//! whole session.

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its config name (`"bright-cyan"`, `"red"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace('_', "-");
        let color = match name.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Font substituted for the overlaid glyph
pub const MONO_FONT: &str = "JuliaMono";

/// Glyph style descriptor
///
/// Lengths are in hundredths of an em, vertical shifts in percent of the
/// line height (negative = raised).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Font family override
    pub font: Option<&'static str>,
    /// Glyph size in percent of the surrounding text
    pub scale: Option<u8>,
    /// Horizontal shift
    pub shift_x: i16,
    /// Vertical shift
    pub shift_y: i16,
    /// Letter spacing
    pub letter_spacing: i16,
    /// Extra space after the glyph
    pub padding_right: i16,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: render the glyph in the math monospace font
    pub fn with_mono_font(mut self) -> Self {
        self.font = Some(MONO_FONT);
        self
    }

    /// Builder: set glyph scale (percent)
    pub fn with_scale(mut self, percent: u8) -> Self {
        self.scale = Some(percent);
        self
    }

    /// Builder: set horizontal and vertical shift
    pub fn with_shift(mut self, x: i16, y: i16) -> Self {
        self.shift_x = x;
        self.shift_y = y;
        self
    }

    /// Builder: set letter spacing
    pub fn with_letter_spacing(mut self, spacing: i16) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Builder: set right padding
    pub fn with_padding_right(mut self, padding: i16) -> Self {
        self.padding_right = padding;
        self
    }

    /// Color-only copy, used when the rendering mode asks for low fidelity
    pub fn plain(&self) -> Self {
        Self {
            fg: self.fg,
            bold: self.bold,
            ..Default::default()
        }
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check if the glyph is moved off the text baseline
    pub fn is_shifted(&self) -> bool {
        self.shift_x != 0 || self.shift_y != 0
    }
}

/// One decorated span: a byte range of the document and the glyph drawn
/// over it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInstance {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Glyph painted over the span
    pub glyph: String,
}

impl MatchInstance {
    /// Create a new match instance
    pub fn new(start: usize, end: usize, glyph: impl Into<String>) -> Self {
        Self {
            start,
            end,
            glyph: glyph.into(),
        }
    }

    /// Source text covered by this span
    pub fn source<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.start..self.end).unwrap_or("")
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if two spans share at least one byte
    pub fn overlaps(&self, other: &MatchInstance) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
