//! Error types for typst-glyphs

use thiserror::Error;

/// Result type alias for glyph engine operations
pub type Result<T> = std::result::Result<T, GlyphError>;

/// Glyph engine error types
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Glyph table is not valid TOML: {0}")]
    TableSyntax(#[from] toml::de::Error),

    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Pattern `{0}` matches the empty string")]
    EmptyMatch(String),

    #[error("Invalid value for `{key}`: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("Stale pass for revision {revision} (already at {current})")]
    StalePass { revision: u64, current: u64 },
}
