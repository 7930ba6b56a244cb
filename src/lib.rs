//! typst-glyphs - Unicode math glyphs over plain Typst math notation
//!
//! The engine finds shorthands such as `<=`, `bb(R)` or `x_1` in a
//! document and reports which glyph to draw over each of them. The text
//! itself is never changed.

pub mod config;
pub mod decor;
pub mod error;
pub mod preview;

pub use config::{Config, RenderingMode};
pub use decor::Engine;
pub use error::{GlyphError, Result};
