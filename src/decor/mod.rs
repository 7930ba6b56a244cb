//! Glyph decoration engine
//!
//! This module provides the rule system that maps plain math notation to
//! Unicode glyphs:
//! - Glyph table loading and the built-in rule families
//! - Adjacency guards that settle which rule owns a piece of text
//! - Static and dynamic rule evaluation
//! - The registry of styles and ranges handed to the renderer

mod builtin;
mod category;
mod dynamic;
mod engine;
mod generator;
mod guard;
mod pattern;
mod registry;
mod rules;
mod style;
mod table;
mod variants;

pub use builtin::MathFont;
pub use category::Category;
pub use dynamic::{map_digits, subscript, superscript, AbsRule, SUBSCRIPT_DIGITS, SUPERSCRIPT_DIGITS};
pub use engine::Engine;
pub use generator::{generate, Generated, Phase};
pub use guard::{accepts, Guard, GuardSpec, Polarity, Side, CONTEXT_CHARS};
pub use pattern::Pattern;
pub use registry::{Decoration, Registry, RegistryEntry};
pub use rules::{DynamicRule, RuleCompiler, RuleDecl, StaticRule, Substitution, Transform};
pub use style::{Color, MatchInstance, Style, MONO_FONT};
pub use table::{GlyphTable, Section, TableEntry};
pub use variants::{Arrangement, Marker};
