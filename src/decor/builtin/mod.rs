//! Built-in rule families
//!
//! Rules that are declared in code rather than read from the glyph table.

mod accents;
mod alphabets;
mod brackets;
mod comparison;
mod functions;

pub use accents::{accent_rules, letter_accents, ACCENTS, LETTER_START};
pub use alphabets::alphabet_rules;
pub use brackets::bracket_rules;
pub use comparison::comparison_rules;
pub use functions::{function_rules, MathFont};
