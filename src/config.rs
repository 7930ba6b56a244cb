//! Configuration file support
//!
//! Loads settings from ~/.typst-glyphs.toml (or
//! %USERPROFILE%\.typst-glyphs.toml on Windows)
//!
//! Example:
//! ```text
//! # typst-glyphs configuration
//! rendering-mode = 2
//! show-symbols = true
//! symbols = "/home/me/symbols.toml"
//!
//! [colors]
//! comparison = "bright-magenta"
//! keyword = "magenta"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::warn;
use toml::{Table, Value};

use crate::decor::{Category, Color};
use crate::error::{GlyphError, Result};

/// How much decoration is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderingMode {
    /// No decorations at all
    Off,
    /// Glyphs and colours only, no font or offset changes
    Basic,
    /// Full styling
    #[default]
    Normal,
    /// Full styling plus the math alphabet functions, compiled on the
    /// first generation
    Full,
}

impl RenderingMode {
    /// Mode from its numeric setting
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(RenderingMode::Off),
            1 => Some(RenderingMode::Basic),
            2 => Some(RenderingMode::Normal),
            3 => Some(RenderingMode::Full),
            _ => None,
        }
    }

    /// Numeric setting for this mode
    pub fn level(&self) -> i64 {
        match self {
            RenderingMode::Off => 0,
            RenderingMode::Basic => 1,
            RenderingMode::Normal => 2,
            RenderingMode::Full => 3,
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self != RenderingMode::Off
    }
}

/// Per-category colour overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<Category, Color>,
}

impl Palette {
    /// Colour for a category, falling back to the category default
    pub fn color(&self, category: Category) -> Color {
        self.colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_color())
    }

    pub fn set(&mut self, category: Category, color: Color) {
        self.colors.insert(category, color);
    }
}

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Rendering fidelity
    pub rendering_mode: RenderingMode,
    /// Whether decorations are shown at all
    pub show_symbols: bool,
    /// Custom glyph table, replacing the built-in one
    pub symbols_path: Option<PathBuf>,
    /// Category colours
    pub palette: Palette,
}

impl Config {
    /// Default settings with decorations shown
    pub fn new() -> Self {
        Self {
            show_symbols: true,
            ..Default::default()
        }
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".typst-glyphs.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".typst-glyphs.toml"))
        }
    }

    /// Load configuration from the default file
    ///
    /// A missing or broken file leaves the defaults in place.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_else(Self::new)
    }

    /// Load configuration from `path`, falling back to the defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::new();
        };
        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring {}: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Parse config file contents
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Self::new();
        for err in config.apply(&table) {
            warn!("{}", err);
        }
        Ok(config)
    }

    /// Apply settings from a parsed config
    ///
    /// Invalid values are skipped and returned; unknown keys are ignored.
    fn apply(&mut self, table: &Table) -> Vec<GlyphError> {
        let mut errors = Vec::new();

        if let Some(value) = table.get("rendering-mode") {
            match value.as_integer().and_then(RenderingMode::from_level) {
                Some(mode) => self.rendering_mode = mode,
                None => errors.push(invalid("rendering-mode", value)),
            }
        }

        if let Some(value) = table.get("show-symbols") {
            match value.as_bool() {
                Some(show) => self.show_symbols = show,
                None => errors.push(invalid("show-symbols", value)),
            }
        }

        if let Some(value) = table.get("symbols") {
            match value.as_str() {
                Some(path) if !path.is_empty() => self.symbols_path = Some(PathBuf::from(path)),
                _ => errors.push(invalid("symbols", value)),
            }
        }

        if let Some(value) = table.get("colors") {
            match value.as_table() {
                Some(colors) => {
                    for (name, color) in colors {
                        let category = Category::from_name(name);
                        let color_value = color.as_str().and_then(Color::from_name);
                        match (category, color_value) {
                            (Some(category), Some(color)) => self.palette.set(category, color),
                            _ => errors.push(invalid(&format!("colors.{name}"), color)),
                        }
                    }
                }
                None => errors.push(invalid("colors", value)),
            }
        }

        errors
    }
}

fn invalid(key: &str, value: &Value) -> GlyphError {
    GlyphError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
rendering-mode = 3
show-symbols = false
symbols = "my-symbols.toml"

[colors]
comparison = "red"
big-letter = "bright-green"
        "#;

        let config = Config::from_toml(contents).unwrap();
        assert_eq!(config.rendering_mode, RenderingMode::Full);
        assert!(!config.show_symbols);
        assert_eq!(config.symbols_path, Some(PathBuf::from("my-symbols.toml")));
        assert_eq!(config.palette.color(Category::Comparison), Color::Red);
        assert_eq!(config.palette.color(Category::BigLetter), Color::BrightGreen);
        assert_eq!(
            config.palette.color(Category::Keyword),
            Category::Keyword.default_color()
        );
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = Config::new();
        let table: Table = r#"
rendering-mode = 7
show-symbols = "yes"
unknown-key = 1

[colors]
comparison = "mauve"
nonsense = "red"
operator = "green"
        "#
        .parse()
        .unwrap();

        let errors = config.apply(&table);
        assert_eq!(errors.len(), 4);
        assert_eq!(config.rendering_mode, RenderingMode::Normal);
        assert!(config.show_symbols);
        assert_eq!(config.palette.color(Category::Operator), Color::Green);
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            Config::from_toml("rendering-mode = "),
            Err(GlyphError::TableSyntax(_))
        ));
    }

    #[test]
    fn test_rendering_mode_levels() {
        for level in 0..4 {
            let mode = RenderingMode::from_level(level).unwrap();
            assert_eq!(mode.level(), level);
        }
        assert_eq!(RenderingMode::from_level(4), None);
        assert!(!RenderingMode::Off.is_enabled());
        assert!(RenderingMode::Basic.is_enabled());
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = Config::load_from(std::path::Path::new("/nonexistent/typst-glyphs.toml"));
        assert_eq!(config, Config::new());
    }
}
