//! Decoration engine
//!
//! The engine owns the compiled rules and the registry. Rules are compiled
//! when the engine is activated; every redraw resets the registry's
//! ranges, scans the static rules, then the dynamic ones, and hands back
//! the flattened paint instructions.

use std::mem;

use log::debug;

use super::dynamic;
use super::generator::{generate, Generated, Phase};
use super::registry::{Decoration, Registry};
use super::rules::{RuleCompiler, StaticRule};
use super::table::GlyphTable;
use crate::config::{Config, RenderingMode};
use crate::error::{GlyphError, Result};

/// Glyph decoration engine for one document
#[derive(Debug)]
pub struct Engine {
    config: Config,
    /// `None` in no-table mode
    table: Option<GlyphTable>,
    /// Rules of the latest generation, `None` until activated
    generated: Option<Generated>,
    /// One-time family kept from the initial generation
    extras: Vec<StaticRule>,
    phase: Phase,
    registry: Registry,
    /// Revision of the last applied pass
    revision: Option<u64>,
}

impl Engine {
    /// Create an engine and compile its rules
    pub fn new(config: Config, table: GlyphTable) -> Self {
        let mut engine = Self::with_table(config, Some(table));
        engine.activate();
        engine
    }

    /// Engine that never decorates, for when the glyph table failed to load
    pub fn without_table(config: Config) -> Self {
        Self::with_table(config, None)
    }

    fn with_table(config: Config, table: Option<GlyphTable>) -> Self {
        Self {
            config,
            table,
            generated: None,
            extras: Vec::new(),
            phase: Phase::Initial,
            registry: Registry::new(),
            revision: None,
        }
    }

    /// Create an engine with the configured table, or the built-in one
    pub fn from_config(config: Config) -> Result<Self> {
        let table = match &config.symbols_path {
            Some(path) => GlyphTable::load(path)?,
            None => GlyphTable::builtin()?,
        };
        Ok(Self::new(config, table))
    }

    /// Compile the rules
    ///
    /// The first generation after creation or `reset_generation` is the
    /// initial phase; its one-time rules are kept for later generations.
    /// Nothing is compiled while decorations are hidden.
    pub fn activate(&mut self) {
        if !self.config.show_symbols {
            return;
        }
        let Some(table) = &self.table else {
            return;
        };
        let mut compiler = RuleCompiler::new(self.config.rendering_mode, &self.config.palette);
        let mut generated = generate(table, &mut compiler, self.phase);
        if self.phase == Phase::Initial {
            self.extras = mem::take(&mut generated.extras);
            self.phase = Phase::Subsequent;
        }
        self.generated = Some(generated);
    }

    /// Forget the compiled rules; the next activation is an initial one
    pub fn reset_generation(&mut self) {
        self.generated = None;
        self.extras.clear();
        self.phase = Phase::Initial;
    }

    /// Decorate `text` as of `revision`
    ///
    /// A revision older than the last applied one is rejected before the
    /// registry is touched. While decorations are hidden every entry comes
    /// back empty.
    pub fn redraw(&mut self, revision: u64, text: &str) -> Result<Vec<Decoration<'_>>> {
        if let Some(current) = self.revision {
            if revision < current {
                return Err(GlyphError::StalePass { revision, current });
            }
        }
        self.revision = Some(revision);
        self.registry.reset_ranges();

        if self.config.show_symbols {
            if self.generated.is_none() {
                self.activate();
            }
            if let Some(generated) = &self.generated {
                for rule in generated.base.iter().chain(&self.extras) {
                    let found = rule.matches(text);
                    self.registry
                        .register(rule.category, &rule.name, rule.style)
                        .ranges
                        .extend(found);
                }
                for rule in &generated.dynamic {
                    dynamic::scan(&mut self.registry, text, rule);
                }
                if let Some(abs) = &generated.abs {
                    abs.scan(&mut self.registry, text);
                }
            }
        }

        debug!(
            "revision {}: {} ranges in {} entries",
            revision,
            self.registry.total_ranges(),
            self.registry.len()
        );
        Ok(self.registry.flatten())
    }

    /// Paint instructions of the last pass
    pub fn decorations(&self) -> Vec<Decoration<'_>> {
        self.registry.flatten()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.config.show_symbols
    }

    /// Show or hide decorations
    ///
    /// Compiled rules and registry entries survive; the next redraw
    /// reflects the change.
    pub fn set_visible(&mut self, visible: bool) {
        self.config.show_symbols = visible;
    }

    /// Toggle decorations on/off
    pub fn toggle(&mut self) {
        self.set_visible(!self.config.show_symbols);
    }

    /// Change the rendering mode and recompile
    pub fn set_mode(&mut self, mode: RenderingMode) {
        let config = Config {
            rendering_mode: mode,
            ..self.config.clone()
        };
        self.reconfigure(config);
    }

    /// Apply new settings
    ///
    /// Styles are part of the registry entries, so the registry is dropped
    /// and the rules are compiled again from the initial phase.
    pub fn reconfigure(&mut self, config: Config) {
        self.config = config;
        self.registry.reset_all();
        self.reset_generation();
        self.activate();
    }
}
