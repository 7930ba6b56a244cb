//! typst-glyphs - preview Unicode math glyphs over a Typst document
//!
//! Reads a file, runs one decoration pass and prints the document with
//! the glyphs drawn in.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use log::warn;
use simplelog::{ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode};

use typst_glyphs::decor::{Engine, GlyphTable};
use typst_glyphs::preview;
use typst_glyphs::{Config, GlyphError, RenderingMode, Result};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    mode: Option<RenderingMode>,
    symbols: Option<PathBuf>,
    keep_columns: bool,
    plain: bool,
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--verbose" | "-v" => options.verbose = true,
            "--keep-columns" => options.keep_columns = true,
            "--plain" => options.plain = true,
            "--mode" => {
                let value = iter.next().map(String::as_str).unwrap_or_default();
                let mode = value.parse().ok().and_then(RenderingMode::from_level);
                match mode {
                    Some(mode) => options.mode = Some(mode),
                    None => return Err(invalid_option("--mode", value)),
                }
            }
            "--symbols" => match iter.next() {
                Some(path) => options.symbols = Some(PathBuf::from(path)),
                None => return Err(invalid_option("--symbols", "")),
            },
            _ if arg.starts_with('-') => return Err(invalid_option(arg, "")),
            _ => options.file = Some(PathBuf::from(arg)),
        }
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A second logger cannot be installed; keep going without it
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);

    let Some(path) = options.file else {
        print_usage();
        return Ok(());
    };

    let mut config = Config::load();
    if let Some(mode) = options.mode {
        config.rendering_mode = mode;
    }
    if let Some(symbols) = options.symbols {
        config.symbols_path = Some(symbols);
    }

    let text = fs::read_to_string(&path)?;
    let mut engine = match Engine::from_config(config.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            warn!("{}; using the built-in glyph table", e);
            match GlyphTable::builtin() {
                Ok(table) => Engine::new(config, table),
                Err(_) => Engine::without_table(config),
            }
        }
    };

    let decorations = engine.redraw(0, &text)?;
    let segments = preview::overlay(&text, &decorations, options.keep_columns);
    let stdout = io::stdout();
    preview::render(&mut stdout.lock(), &segments, options.plain)?;

    Ok(())
}

fn invalid_option(key: &str, value: &str) -> GlyphError {
    GlyphError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn print_usage() {
    println!("typst-glyphs {} - Unicode math glyph preview", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: typst-glyphs [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help        Show this help message");
    println!("  -V, --version     Show version information");
    println!("  -v, --verbose     Log each decoration pass");
    println!("  --mode N          Rendering mode: 0 off, 1 basic, 2 normal, 3 full");
    println!("  --symbols PATH    Use a custom glyph table");
    println!("  --keep-columns    Pad glyphs to the width of the text they replace");
    println!("  --plain           Print without colours");
    println!();
    println!("Settings are read from ~/.typst-glyphs.toml");
}

fn print_version() {
    println!("typst-glyphs {}", env!("CARGO_PKG_VERSION"));
    println!("Glyph decorations for Typst math notation");
}
