//! # textlaser
//!
//! Engraves lines of text with single-stroke CXF fonts by generating G-code
//! for a laser engraver or pen plotter.
//!
//! ## Architecture
//!
//! textlaser is organized as a workspace with multiple crates:
//!
//! 1. **textlaser-font** - CXF parsing, arc tessellation, stroke grouping
//! 2. **textlaser-settings** - Layout configuration and font search path
//! 3. **textlaser-engrave** - Transforms and G-code emission
//! 4. **textlaser** - Command line binary that ties the crates together

use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::Context;
use tracing::info;

pub mod cli;

pub use cli::Cli;
pub use textlaser_engrave::{Engraver, ProgramLine};
pub use textlaser_font::{Font, FontParser, GroupOrder};
pub use textlaser_settings::{FontSearchPath, LayoutConfig, LineSpacing};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging
///
/// Logs go to stderr because stdout carries the generated G-code.
/// `RUST_LOG` takes precedence over the verbosity count.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Run one engraving session described by `cli`, writing G-code to `sink`.
pub fn run<W: Write>(cli: &Cli, sink: &mut W) -> anyhow::Result<()> {
    let layout = cli.layout().context("Invalid layout configuration")?;

    let search = FontSearchPath::standard().with_extra_dirs(&cli.font_dirs);
    let font_path = search.locate(&cli.font)?;
    info!(font = %font_path.display(), "using font");

    let file = File::open(&font_path)
        .with_context(|| format!("Failed to open font {}", font_path.display()))?;
    let parsed = FontParser::new(cli.font.clone())
        .with_group_order(layout.group_order)
        .parse_reader(BufReader::new(file))?;

    let engraver = Engraver::new(&parsed.font, &layout, cli.font.clone())?;
    Engraver::write_diagnostics(sink, &parsed.diagnostics)?;
    engraver.run(&cli.lines, sink)?;
    Ok(())
}
