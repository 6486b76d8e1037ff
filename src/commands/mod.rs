//! Command handlers
//!
//! Each handler loads configuration, applies its flags on top, wires the
//! use case to an event sink and runs it.

pub mod check;
pub mod process;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use shapewatch::config::{Config, LoadedConfig};
use shapewatch::domain::ports::IngestEventSink;
use shapewatch::{ConsoleEventSink, JsonEventSink};

use crate::cli::ColorWhen;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}

/// Discover configuration and report its warnings on stderr
pub fn load_config(globals: &GlobalArgs) -> Result<LoadedConfig> {
    let loaded = Config::discover(globals.config.as_deref())?;
    if !globals.json {
        for warning in &loaded.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(loaded)
}

/// NDJSON on stdout with `--json`, console lines on stderr otherwise
pub fn event_sink(
    globals: &GlobalArgs,
    config: &Config,
    command: &'static str,
) -> Arc<dyn IngestEventSink> {
    if globals.json {
        return Arc::new(JsonEventSink::stdout(command));
    }
    let verbosity = config.output.verbosity.raised_by(globals.verbose);
    let color = globals
        .color
        .map(Into::into)
        .unwrap_or(config.output.color);
    Arc::new(ConsoleEventSink::stderr(verbosity, color))
}
