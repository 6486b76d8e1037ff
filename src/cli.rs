//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shapewatch::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// shapewatch - turn shape files dropped into a folder into area reports
#[derive(Parser, Debug)]
#[command(name = "shapewatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./shapewatch.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch a folder and ingest every file that arrives (Ctrl+C to stop)
    Watch {
        /// Folder to watch
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Input file pattern (e.g. "*.txt"); all files by default
        #[arg(short, long)]
        extension: Option<String>,

        /// Folder reports are written to
        #[arg(short, long)]
        drop: Option<PathBuf>,

        /// Seconds to wait for a locked input (0 = don't wait)
        #[arg(long, value_name = "SECS")]
        lock_wait: Option<u64>,

        /// Ingest matching files already in the folder before watching
        #[arg(long)]
        process_existing: bool,
    },

    /// Ingest a single file; it moves into Processed next to it
    Process {
        /// Input file
        file: PathBuf,

        /// Folder reports are written to
        #[arg(short, long)]
        drop: Option<PathBuf>,

        /// Seconds to wait for a locked input (0 = don't wait)
        #[arg(long, value_name = "SECS")]
        lock_wait: Option<u64>,
    },

    /// Show the effective configuration and any warnings
    Check,
}
