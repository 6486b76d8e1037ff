//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TextEncoding;
use crate::error::{ShapeError, ShapeResult};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Default seconds to wait for a locked input file
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Default name of the subfolder processed inputs are moved to
pub const DEFAULT_PROCESSED_DIR: &str = "Processed";

/// Watched folder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Folder to watch for new input files
    #[serde(default)]
    pub folder: Option<PathBuf>,

    /// File pattern (`*.txt`, `shapes.csv`); empty means all files
    #[serde(default)]
    pub extension: String,

    /// Seconds to wait for a locked file before giving up
    #[serde(default = "default_lock_wait_seconds")]
    pub lock_wait_seconds: u64,

    /// Subfolder of `folder` that processed inputs move to
    #[serde(default = "default_processed_dir")]
    pub processed_dir: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            folder: None,
            extension: String::new(),
            lock_wait_seconds: DEFAULT_LOCK_WAIT_SECONDS,
            processed_dir: default_processed_dir(),
        }
    }
}

fn default_lock_wait_seconds() -> u64 {
    DEFAULT_LOCK_WAIT_SECONDS
}

fn default_processed_dir() -> String {
    DEFAULT_PROCESSED_DIR.to_string()
}

/// Report drop configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DropConfig {
    /// Folder reports are written to
    #[serde(default)]
    pub folder: Option<PathBuf>,
}

/// Input decoding configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub encoding: TextEncoding,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Raise the level by the number of `-v` flags
    pub fn raised_by(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Verbosity::Quiet | Verbosity::Normal, 1) => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub drop: DropConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShapeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShapeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse TOML text, collecting warnings as `load_with_warnings` does.
    /// `origin` names the source in errors and warnings.
    pub fn parse_with_warnings(
        content: &str,
        origin: &Path,
    ) -> ShapeResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, origin)
    }

    /// Load from an explicit path, `./shapewatch.toml`, the user config
    /// directory, or defaults; then apply `SHAPEWATCH_*` overrides.
    pub fn discover(explicit: Option<&Path>) -> ShapeResult<LoadedConfig> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (SHAPEWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Watched folder, or an error naming every place it can be set
    pub fn require_watch_folder(&self) -> ShapeResult<&Path> {
        self.watch
            .folder
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ShapeError::MissingSetting {
                key: "watch.folder",
                env: loader::ENV_WATCH_FOLDER,
                flag: "--folder",
            })
    }

    /// Drop folder, or an error naming every place it can be set
    pub fn require_drop_folder(&self) -> ShapeResult<&Path> {
        self.drop
            .folder
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ShapeError::MissingSetting {
                key: "drop.folder",
                env: loader::ENV_DROP_FOLDER,
                flag: "--drop",
            })
    }
}
