//! Configuration module for shapewatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHAPEWATCH_*)
//! 3. `--config <path>`, else `./shapewatch.toml`, else
//!    `<config dir>/shapewatch/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    ConfigWarning, LoadedConfig, CONFIG_FILE_NAME, ENV_DROP_FOLDER, ENV_ENCODING,
    ENV_LOCK_WAIT_SECONDS, ENV_VERBOSITY, ENV_WATCH_EXTENSION, ENV_WATCH_FOLDER,
};
pub use types::{
    ColorMode, Config, DropConfig, InputConfig, OutputConfig, Verbosity, WatchConfig,
    DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_PROCESSED_DIR,
};
