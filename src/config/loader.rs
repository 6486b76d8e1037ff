//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::TextEncoding;
use crate::error::{ShapeError, ShapeResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "shapewatch.toml";

pub const ENV_WATCH_FOLDER: &str = "SHAPEWATCH_WATCH_FOLDER";
pub const ENV_WATCH_EXTENSION: &str = "SHAPEWATCH_WATCH_EXTENSION";
pub const ENV_DROP_FOLDER: &str = "SHAPEWATCH_DROP_FOLDER";
pub const ENV_LOCK_WAIT_SECONDS: &str = "SHAPEWATCH_LOCK_WAIT_SECONDS";
pub const ENV_ENCODING: &str = "SHAPEWATCH_ENCODING";
pub const ENV_VERBOSITY: &str = "SHAPEWATCH_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from; `None` means defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShapeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ShapeError::io_at(path, e))?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used in errors and warnings.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ShapeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShapeError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, the working directory, the user config
/// directory, or defaults, then apply environment overrides.
pub fn discover(explicit: Option<&Path>) -> ShapeResult<LoadedConfig> {
    let source = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ShapeError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => default_locations().into_iter().find(|p| p.is_file()),
    };

    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config, |key| std::env::var(key).ok()),
        warnings,
        source,
    })
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("shapewatch").join("config.toml"));
    }
    locations
}

/// Apply environment variable overrides (SHAPEWATCH_* prefix).
///
/// Values that do not parse are ignored.
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(folder) = get_env(ENV_WATCH_FOLDER) {
        config.watch.folder = Some(PathBuf::from(folder));
    }

    if let Some(extension) = get_env(ENV_WATCH_EXTENSION) {
        config.watch.extension = extension;
    }

    if let Some(folder) = get_env(ENV_DROP_FOLDER) {
        config.drop.folder = Some(PathBuf::from(folder));
    }

    if let Some(seconds) = get_env(ENV_LOCK_WAIT_SECONDS).and_then(|s| s.trim().parse().ok()) {
        config.watch.lock_wait_seconds = seconds;
    }

    if let Some(encoding) = get_env(ENV_ENCODING).and_then(|s| TextEncoding::from_name(&s)) {
        config.input.encoding = encoding;
    }

    if let Some(verbosity) = get_env(ENV_VERBOSITY).and_then(|s| Verbosity::from_name(&s)) {
        config.output.verbosity = verbosity;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "folder",
        "extension",
        "lock_wait_seconds",
        "processed_dir",
        "drop",
        "input",
        "encoding",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
