//! Ingest Options

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::config::{Config, DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_PROCESSED_DIR};
use crate::domain::services::POLL_INTERVAL;
use crate::domain::value_objects::TextEncoding;
use crate::error::ShapeResult;

/// Terminator written after every report line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Terminator written after every report line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Options for the ingest use case
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Folder inputs arrive in; processed inputs move below it
    pub watch_folder: PathBuf,
    /// Folder reports are written to
    pub drop_folder: PathBuf,
    /// Name of the processed subfolder inside `watch_folder`
    pub processed_dir: String,
    /// Seconds to wait for a locked input (0 = don't wait)
    pub lock_wait_seconds: u64,
    /// Sleep between two lock probes
    pub poll_interval: Duration,
    /// Encoding of inputs and reports
    pub encoding: TextEncoding,
    /// Date stamped into report names; `None` uses today's local date
    pub batch_date: Option<NaiveDate>,
}

impl IngestOptions {
    pub fn new(watch_folder: impl Into<PathBuf>, drop_folder: impl Into<PathBuf>) -> Self {
        Self {
            watch_folder: watch_folder.into(),
            drop_folder: drop_folder.into(),
            processed_dir: DEFAULT_PROCESSED_DIR.to_string(),
            lock_wait_seconds: DEFAULT_LOCK_WAIT_SECONDS,
            poll_interval: POLL_INTERVAL,
            encoding: TextEncoding::default(),
            batch_date: None,
        }
    }

    /// Build options from a loaded configuration. Both folders must be set.
    pub fn from_config(config: &Config) -> ShapeResult<Self> {
        let watch_folder = config.require_watch_folder()?;
        let drop_folder = config.require_drop_folder()?;
        Ok(Self::new(watch_folder, drop_folder)
            .with_processed_dir(config.watch.processed_dir.clone())
            .with_lock_wait_seconds(config.watch.lock_wait_seconds)
            .with_encoding(config.input.encoding))
    }

    pub fn with_processed_dir(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.processed_dir = name;
        }
        self
    }

    pub fn with_lock_wait_seconds(mut self, seconds: u64) -> Self {
        self.lock_wait_seconds = seconds;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_batch_date(mut self, date: NaiveDate) -> Self {
        self.batch_date = Some(date);
        self
    }

    /// Folder processed inputs are moved into
    pub fn processed_folder(&self) -> PathBuf {
        self.watch_folder.join(&self.processed_dir)
    }

    /// `YYYYMMDD` stamp for this batch's report names
    pub fn date_stamp(&self) -> String {
        self.batch_date
            .unwrap_or_else(|| Local::now().date_naive())
            .format("%Y%m%d")
            .to_string()
    }

    /// Watch folder for a file processed on its own: the file's parent
    pub fn watch_folder_of(file: &Path) -> PathBuf {
        file.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
