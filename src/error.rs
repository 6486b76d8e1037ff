//! Error types for shapewatch
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::services::LineParseError;

/// Result type alias for shapewatch operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Main error type for shapewatch operations
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A file that must exist is missing
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file stayed locked past the wait budget
    #[error("file '{path}' was locked for more than {seconds} seconds")]
    LockTimeout { path: PathBuf, seconds: u64 },

    /// A line of an input file could not be turned into a shape
    #[error("cannot parse {file}: {source}")]
    Parse {
        file: PathBuf,
        #[source]
        source: LineParseError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error tied to a specific path
    #[error("IO error on {path}: {source}")]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is incomplete
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A required setting has no value in any configuration layer
    #[error("missing required setting '{key}' (config file, {env} or {flag})")]
    MissingSetting {
        key: &'static str,
        env: &'static str,
        flag: &'static str,
    },

    /// The directory watcher could not be started
    #[error("watch error: {message}")]
    Watch { message: String },
}

impl ShapeError {
    pub(crate) fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShapeError::IoAt {
            path: path.into(),
            source,
        }
    }
}

impl From<FsError> for ShapeError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => ShapeError::NotFound { path },
            FsError::PermissionDenied(path) => ShapeError::io_at(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ),
            FsError::AlreadyExists(path) => ShapeError::io_at(
                path,
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "destination already exists"),
            ),
            FsError::Io { path, source } => ShapeError::IoAt { path, source },
        }
    }
}

impl From<notify::Error> for ShapeError {
    fn from(err: notify::Error) -> Self {
        ShapeError::Watch {
            message: err.to_string(),
        }
    }
}
