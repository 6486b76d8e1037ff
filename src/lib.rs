//! shapewatch - folder watcher that turns shape files into area reports
//!
//! Input files hold one shape per line (`circle, 2, Blue`). Every file that
//! lands in the watched folder is parsed, sorted by area then color, and
//! written out as three dated reports (all shapes, triangles, purple
//! shapes) before the input is moved into a `Processed` subfolder.
//!
//! ## Layers
//!
//! - `domain` - shapes, parsing, sorting, lock waits, name resolution
//! - `application` - the ingest and watch use cases
//! - `infrastructure` - local file system and event sinks
//! - `config` - TOML + environment configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    FilePattern, IngestOptions, IngestOutcome, IngestUseCase, WatchOptions, WatchSummary,
    WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{Geometry, ReportEntry, Shape};
pub use domain::services::{parse_line, LineParseError};
pub use domain::value_objects::{ReportView, ShapeKind, TextEncoding};
pub use error::{ShapeError, ShapeResult};
pub use infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};
