//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file store (locks, no-clobber writes, moves)
//! - `events/` - event sinks (console, NDJSON)

pub mod events;
pub mod fs;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
