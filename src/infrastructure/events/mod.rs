//! Event Sink Implementations
//!
//! Concrete implementations of IngestEventSink:
//! - JsonEventSink: NDJSON output for automation
//! - ConsoleEventSink: human-readable lines on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
