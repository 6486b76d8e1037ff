//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_store;
pub mod ingest_events;

pub use file_store::{FileStore, FsError, FsResult};
pub use ingest_events::{IngestEvent, IngestEventSink, NoopEventSink};

#[cfg(test)]
pub(crate) use ingest_events::recording;
