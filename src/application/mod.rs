//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IngestUseCase` - One input file in, three reports out, input relocated
//! - `WatchUseCase` - Watches a folder and ingests every file that arrives

pub mod ingest;
pub mod watch;

pub use ingest::{IngestOptions, IngestOutcome, IngestUseCase};
pub use watch::{
    FilePattern, PendingArrivals, WatchAction, WatchOptions, WatchSummary, WatchUseCase,
};
