//! Ingest Event Port
//!
//! The logging capability of the pipeline. Every component that reports
//! progress or failures receives a sink instead of reaching for a global
//! logger, so tests can capture and assert on what was reported.

use std::path::PathBuf;

use crate::domain::value_objects::ReportView;

/// Event emitted while watching a folder or ingesting a file
#[derive(Debug, Clone, PartialEq)]
pub enum IngestEvent {
    /// Watcher registered on a folder
    WatchStarted { folder: PathBuf, pattern: String },

    /// A new file appeared in the watched folder
    FileDetected { path: PathBuf },

    /// A file was removed from the watched folder
    FileDeleted { path: PathBuf },

    /// Input read successfully
    ContentRead { path: PathBuf, lines: usize },

    /// Input had no lines; it goes straight to the processed folder
    EmptyInput { path: PathBuf },

    /// Input could not be read; left in place for manual handling
    ReadFailed { path: PathBuf, error: String },

    /// A line could not be parsed; nothing was written
    ParseFailed { path: PathBuf, error: String },

    /// A report file was written
    ReportWritten {
        view: ReportView,
        path: PathBuf,
        entries: usize,
    },

    /// A report file could not be written
    ReportFailed {
        view: ReportView,
        path: PathBuf,
        error: String,
    },

    /// Input moved to the processed folder
    Relocated { from: PathBuf, to: PathBuf },

    /// Input could not be moved; must be moved manually
    RelocateFailed { path: PathBuf, error: String },

    /// Ingestion of one file finished
    Completed { path: PathBuf, status: &'static str },

    /// Error outside the scope of a single file
    Error { message: String },

    /// Watcher stopped
    Shutdown,
}

impl IngestEvent {
    /// Whether the event reports something an operator has to act on
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            IngestEvent::ReadFailed { .. }
                | IngestEvent::ParseFailed { .. }
                | IngestEvent::ReportFailed { .. }
                | IngestEvent::RelocateFailed { .. }
                | IngestEvent::Error { .. }
        )
    }

    /// Whether the event is per-step detail rather than a milestone
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            IngestEvent::ContentRead { .. }
                | IngestEvent::ReportWritten { .. }
                | IngestEvent::FileDeleted { .. }
        )
    }
}

/// Trait for receiving ingest events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait IngestEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: IngestEvent);

    /// Check if this sink wants per-step events (content read, each report)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl IngestEventSink for NoopEventSink {
    fn on_event(&self, _event: IngestEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    #[derive(Clone, Default)]
    pub(crate) struct RecordingEventSink {
        events: Arc<Mutex<Vec<IngestEvent>>>,
    }

    impl RecordingEventSink {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn events(&self) -> Vec<IngestEvent> {
            self.events.lock().unwrap().clone()
        }

        pub(crate) fn count(&self, pred: impl Fn(&IngestEvent) -> bool) -> usize {
            self.events.lock().unwrap().iter().filter(|e| pred(e)).count()
        }
    }

    impl IngestEventSink for RecordingEventSink {
        fn on_event(&self, event: IngestEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
