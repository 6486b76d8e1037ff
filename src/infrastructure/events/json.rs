//! JSON Event Sink
//!
//! Outputs ingest events as NDJSON for automation and log shippers.

use crate::domain::ports::{IngestEvent, IngestEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(self.command));
            obj.insert(
                "timestamp".to_string(),
                serde_json::json!(chrono::Local::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn event_to_json(event: IngestEvent) -> serde_json::Value {
    match event {
        IngestEvent::WatchStarted { folder, pattern } => serde_json::json!({
            "event": "watch_started",
            "folder": folder.display().to_string(),
            "pattern": pattern,
        }),

        IngestEvent::FileDetected { path } => serde_json::json!({
            "event": "file_detected",
            "path": path.display().to_string(),
        }),

        IngestEvent::FileDeleted { path } => serde_json::json!({
            "event": "file_deleted",
            "path": path.display().to_string(),
        }),

        IngestEvent::ContentRead { path, lines } => serde_json::json!({
            "event": "content_read",
            "path": path.display().to_string(),
            "lines": lines,
        }),

        IngestEvent::EmptyInput { path } => serde_json::json!({
            "event": "empty_input",
            "path": path.display().to_string(),
        }),

        IngestEvent::ReadFailed { path, error } => serde_json::json!({
            "event": "read_failed",
            "path": path.display().to_string(),
            "error": error,
        }),

        IngestEvent::ParseFailed { path, error } => serde_json::json!({
            "event": "parse_failed",
            "path": path.display().to_string(),
            "error": error,
        }),

        IngestEvent::ReportWritten {
            view,
            path,
            entries,
        } => serde_json::json!({
            "event": "report_written",
            "view": view.name(),
            "path": path.display().to_string(),
            "entries": entries,
        }),

        IngestEvent::ReportFailed { view, path, error } => serde_json::json!({
            "event": "report_failed",
            "view": view.name(),
            "path": path.display().to_string(),
            "error": error,
        }),

        IngestEvent::Relocated { from, to } => serde_json::json!({
            "event": "relocated",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),

        IngestEvent::RelocateFailed { path, error } => serde_json::json!({
            "event": "relocate_failed",
            "path": path.display().to_string(),
            "error": error,
        }),

        IngestEvent::Completed { path, status } => serde_json::json!({
            "event": "complete",
            "path": path.display().to_string(),
            "status": status,
        }),

        IngestEvent::Error { message } => serde_json::json!({
            "event": "error",
            "message": message,
        }),

        IngestEvent::Shutdown => serde_json::json!({ "event": "shutdown" }),
    }
}

impl IngestEventSink for JsonEventSink {
    fn on_event(&self, event: IngestEvent) {
        self.write_event(event_to_json(event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
