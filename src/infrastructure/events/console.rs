//! Console Event Sink
//!
//! Human-readable event lines on stderr, prefixed with the local time.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::config::{ColorMode, Verbosity};
use crate::domain::ports::{IngestEvent, IngestEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity, color: ColorMode) -> Self {
        let color = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            verbosity,
            color,
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color: false,
        }
    }

    fn accepts(&self, event: &IngestEvent) -> bool {
        match self.verbosity {
            Verbosity::Quiet => event.is_failure(),
            Verbosity::Normal => !event.is_detail(),
            Verbosity::Verbose | Verbosity::Debug => true,
        }
    }

    fn render(&self, event: &IngestEvent) -> String {
        let (tag, message) = describe(event);
        let tag = if !self.color {
            tag.to_string()
        } else if event.is_failure() {
            tag.red().bold().to_string()
        } else if matches!(event, IngestEvent::Completed { .. }) {
            tag.green().to_string()
        } else {
            tag.cyan().to_string()
        };
        let time = chrono::Local::now().format("%H:%M:%S");
        format!("[{time}] {tag} {message}")
    }
}

fn describe(event: &IngestEvent) -> (&'static str, String) {
    match event {
        IngestEvent::WatchStarted { folder, pattern } => (
            "watch",
            format!("watching {} for '{}'", folder.display(), pattern),
        ),
        IngestEvent::FileDetected { path } => {
            ("created", format!("file created in input folder: {}", path.display()))
        }
        IngestEvent::FileDeleted { path } => {
            ("deleted", format!("file deleted in input folder: {}", path.display()))
        }
        IngestEvent::ContentRead { path, lines } => {
            ("read", format!("{}: {} lines", path.display(), lines))
        }
        IngestEvent::EmptyInput { path } => ("empty", format!("file was empty: {}", path.display())),
        IngestEvent::ReadFailed { path, error } => (
            "error",
            format!(
                "reading {} failed, file left in the input folder: {}",
                path.display(),
                error
            ),
        ),
        IngestEvent::ParseFailed { path, error } => (
            "error",
            format!(
                "{} was not transformed, file left in the input folder: {}",
                path.display(),
                error
            ),
        ),
        IngestEvent::ReportWritten {
            view,
            path,
            entries,
        } => (
            "report",
            format!("{} report dropped: {} ({} entries)", view, path.display(), entries),
        ),
        IngestEvent::ReportFailed { view, path, error } => (
            "error",
            format!(
                "input transformed, but dropping the {} report {} failed: {}",
                view,
                path.display(),
                error
            ),
        ),
        IngestEvent::Relocated { from, to } => (
            "moved",
            format!("{} moved to {}", from.display(), to.display()),
        ),
        IngestEvent::RelocateFailed { path, error } => (
            "error",
            format!(
                "moving {} to the processed folder failed, move it manually: {}",
                path.display(),
                error
            ),
        ),
        IngestEvent::Completed { path, status } => ("done", format!("{}: {}", path.display(), status)),
        IngestEvent::Error { message } => ("error", message.clone()),
        IngestEvent::Shutdown => ("stop", "watcher stopped".to_string()),
    }
}

impl IngestEventSink for ConsoleEventSink {
    fn on_event(&self, event: IngestEvent) {
        if !self.accepts(&event) {
            return;
        }
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }

    fn wants_detailed_events(&self) -> bool {
        matches!(self.verbosity, Verbosity::Verbose | Verbosity::Debug)
    }
}
