//! Watch options, notify event classification and arrival debouncing

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::event::{AccessKind, AccessMode, EventKind, ModifyKind, RenameMode};
use notify::Event;

use super::pattern::FilePattern;
use crate::application::ingest::IngestOutcome;

/// Quiet period after the last event for a file before it is ingested
pub const DEBOUNCE_MS: u64 = 500;

/// A created file that is never reported closed is ingested after this
/// long without activity
pub const STALL_TIMEOUT_MS: u64 = 30_000;

/// Whether the platform watcher reports a writer closing a file (inotify)
pub const REPORTS_CLOSE_WRITE: bool = cfg!(any(target_os = "linux", target_os = "android"));

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Folder to watch (not recursive)
    pub folder: PathBuf,
    /// Which file names are inputs
    pub pattern: FilePattern,
    /// Ingest matching files already in the folder before waiting for new ones
    pub process_existing: bool,
    /// Quiet period before an arrival is ingested
    pub debounce: Duration,
    /// Upper bound on waiting for a close event
    pub stall_timeout: Duration,
}

impl WatchOptions {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            pattern: FilePattern::any(),
            process_existing: false,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            stall_timeout: Duration::from_millis(STALL_TIMEOUT_MS),
        }
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = FilePattern::new(pattern);
        self
    }

    pub fn with_process_existing(mut self, process_existing: bool) -> Self {
        self.process_existing = process_existing;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_stall_timeout(mut self, stall_timeout: Duration) -> Self {
        self.stall_timeout = stall_timeout;
        self
    }
}

/// What the watch loop does with one path from a notify event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchAction {
    /// A file was created in the folder; its writer may still hold it
    Created(PathBuf),
    /// A file was renamed into the folder
    MovedIn(PathBuf),
    /// File content changed
    Written(PathBuf),
    /// A writer closed the file
    Closed(PathBuf),
    /// A file was deleted
    Removed(PathBuf),
}

/// Reduce a notify event to the actions the loop cares about
pub fn classify(event: &Event) -> Vec<WatchAction> {
    let each = |action: fn(PathBuf) -> WatchAction| -> Vec<WatchAction> {
        event.paths.iter().cloned().map(action).collect()
    };

    match event.kind {
        EventKind::Create(_) => each(WatchAction::Created),
        // FSEvents reports renames without a direction
        EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Any)) => {
            each(WatchAction::MovedIn)
        }
        // [from, to]
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => event
            .paths
            .last()
            .cloned()
            .map(WatchAction::MovedIn)
            .into_iter()
            .collect(),
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => each(WatchAction::Written),
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => each(WatchAction::Closed),
        EventKind::Remove(_) => each(WatchAction::Removed),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    last_change: Instant,
    awaiting_close: bool,
}

/// Arrivals waiting for their writer to finish
///
/// Every event for a pending path restarts its quiet period. Where the
/// platform reports closes, a created or rewritten file also waits for
/// its writer to close it. A file that never gets there is released
/// after the stall timeout.
#[derive(Debug)]
pub struct PendingArrivals {
    pending: HashMap<PathBuf, Pending>,
    debounce: Duration,
    stall_timeout: Duration,
    close_events: bool,
}

impl PendingArrivals {
    pub fn new(debounce: Duration, stall_timeout: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            debounce,
            stall_timeout,
            close_events: REPORTS_CLOSE_WRITE,
        }
    }

    pub fn for_options(options: &WatchOptions) -> Self {
        Self::new(options.debounce, options.stall_timeout)
    }

    /// Override whether close events are expected
    pub fn with_close_events(mut self, close_events: bool) -> Self {
        self.close_events = close_events;
        self
    }

    /// Track a file that appeared. A created file may still be open for
    /// writing; a file renamed in is complete.
    pub fn arrive(&mut self, path: PathBuf, created: bool, now: Instant) {
        self.pending.insert(
            path,
            Pending {
                last_change: now,
                awaiting_close: created && self.close_events,
            },
        );
    }

    /// Content of a pending file changed
    pub fn touch(&mut self, path: &Path, now: Instant) {
        let close_events = self.close_events;
        if let Some(entry) = self.pending.get_mut(path) {
            entry.last_change = now;
            entry.awaiting_close = close_events;
        }
    }

    /// The writer of a pending file closed it
    pub fn close(&mut self, path: &Path, now: Instant) {
        if let Some(entry) = self.pending.get_mut(path) {
            entry.last_change = now;
            entry.awaiting_close = false;
        }
    }

    /// Stop tracking a path; returns whether it was pending
    pub fn forget(&mut self, path: &Path) -> bool {
        self.pending.remove(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.pending.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the paths that have settled, in name order
    pub fn take_ready(&mut self, now: Instant) -> Vec<PathBuf> {
        let mut ready: Vec<PathBuf> = self
            .pending
            .iter()
            .filter(|(_, entry)| self.is_settled(entry, now))
            .map(|(path, _)| path.clone())
            .collect();
        ready.sort();

        for path in &ready {
            self.pending.remove(path);
        }
        ready
    }

    fn is_settled(&self, entry: &Pending, now: Instant) -> bool {
        let quiet = now.saturating_duration_since(entry.last_change);
        (quiet >= self.debounce && !entry.awaiting_close) || quiet >= self.stall_timeout
    }
}

/// Tally of the files a watch session handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub detected: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl WatchSummary {
    pub fn record(&mut self, outcome: &IngestOutcome) {
        self.detected += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}
