//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::ingest::IngestUseCase;
use crate::domain::ports::{FileStore, IngestEvent, IngestEventSink};
use crate::error::{ShapeError, ShapeResult};

use super::event::{classify, PendingArrivals, WatchAction, WatchOptions, WatchSummary};

/// How long the loop blocks on the event channel before rechecking `running`
pub const RECV_TIMEOUT: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Orchestrates continuous folder watching with ingest-on-arrival.
/// This is the main entry point for the `shapewatch watch` command.
pub struct WatchUseCase<F> {
    ingest: IngestUseCase<F>,
    options: WatchOptions,
    events: Arc<dyn IngestEventSink>,
}

impl<F: FileStore> WatchUseCase<F> {
    pub fn new(
        ingest: IngestUseCase<F>,
        options: WatchOptions,
        events: Arc<dyn IngestEventSink>,
    ) -> Self {
        Self {
            ingest,
            options,
            events,
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// Returns once the running flag is set to false. Arrivals are held
    /// until they settle (see `PendingArrivals`), then ingested one at a
    /// time on the calling thread. Files still pending at shutdown stay in
    /// the folder.
    pub fn start(&self, running: Arc<AtomicBool>) -> ShapeResult<WatchSummary> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&self.options.folder, RecursiveMode::NonRecursive)?;

        self.events.on_event(IngestEvent::WatchStarted {
            folder: self.options.folder.clone(),
            pattern: self.options.pattern.to_string(),
        });

        let mut summary = WatchSummary::default();
        if self.options.process_existing {
            if let Err(e) = self.sweep_existing(&running, &mut summary) {
                self.events.on_event(IngestEvent::Error {
                    message: e.to_string(),
                });
            }
        }

        let mut pending = PendingArrivals::for_options(&self.options);
        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(RECV_TIMEOUT) {
                Ok(Ok(event)) => {
                    let now = Instant::now();
                    for action in classify(&event) {
                        self.observe(action, &mut pending, now);
                    }
                }
                Ok(Err(e)) => self.events.on_event(IngestEvent::Error {
                    message: e.to_string(),
                }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.ingest_ready(&mut pending, Instant::now(), &mut summary);
        }

        self.events.on_event(IngestEvent::Shutdown);
        Ok(summary)
    }

    /// Ingest matching files already in the folder, in name order
    pub fn sweep_existing(
        &self,
        running: &AtomicBool,
        summary: &mut WatchSummary,
    ) -> ShapeResult<()> {
        let folder = &self.options.folder;
        let mut paths: Vec<PathBuf> = std::fs::read_dir(folder)
            .map_err(|e| ShapeError::io_at(folder, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.options.pattern.matches(path))
            .collect();
        paths.sort();

        for path in paths {
            if !running.load(Ordering::SeqCst) {
                break;
            }
            self.ingest_arrival(&path, summary);
        }
        Ok(())
    }

    /// Feed one classified event into the pending set
    pub fn observe(&self, action: WatchAction, pending: &mut PendingArrivals, now: Instant) {
        match action {
            WatchAction::Created(path) => {
                if self.is_input(&path) {
                    pending.arrive(path, true, now);
                }
            }
            WatchAction::MovedIn(path) => {
                if self.is_input(&path) {
                    pending.arrive(path, false, now);
                }
            }
            WatchAction::Written(path) => pending.touch(&path, now),
            WatchAction::Closed(path) => pending.close(&path, now),
            WatchAction::Removed(path) => {
                pending.forget(&path);
                if self.is_input(&path) && self.events.wants_detailed_events() {
                    self.events.on_event(IngestEvent::FileDeleted { path });
                }
            }
        }
    }

    /// Ingest every pending arrival that has settled by `now`
    pub fn ingest_ready(
        &self,
        pending: &mut PendingArrivals,
        now: Instant,
        summary: &mut WatchSummary,
    ) {
        for path in pending.take_ready(now) {
            self.ingest_arrival(&path, summary);
        }
    }

    /// Hand one arrived file to the ingest use case
    pub fn ingest_arrival(&self, path: &Path, summary: &mut WatchSummary) {
        // Gone already (moved away or deleted) or not a regular file
        if !self.is_input(path) || !path.is_file() {
            return;
        }
        self.events.on_event(IngestEvent::FileDetected {
            path: path.to_path_buf(),
        });
        let outcome = self.ingest.process(path);
        summary.record(&outcome);
    }

    fn is_input(&self, path: &Path) -> bool {
        path != self.options.folder && self.options.pattern.matches(path)
    }
}
