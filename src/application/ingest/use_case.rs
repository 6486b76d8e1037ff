//! Ingest Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{FileStore, IngestEvent, IngestEventSink};
use crate::domain::services::{
    build_reports, parse_lines, LockGuard, Report, UniqueNameResolver,
};
use crate::domain::value_objects::ReportView;
use crate::error::{ShapeError, ShapeResult};

use super::options::{IngestOptions, LINE_ENDING};
use super::outcome::IngestOutcome;

/// Ingest Use Case
///
/// Processes one input file:
/// 1. Wait until the file is unlocked, read and decode it
/// 2. Empty input goes straight to the processed folder
/// 3. Parse every line; the first bad line aborts the file
/// 4. Sort the batch and write the All / Triangles / Purple reports
/// 5. Move the input into the processed folder
///
/// Read and parse failures leave the input where it is. Report and
/// relocation failures are reported and never rolled back.
pub struct IngestUseCase<F> {
    store: F,
    events: Arc<dyn IngestEventSink>,
    options: IngestOptions,
}

impl<F: FileStore> IngestUseCase<F> {
    pub fn new(store: F, events: Arc<dyn IngestEventSink>, options: IngestOptions) -> Self {
        Self {
            store,
            events,
            options,
        }
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Run the whole flow for `path`. Never panics on bad input; every
    /// failure is reported through the event sink and the outcome.
    pub fn process(&self, path: &Path) -> IngestOutcome {
        let outcome = self.run(path);
        self.events.on_event(IngestEvent::Completed {
            path: path.to_path_buf(),
            status: outcome.status(),
        });
        outcome
    }

    fn run(&self, path: &Path) -> IngestOutcome {
        let lines = match self.read_lines(path) {
            Ok(lines) => lines,
            Err(error) => {
                self.events.on_event(IngestEvent::ReadFailed {
                    path: path.to_path_buf(),
                    error: error.to_string(),
                });
                return IngestOutcome::ReadFailed { error };
            }
        };

        if self.events.wants_detailed_events() {
            self.events.on_event(IngestEvent::ContentRead {
                path: path.to_path_buf(),
                lines: lines.len(),
            });
        }

        if lines.is_empty() {
            self.events.on_event(IngestEvent::EmptyInput {
                path: path.to_path_buf(),
            });
            return match self.relocate(path) {
                Ok(relocated_to) => IngestOutcome::Empty { relocated_to },
                Err(error) => IngestOutcome::RelocateFailed {
                    reports: Vec::new(),
                    failed_reports: Vec::new(),
                    error,
                },
            };
        }

        let shapes = match parse_lines(&lines).collect::<Result<Vec<_>, _>>() {
            Ok(shapes) => shapes,
            Err(source) => {
                let error = ShapeError::Parse {
                    file: path.to_path_buf(),
                    source,
                };
                self.events.on_event(IngestEvent::ParseFailed {
                    path: path.to_path_buf(),
                    error: error.to_string(),
                });
                return IngestOutcome::ParseFailed { error };
            }
        };

        let date = self.options.date_stamp();
        let mut written = Vec::new();
        let mut failed = Vec::new();
        for report in build_reports(shapes) {
            match self.write_report(&report, &date) {
                Ok(dest) => written.push(dest),
                Err(_) => failed.push(report.view()),
            }
        }

        match self.relocate(path) {
            Ok(relocated_to) if failed.is_empty() => IngestOutcome::Processed {
                reports: written,
                relocated_to,
            },
            Ok(relocated_to) => IngestOutcome::Partial {
                reports: written,
                failed_reports: failed,
                relocated_to,
            },
            Err(error) => IngestOutcome::RelocateFailed {
                reports: written,
                failed_reports: failed,
                error,
            },
        }
    }

    /// Wait for the producer to let go, then read and split into lines
    fn read_lines(&self, path: &Path) -> ShapeResult<Vec<String>> {
        self.lock_guard()
            .wait_until_unlocked(path, self.options.lock_wait_seconds)?;
        let bytes = self.store.read(path)?;
        let text = self.options.encoding.decode(&bytes);
        Ok(text.lines().map(str::to_string).collect())
    }

    /// Write one report under a collision-free name in the drop folder
    fn write_report(&self, report: &Report, date: &str) -> ShapeResult<PathBuf> {
        let candidate = self.options.drop_folder.join(report.view().file_name(date));
        let result = self.write_report_at(report, &candidate);
        match &result {
            Ok(dest) => {
                if self.events.wants_detailed_events() {
                    self.events.on_event(IngestEvent::ReportWritten {
                        view: report.view(),
                        path: dest.clone(),
                        entries: report.len(),
                    });
                }
            }
            Err(error) => self.report_failed(report.view(), &candidate, error),
        }
        result
    }

    fn write_report_at(&self, report: &Report, candidate: &Path) -> ShapeResult<PathBuf> {
        self.store.create_dir_all(&self.options.drop_folder)?;
        let dest = UniqueNameResolver::new(&self.store).resolve(candidate);

        let mut body = String::new();
        for line in report.lines() {
            body.push_str(&line);
            body.push_str(LINE_ENDING);
        }
        self.store
            .write_new(&dest, &self.options.encoding.encode(&body))?;
        Ok(dest)
    }

    fn report_failed(&self, view: ReportView, path: &Path, error: &ShapeError) {
        self.events.on_event(IngestEvent::ReportFailed {
            view,
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }

    /// Move the input into the processed folder under a free name
    fn relocate(&self, path: &Path) -> ShapeResult<PathBuf> {
        let result = self.relocate_inner(path);
        match &result {
            Ok(to) => self.events.on_event(IngestEvent::Relocated {
                from: path.to_path_buf(),
                to: to.clone(),
            }),
            Err(error) => self.events.on_event(IngestEvent::RelocateFailed {
                path: path.to_path_buf(),
                error: error.to_string(),
            }),
        }
        result
    }

    fn relocate_inner(&self, path: &Path) -> ShapeResult<PathBuf> {
        self.lock_guard()
            .wait_until_unlocked(path, self.options.lock_wait_seconds)?;

        let folder = self.options.processed_folder();
        self.store.create_dir_all(&folder)?;

        let name = path.file_name().ok_or_else(|| ShapeError::NotFound {
            path: path.to_path_buf(),
        })?;
        let dest = UniqueNameResolver::new(&self.store).resolve(&folder.join(name));
        self.store.rename(path, &dest)?;
        Ok(dest)
    }

    fn lock_guard(&self) -> LockGuard<&F> {
        LockGuard::new(&self.store).with_poll_interval(self.options.poll_interval)
    }
}
