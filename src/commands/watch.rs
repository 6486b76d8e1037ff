use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use shapewatch::{IngestOptions, IngestUseCase, LocalFs, WatchOptions, WatchUseCase};

use super::{event_sink, load_config, GlobalArgs};

/// `watch` flags; each one overrides its config/env value
#[derive(Debug, Clone, Default)]
pub struct WatchArgs {
    pub folder: Option<PathBuf>,
    pub extension: Option<String>,
    pub drop: Option<PathBuf>,
    pub lock_wait: Option<u64>,
    pub process_existing: bool,
}

pub fn cmd_watch(globals: &GlobalArgs, args: WatchArgs) -> Result<()> {
    let mut config = load_config(globals)?.config;
    if let Some(folder) = args.folder {
        config.watch.folder = Some(folder);
    }
    if let Some(extension) = args.extension {
        config.watch.extension = extension;
    }
    if let Some(drop) = args.drop {
        config.drop.folder = Some(drop);
    }
    if let Some(seconds) = args.lock_wait {
        config.watch.lock_wait_seconds = seconds;
    }

    let ingest_options = IngestOptions::from_config(&config)?;
    let store = LocalFs::new();
    store
        .ensure_dir(&ingest_options.watch_folder)
        .with_context(|| {
            format!(
                "cannot use watch folder {}",
                ingest_options.watch_folder.display()
            )
        })?;

    let options = WatchOptions::new(&ingest_options.watch_folder)
        .with_pattern(&config.watch.extension)
        .with_process_existing(args.process_existing);
    let events = event_sink(globals, &config, "watch");
    let ingest = IngestUseCase::new(store, events.clone(), ingest_options);
    let use_case = WatchUseCase::new(ingest, options, events);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let summary = use_case.start(running)?;

    if !globals.json {
        eprintln!(
            "Stopped after {} file(s): {} processed, {} failed",
            summary.detected, summary.succeeded, summary.failed
        );
    }
    Ok(())
}
