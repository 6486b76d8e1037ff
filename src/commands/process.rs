use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use shapewatch::{IngestOptions, IngestOutcome, IngestUseCase, LocalFs};

use super::{event_sink, load_config, GlobalArgs};

/// Ingest one file. The file's own folder plays the watch folder, so it
/// moves into `Processed` next to where it was.
pub fn cmd_process(
    globals: &GlobalArgs,
    file: &Path,
    drop: Option<PathBuf>,
    lock_wait: Option<u64>,
) -> Result<()> {
    let mut config = load_config(globals)?.config;
    config.watch.folder = Some(IngestOptions::watch_folder_of(file));
    if let Some(drop) = drop {
        config.drop.folder = Some(drop);
    }
    if let Some(seconds) = lock_wait {
        config.watch.lock_wait_seconds = seconds;
    }

    let options = IngestOptions::from_config(&config)?;
    let events = event_sink(globals, &config, "process");
    let outcome = IngestUseCase::new(LocalFs::new(), events, options).process(file);

    if !globals.json {
        for report in outcome.reports() {
            println!("{}", report.display());
        }
    }

    match outcome {
        IngestOutcome::Processed { .. } | IngestOutcome::Empty { .. } => Ok(()),
        IngestOutcome::Partial { failed_reports, .. } => {
            let names: Vec<&str> = failed_reports.iter().map(|v| v.name()).collect();
            bail!(
                "{}: reports not written: {}",
                file.display(),
                names.join(", ")
            )
        }
        IngestOutcome::ReadFailed { error }
        | IngestOutcome::ParseFailed { error }
        | IngestOutcome::RelocateFailed { error, .. } => Err(error.into()),
    }
}
