//! Ingest Outcome

use std::path::PathBuf;

use crate::domain::value_objects::ReportView;
use crate::error::ShapeError;

/// What happened to one input file
#[derive(Debug)]
pub enum IngestOutcome {
    /// All reports written and the input moved
    Processed {
        reports: Vec<PathBuf>,
        relocated_to: PathBuf,
    },

    /// Some reports failed; the input was moved anyway
    Partial {
        reports: Vec<PathBuf>,
        failed_reports: Vec<ReportView>,
        relocated_to: PathBuf,
    },

    /// Input had no lines; moved without writing reports
    Empty { relocated_to: PathBuf },

    /// Input could not be read; left in place
    ReadFailed { error: ShapeError },

    /// A line did not parse; nothing written, input left in place
    ParseFailed { error: ShapeError },

    /// Reports were attempted but the input could not be moved
    RelocateFailed {
        reports: Vec<PathBuf>,
        failed_reports: Vec<ReportView>,
        error: ShapeError,
    },
}

impl IngestOutcome {
    /// Short machine-readable name of the outcome
    pub fn status(&self) -> &'static str {
        match self {
            IngestOutcome::Processed { .. } => "processed",
            IngestOutcome::Partial { .. } => "partial",
            IngestOutcome::Empty { .. } => "empty",
            IngestOutcome::ReadFailed { .. } => "read_failed",
            IngestOutcome::ParseFailed { .. } => "parse_failed",
            IngestOutcome::RelocateFailed { .. } => "relocate_failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            IngestOutcome::Processed { .. } | IngestOutcome::Empty { .. }
        )
    }

    /// Report files written during the pass
    pub fn reports(&self) -> &[PathBuf] {
        match self {
            IngestOutcome::Processed { reports, .. }
            | IngestOutcome::Partial { reports, .. }
            | IngestOutcome::RelocateFailed { reports, .. } => reports,
            _ => &[],
        }
    }

    /// Where the input ended up, if it was moved
    pub fn relocated_to(&self) -> Option<&PathBuf> {
        match self {
            IngestOutcome::Processed { relocated_to, .. }
            | IngestOutcome::Partial { relocated_to, .. }
            | IngestOutcome::Empty { relocated_to } => Some(relocated_to),
            _ => None,
        }
    }

    /// The error that stopped the pass, if any
    pub fn error(&self) -> Option<&ShapeError> {
        match self {
            IngestOutcome::ReadFailed { error }
            | IngestOutcome::ParseFailed { error }
            | IngestOutcome::RelocateFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}
