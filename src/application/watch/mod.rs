//! Watch Use Case
//!
//! Watches one folder (non-recursively, via the `notify` crate) and hands
//! every new input file to the ingest use case, one at a time, once its
//! writer is done with it.
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main loop, runs until the shared `running` flag drops
//! - `FilePattern` - Which file names count as input
//! - `WatchAction` - A `notify` event reduced to what the loop acts on
//! - `PendingArrivals` - Arrivals held back until they settle
//!
//! ## Usage
//!
//! ```ignore
//! let ingest = IngestUseCase::new(LocalFs::new(), events.clone(), ingest_options);
//! let watch = WatchUseCase::new(ingest, WatchOptions::new(folder), events);
//! watch.start(running)?;
//! ```

mod event;
mod pattern;
mod use_case;


pub use event::{
    classify, PendingArrivals, WatchAction, WatchOptions, WatchSummary, DEBOUNCE_MS,
    REPORTS_CLOSE_WRITE, STALL_TIMEOUT_MS,
};
pub use pattern::FilePattern;
pub use use_case::{WatchUseCase, RECV_TIMEOUT};
