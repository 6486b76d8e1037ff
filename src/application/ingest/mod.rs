//! Ingest Use Case
//!
//! Turns one input file into the three dated reports and moves the input
//! out of the watched folder.
//!
//! ## Structure
//!
//! - `options.rs` - Folders, wait budget, encoding and batch date
//! - `outcome.rs` - What happened to one input file
//! - `use_case.rs` - The read / parse / write / relocate flow
//! - `tests.rs` - Unit tests

mod options;
mod outcome;
mod use_case;


pub use options::{IngestOptions, LINE_ENDING};
pub use outcome::IngestOutcome;
pub use use_case::IngestUseCase;
