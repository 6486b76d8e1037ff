//! Domain Entities
//!
//! - `Shape` - a parsed input line (geometry + color)
//! - `ReportEntry` - a formatted output line

mod report_entry;
mod shape;

pub use report_entry::{round_area, ReportEntry};
pub use shape::{Geometry, Shape};
