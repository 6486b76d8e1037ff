//! Domain Services
//!
//! Stateless logic over domain entities. Services that need the filesystem
//! reach it only through the `FileStore` port.

pub mod line_parser;
pub mod lock_guard;
pub mod name_resolver;
pub mod report;

pub use line_parser::{parse_line, parse_lines, LineParseError, ShapeLines};
pub use lock_guard::{LockGuard, POLLS_PER_SECOND, POLL_INTERVAL};
pub use name_resolver::{strip_counter_suffix, UniqueNameResolver};
pub use report::{build_reports, compare_shapes, sort_batch, Report};
