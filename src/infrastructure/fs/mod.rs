//! File System Implementations
//!
//! Concrete implementations of the FileStore port.

mod local;

pub use local::LocalFs;
