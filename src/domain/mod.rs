//! Domain Layer
//!
//! The shape model and the pure rules of the ingestion pipeline.
//!
//! ## Structure
//!
//! - `entities/` - Shape, ReportEntry
//! - `value_objects/` - ShapeKind, ReportView, TextEncoding
//! - `services/` - line parser, lock guard, unique-name resolver, report builder
//! - `ports/` - FileStore and IngestEventSink interfaces
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - filesystem access goes through the `FileStore` port
//! 2. **Errors are values** - every failure is a typed `Result`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
