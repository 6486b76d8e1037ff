//! Value Objects
//!
//! Immutable types that are defined by their attributes rather than identity.

mod report_view;
mod shape_kind;
mod text_encoding;

pub use report_view::{ReportView, PURPLE};
pub use shape_kind::ShapeKind;
pub use text_encoding::TextEncoding;
