//! Property tests for shapewatch.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "sorting is total".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/line_parser.rs"]
mod line_parser;

#[path = "properties/name_resolver.rs"]
mod name_resolver;

#[path = "properties/report_order.rs"]
mod report_order;
