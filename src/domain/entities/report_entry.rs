//! ReportEntry entity - one line of an output report
//!
//! Reports are display-only. Dimensions are dropped, so a report line
//! cannot be turned back into the shape it came from.

use crate::domain::entities::Shape;

/// A formatted report line: `"{label}, {area}, {color}"`
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    label: &'static str,
    area: f64,
    color: String,
}

impl ReportEntry {
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            label: shape.label(),
            area: round_area(shape.area()),
            color: shape.color().to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Area rounded to two decimals
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.label, self.area, self.color)
    }
}

/// Round to two decimals, ties to even.
pub fn round_area(area: f64) -> f64 {
    (area * 100.0).round_ties_even() / 100.0
}
