//! Report builder - sorts a batch and projects it into the report views

use std::cmp::Ordering;

use crate::domain::entities::{ReportEntry, Shape};
use crate::domain::value_objects::ReportView;

/// The formatted entries of one view
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    view: ReportView,
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn view(&self) -> ReportView {
        self.view
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report body, one entry per line
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

/// Order by area, then color. Colors compare case-insensitively first so
/// `blue` sorts next to `Blue`; when only case differs, lowercase comes first.
pub fn compare_shapes(a: &Shape, b: &Shape) -> Ordering {
    a.area()
        .total_cmp(&b.area())
        .then_with(|| compare_colors(a.color(), b.color()))
}

fn compare_colors(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

/// Stable sort; equal shapes keep their input order.
pub fn sort_batch(shapes: &mut [Shape]) {
    shapes.sort_by(compare_shapes);
}

/// Sort a batch and build every view, in `ReportView::ALL` order.
pub fn build_reports(mut shapes: Vec<Shape>) -> Vec<Report> {
    sort_batch(&mut shapes);

    ReportView::ALL
        .into_iter()
        .map(|view| Report {
            view,
            entries: shapes
                .iter()
                .filter(|shape| view.admits(shape))
                .map(ReportEntry::from_shape)
                .collect(),
        })
        .collect()
}
