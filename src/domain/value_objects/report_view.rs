//! ReportView value object - the projections written for every batch

use crate::domain::entities::Shape;
use crate::domain::value_objects::ShapeKind;

/// Color selected by the `Purple` view (compared case-insensitively)
pub const PURPLE: &str = "purple";

/// One filtered projection of a sorted batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportView {
    /// Every shape in the batch
    All,
    /// Only triangles
    Triangles,
    /// Only shapes whose color is purple
    Purple,
}

impl ReportView {
    /// Views in the order their reports are written
    pub const ALL: [ReportView; 3] = [ReportView::All, ReportView::Triangles, ReportView::Purple];

    /// Name used as the report file suffix (`{date}_{name}.txt`)
    pub fn name(&self) -> &'static str {
        match self {
            ReportView::All => "All",
            ReportView::Triangles => "Triangles",
            ReportView::Purple => "Purple",
        }
    }

    /// Whether a shape belongs in this view
    pub fn admits(&self, shape: &Shape) -> bool {
        match self {
            ReportView::All => true,
            ReportView::Triangles => shape.kind() == ShapeKind::Triangle,
            ReportView::Purple => shape.color().eq_ignore_ascii_case(PURPLE),
        }
    }

    /// Report file name for a batch processed on `date` (`YYYYMMDD`)
    pub fn file_name(&self, date: &str) -> String {
        format!("{}_{}.txt", date, self.name())
    }
}

impl std::fmt::Display for ReportView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
