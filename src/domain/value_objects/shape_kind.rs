//! ShapeKind value object - the four supported shape families
//!
//! The kind token is the first field of every input line. Matching is
//! case-insensitive; the label is what reports print.

/// The family a shape belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// All kinds, in declaration order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ];

    /// Resolve an input token (`"circle"`, `" Square "`, ...) to a kind
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(token))
    }

    /// Display label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Names of the numeric fields this kind expects, in input order
    pub fn dimension_names(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Rectangle => &["length", "width"],
            ShapeKind::Square => &["length"],
            ShapeKind::Triangle => &["base", "height"],
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_is_case_insensitive() {
        assert_eq!(ShapeKind::from_token("circle"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_token("TRIANGLE"), Some(ShapeKind::Triangle));
        assert_eq!(ShapeKind::from_token("  Square "), Some(ShapeKind::Square));
        assert_eq!(ShapeKind::from_token("rectangle"), Some(ShapeKind::Rectangle));
    }

    #[test]
    fn from_token_rejects_unknown_kinds() {
        assert_eq!(ShapeKind::from_token("hexagon"), None);
        assert_eq!(ShapeKind::from_token(""), None);
    }

    #[test]
    fn dimension_names_match_field_counts() {
        assert_eq!(ShapeKind::Circle.dimension_names().len(), 1);
        assert_eq!(ShapeKind::Square.dimension_names().len(), 1);
        assert_eq!(ShapeKind::Rectangle.dimension_names().len(), 2);
        assert_eq!(ShapeKind::Triangle.dimension_names().len(), 2);
    }
}
