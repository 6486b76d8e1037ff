//! Line parser - turns input lines into shapes
//!
//! Input lines are comma separated: the kind token first, then the
//! dimensions the kind needs, then the color. Fields are trimmed. Extra
//! trailing fields are ignored.
//!
//! A single bad line invalidates the whole batch, so `parse_lines` yields
//! `Result`s that callers collect into `Result<Vec<Shape>, _>`; collection
//! stops at the first error.

use thiserror::Error;

use crate::domain::entities::{Geometry, Shape};
use crate::domain::value_objects::ShapeKind;

/// Why a line could not be turned into a shape
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineParseError {
    #[error("line {line}: shape '{token}' is not supported")]
    UnknownKind { line: usize, token: String },

    #[error("line {line}: {kind} is missing its {field}")]
    MissingField {
        line: usize,
        kind: ShapeKind,
        field: &'static str,
    },

    #[error("line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {field} '{value}' must be a finite, non-negative number")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl LineParseError {
    /// 1-based number of the offending line
    pub fn line(&self) -> usize {
        match self {
            LineParseError::UnknownKind { line, .. }
            | LineParseError::MissingField { line, .. }
            | LineParseError::InvalidNumber { line, .. }
            | LineParseError::OutOfRange { line, .. } => *line,
        }
    }
}

/// Parse one input line. `line` is the 1-based line number used in errors.
pub fn parse_line(line: usize, text: &str) -> Result<Shape, LineParseError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let token = fields[0];

    let kind = ShapeKind::from_token(token).ok_or_else(|| LineParseError::UnknownKind {
        line,
        token: token.to_string(),
    })?;

    let fields = Fields {
        line,
        kind,
        values: &fields[1..],
    };

    let (geometry, color) = match kind {
        ShapeKind::Circle => (
            Geometry::Circle {
                radius: fields.number(0, "radius")?,
            },
            fields.text(1, "color")?,
        ),
        ShapeKind::Rectangle => (
            Geometry::Rectangle {
                length: fields.number(0, "length")?,
                width: fields.number(1, "width")?,
            },
            fields.text(2, "color")?,
        ),
        ShapeKind::Square => (
            Geometry::Square {
                length: fields.number(0, "length")?,
            },
            fields.text(1, "color")?,
        ),
        ShapeKind::Triangle => (
            Geometry::Triangle {
                base: fields.number(0, "base")?,
                height: fields.number(1, "height")?,
            },
            fields.text(2, "color")?,
        ),
    };

    Ok(Shape::new(geometry, color))
}

/// Fields following the kind token on one line
struct Fields<'a> {
    line: usize,
    kind: ShapeKind,
    values: &'a [&'a str],
}

impl<'a> Fields<'a> {
    fn text(&self, index: usize, field: &'static str) -> Result<&'a str, LineParseError> {
        self.values
            .get(index)
            .copied()
            .ok_or(LineParseError::MissingField {
                line: self.line,
                kind: self.kind,
                field,
            })
    }

    fn number(&self, index: usize, field: &'static str) -> Result<f64, LineParseError> {
        let raw = self.text(index, field)?;
        let value: f64 = raw.parse().map_err(|_| LineParseError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        })?;

        if !value.is_finite() || value < 0.0 {
            return Err(LineParseError::OutOfRange {
                line: self.line,
                field,
                value: raw.to_string(),
            });
        }

        // "-0" parses to negative zero
        Ok(if value == 0.0 { 0.0 } else { value })
    }
}

/// Lazily parse lines in order, numbering them from 1
pub fn parse_lines<I>(lines: I) -> ShapeLines<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ShapeLines {
        lines: lines.into_iter(),
        number: 0,
    }
}

/// Iterator returned by [`parse_lines`]
pub struct ShapeLines<I> {
    lines: I,
    number: usize,
}

impl<I> Iterator for ShapeLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Shape, LineParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.number += 1;
        Some(parse_line(self.number, text.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}
