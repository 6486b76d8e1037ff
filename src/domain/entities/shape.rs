//! Shape entity - one parsed line of an input file
//!
//! A shape is a geometry plus an opaque color string. The geometry is a
//! closed enum so every area formula is checked for exhaustiveness.

use std::f64::consts::PI;

use crate::domain::value_objects::ShapeKind;

/// Dimensions of a shape, one variant per kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { radius: f64 },
    Rectangle { length: f64, width: f64 },
    /// A rectangle with equal sides, reported under its own label
    Square { length: f64 },
    Triangle { base: f64, height: f64 },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Square { .. } => ShapeKind::Square,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Geometry::Circle { radius } => PI * radius * radius,
            Geometry::Rectangle { length, width } => length * width,
            Geometry::Square { length } => length * length,
            Geometry::Triangle { base, height } => 0.5 * base * height,
        }
    }
}

/// A colored shape from an input batch
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    color: String,
}

impl Shape {
    pub fn new(geometry: Geometry, color: impl Into<String>) -> Self {
        Self {
            geometry,
            color: color.into(),
        }
    }

    pub fn circle(radius: f64, color: impl Into<String>) -> Self {
        Self::new(Geometry::Circle { radius }, color)
    }

    pub fn rectangle(length: f64, width: f64, color: impl Into<String>) -> Self {
        Self::new(Geometry::Rectangle { length, width }, color)
    }

    pub fn square(length: f64, color: impl Into<String>) -> Self {
        Self::new(Geometry::Square { length }, color)
    }

    pub fn triangle(base: f64, height: f64, color: impl Into<String>) -> Self {
        Self::new(Geometry::Triangle { base, height }, color)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Color as written in the input (case preserved)
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Report label (`Circle`, `Rectangle`, `Square`, `Triangle`)
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn area(&self) -> f64 {
        self.geometry.area()
    }
}
