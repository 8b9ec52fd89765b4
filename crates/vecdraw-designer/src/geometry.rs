//! Points and the transform-operation accumulator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point at `radius` from `self` in direction `angle` (radians).
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// An append-only list of transform operations.
///
/// Operations are kept as the literal text they serialize to and are never
/// composed algebraically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transform {
    operations: String,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing transform attribute value verbatim.
    pub fn from_markup(text: &str) -> Self {
        Self {
            operations: text.trim().to_string(),
        }
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.push(format!("translate({},{})", tx, ty));
        self
    }

    /// Appends a rotation in degrees, optionally about `center`.
    pub fn rotate(&mut self, angle: f64, center: Option<Point>) -> &mut Self {
        let op = match center {
            Some(c) => format!("rotate({},{},{})", angle, c.x, c.y),
            None => format!("rotate({})", angle),
        };
        self.push(op);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.operations
    }

    fn push(&mut self, op: String) {
        if !self.operations.is_empty() {
            self.operations.push(' ');
        }
        self.operations.push_str(&op);
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operations)
    }
}
