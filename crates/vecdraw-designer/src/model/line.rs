use serde::{Deserialize, Serialize};

use super::{Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl ShapeGeometry for Line {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs
            .number("x1", self.start.x)
            .number("y1", self.start.y)
            .number("x2", self.end.x)
            .number("y2", self.end.y);
    }
}
