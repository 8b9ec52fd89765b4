use serde::{Deserialize, Serialize};

use super::{Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

/// Closed shape through an ordered list of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl ShapeGeometry for Polygon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs.points("points", &self.points);
    }
}

/// Open path through an ordered list of points. Always written unfilled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl ShapeGeometry for Polyline {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polyline
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs.points("points", &self.points);
    }
}
