use serde::{Deserialize, Serialize};

use super::{non_negative, Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

/// Axis-aligned rectangle with optional rounded corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub top_left: Point,
    width: f64,
    height: f64,
    rx: f64,
    ry: f64,
}

impl Rectangle {
    pub fn new(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            top_left,
            width: non_negative(width),
            height: non_negative(height),
            rx: 0.0,
            ry: 0.0,
        }
    }

    pub fn with_corner_radii(mut self, rx: f64, ry: f64) -> Self {
        self.set_rx(rx);
        self.set_ry(ry);
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = non_negative(width);
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = non_negative(height);
    }

    pub fn rx(&self) -> f64 {
        self.rx
    }

    pub fn set_rx(&mut self, rx: f64) {
        self.rx = non_negative(rx);
    }

    pub fn ry(&self) -> f64 {
        self.ry
    }

    pub fn set_ry(&mut self, ry: f64) {
        self.ry = non_negative(ry);
    }
}

impl ShapeGeometry for Rectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs
            .number("x", self.top_left.x)
            .number("y", self.top_left.y)
            .number("width", self.width)
            .number("height", self.height);
        // Square corners are the default and are left implicit.
        if self.rx > 0.0 {
            attrs.number("rx", self.rx);
        }
        if self.ry > 0.0 {
            attrs.number("ry", self.ry);
        }
    }
}
