use serde::{Deserialize, Serialize};

use super::{non_negative, Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: non_negative(radius),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = non_negative(radius);
    }
}

impl ShapeGeometry for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs
            .number("cx", self.center.x)
            .number("cy", self.center.y)
            .number("r", self.radius);
    }
}
