use serde::{Deserialize, Serialize};

use super::{non_negative, Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx: non_negative(rx),
            ry: non_negative(ry),
        }
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

impl ShapeGeometry for Ellipse {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ellipse
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs
            .number("cx", self.center.x)
            .number("cy", self.center.y)
            .number("rx", self.rx)
            .number("ry", self.ry);
    }
}
