//! Regular polygons and stars.
//!
//! Vertices are computed once, when the shape is built. Moving the center or
//! changing a radius afterwards does not move the vertices; build a new shape
//! to get new geometry.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{non_negative, Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

/// Degrees of the first pentagon vertex (straight up).
pub const PENTAGON_START_ANGLE: f64 = -90.0;
/// Degrees of the first hexagon vertex.
pub const HEXAGON_START_ANGLE: f64 = 0.0;
pub const DEFAULT_STAR_POINTS: u32 = 5;
pub const DEFAULT_STAR_START_ANGLE: f64 = -90.0;

/// `sides` vertices at `radius` from `center`, starting at `start_deg` and
/// stepping by `360 / sides` degrees.
pub fn regular_vertices(center: Point, radius: f64, sides: u32, start_deg: f64) -> Vec<Point> {
    if sides == 0 {
        return Vec::new();
    }
    let start = start_deg.to_radians();
    let step = 2.0 * PI / f64::from(sides);
    (0..sides)
        .map(|i| center.polar_offset(radius, start + step * f64::from(i)))
        .collect()
}

/// `2 * num_points` vertices alternating between the outer and inner radius,
/// starting on the outer radius at `start_deg`. Fewer than two points yields
/// no vertices.
pub fn star_vertices(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    num_points: u32,
    start_deg: f64,
) -> Vec<Point> {
    if num_points < 2 {
        return Vec::new();
    }
    let start = start_deg.to_radians();
    let step = PI / f64::from(num_points);
    // u64 so the vertex count cannot overflow
    (0..u64::from(num_points) * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            center.polar_offset(radius, start + step * i as f64)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pentagon {
    center: Point,
    radius: f64,
    points: Vec<Point>,
}

impl Pentagon {
    pub fn new(center: Point, radius: f64) -> Self {
        let radius = non_negative(radius);
        Self {
            center,
            radius,
            points: regular_vertices(center, radius, 5, PENTAGON_START_ANGLE),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Does not move the existing vertices.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Does not move the existing vertices.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = non_negative(radius);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl ShapeGeometry for Pentagon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Pentagon
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs.points("points", &self.points);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    center: Point,
    radius: f64,
    points: Vec<Point>,
}

impl Hexagon {
    pub fn new(center: Point, radius: f64) -> Self {
        let radius = non_negative(radius);
        Self {
            center,
            radius,
            points: regular_vertices(center, radius, 6, HEXAGON_START_ANGLE),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Does not move the existing vertices.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Does not move the existing vertices.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = non_negative(radius);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl ShapeGeometry for Hexagon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Hexagon
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs.points("points", &self.points);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    num_points: u32,
    /// Degrees.
    start_angle: f64,
    points: Vec<Point>,
}

impl Star {
    pub fn new(
        center: Point,
        outer_radius: f64,
        inner_radius: f64,
        num_points: u32,
        start_angle: f64,
    ) -> Self {
        let outer_radius = non_negative(outer_radius);
        let inner_radius = non_negative(inner_radius);
        Self {
            center,
            outer_radius,
            inner_radius,
            num_points,
            start_angle,
            points: star_vertices(center, outer_radius, inner_radius, num_points, start_angle),
        }
    }

    /// A five-pointed star with its first point straight up.
    pub fn five_pointed(center: Point, outer_radius: f64, inner_radius: f64) -> Self {
        Self::new(
            center,
            outer_radius,
            inner_radius,
            DEFAULT_STAR_POINTS,
            DEFAULT_STAR_START_ANGLE,
        )
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Does not move the existing vertices.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Does not move the existing vertices.
    pub fn set_outer_radius(&mut self, radius: f64) {
        self.outer_radius = non_negative(radius);
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Does not move the existing vertices.
    pub fn set_inner_radius(&mut self, radius: f64) {
        self.inner_radius = non_negative(radius);
    }

    pub fn num_points(&self) -> u32 {
        self.num_points
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl ShapeGeometry for Star {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Star
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs.points("points", &self.points);
    }
}
