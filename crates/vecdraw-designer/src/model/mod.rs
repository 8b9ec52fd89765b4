//! Shape model.
//!
//! Every element is a [`ShapeElement`]: a [`ShapeStyle`] with the attributes
//! all kinds share, plus a [`Shape`] carrying the kind-specific geometry.
//! Adding a kind means adding a [`Shape`] variant; every `match` over it is
//! then checked by the compiler.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod polygon;
pub mod rectangle;
pub mod regular;
pub mod text;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::{Polygon, Polyline};
pub use rectangle::Rectangle;
pub use regular::{Hexagon, Pentagon, Star};
pub use text::{Text, TextAnchor};

use crate::color::Color;
use crate::geometry::Transform;
use crate::markup::writer::{self, AttributeWriter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use crate::geometry::Point;

/// Clamps to `[0, +inf)`, mapping NaN to 0.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Value of an extension attribute that has no dedicated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    String(String),
    Float(f64),
    Integer(i64),
}

impl AttributeValue {
    /// Reads an imported attribute: numeric text becomes a float.
    pub fn from_markup(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => AttributeValue::Float(v),
            _ => AttributeValue::String(text.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            AttributeValue::Integer(v) => Some(*v as f64),
            AttributeValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

/// Attribute names [`ShapeStyle`] writes itself.
const STYLE_ATTRIBUTES: [&str; 6] = [
    "id",
    "stroke",
    "stroke-width",
    "fill",
    "opacity",
    "transform",
];

/// An XML attribute name that does not collide with a shared attribute.
fn is_extension_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        && !STYLE_ATTRIBUTES.contains(&name)
        && name != "xmlns"
        && !name.starts_with("xmlns:")
}

/// Attributes shared by every shape kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub id: Option<String>,
    pub stroke: Color,
    stroke_width: f64,
    pub fill: Color,
    pub transform: Transform,
    opacity: f64,
    extensions: BTreeMap<String, AttributeValue>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            id: None,
            stroke: Color::BLACK,
            stroke_width: 1.0,
            fill: Color::TRANSPARENT,
            transform: Transform::default(),
            opacity: 1.0,
            extensions: BTreeMap::new(),
        }
    }
}

impl ShapeStyle {
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = non_negative(width);
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Clamps to `[0, 1]`; NaN leaves the element fully opaque.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    pub fn extensions(&self) -> &BTreeMap<String, AttributeValue> {
        &self.extensions
    }

    pub fn extension(&self, name: &str) -> Option<&AttributeValue> {
        self.extensions.get(name)
    }

    /// Stores an extra attribute. Returns false, storing nothing, when `name`
    /// is not a valid attribute name or is one of the shared attributes.
    pub fn set_extension(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> bool {
        let name = name.into();
        if !is_extension_name(&name) {
            return false;
        }
        self.extensions.insert(name, value.into());
        true
    }

    pub fn remove_extension(&mut self, name: &str) -> Option<AttributeValue> {
        self.extensions.remove(name)
    }
}

/// Shape kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
    Pentagon,
    Hexagon,
    Star,
    Text,
}

impl ShapeType {
    /// Human-readable kind name used in command descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeType::Line => "Line",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Polygon => "Polygon",
            ShapeType::Polyline => "Polyline",
            ShapeType::Pentagon => "Pentagon",
            ShapeType::Hexagon => "Hexagon",
            ShapeType::Star => "Star",
            ShapeType::Text => "Text",
        }
    }

    /// Markup tag the kind serializes to.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeType::Line => "line",
            ShapeType::Rectangle => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Polygon | ShapeType::Pentagon | ShapeType::Hexagon | ShapeType::Star => {
                "polygon"
            }
            ShapeType::Polyline => "polyline",
            ShapeType::Text => "text",
        }
    }

    /// Prefix for identifiers generated by a document.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ShapeType::Line => "line",
            ShapeType::Rectangle => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Polygon => "polygon",
            ShapeType::Polyline => "polyline",
            ShapeType::Pentagon => "pentagon",
            ShapeType::Hexagon => "hexagon",
            ShapeType::Star => "star",
            ShapeType::Text => "text",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind-specific geometry that writes its own markup attributes.
pub trait ShapeGeometry {
    fn shape_type(&self) -> ShapeType;

    /// Writes the geometry attributes under their canonical names.
    fn write_geometry(&self, attrs: &mut AttributeWriter);
}

/// Kind-specific geometry of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Polyline(Polyline),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
    Star(Star),
    Text(Text),
}

impl Shape {
    fn geometry(&self) -> &dyn ShapeGeometry {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Polygon(s) => s,
            Shape::Polyline(s) => s,
            Shape::Pentagon(s) => s,
            Shape::Hexagon(s) => s,
            Shape::Star(s) => s,
            Shape::Text(s) => s,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.geometry().shape_type()
    }

    pub fn write_geometry(&self, attrs: &mut AttributeWriter) {
        self.geometry().write_geometry(attrs)
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// One serializable element of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub style: ShapeStyle,
    pub shape: Shape,
}

impl ShapeElement {
    /// Creates an element with the default style for its kind.
    ///
    /// Text defaults to a black fill with no stroke; every other kind to a
    /// 1-unit black stroke with no fill.
    pub fn new(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let mut style = ShapeStyle::default();
        if matches!(shape, Shape::Text(_)) {
            style.fill = Color::BLACK;
            style.stroke = Color::TRANSPARENT;
            style.set_stroke_width(0.0);
        }
        Self { style, shape }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.style.id = Some(id.into());
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.style.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Color, width: f64) -> Self {
        self.style.stroke = stroke;
        self.style.set_stroke_width(width);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.style.id.as_deref()
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Serializes this element as one markup fragment.
    pub fn to_markup(&self) -> String {
        writer::element_markup(self)
    }
}

macro_rules! impl_into_shape {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(value: $variant) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_into_shape!(
    Line, Rectangle, Circle, Ellipse, Polygon, Polyline, Pentagon, Hexagon, Star, Text,
);
