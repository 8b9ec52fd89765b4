use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Point, ShapeGeometry, ShapeType};
use crate::markup::AttributeWriter;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
/// Font sizes at or below zero are raised to this.
pub const MIN_FONT_SIZE: f64 = 1.0;

/// Horizontal alignment of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(TextAnchor::Start),
            "middle" => Ok(TextAnchor::Middle),
            "end" => Ok(TextAnchor::End),
            other => Err(format!("unknown text anchor '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub font_family: String,
    font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub anchor: TextAnchor,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            anchor: TextAnchor::Start,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = if size > 0.0 { size } else { MIN_FONT_SIZE };
    }
}

impl ShapeGeometry for Text {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Text
    }

    fn write_geometry(&self, attrs: &mut AttributeWriter) {
        attrs
            .number("x", self.position.x)
            .number("y", self.position.y)
            .text("font-family", &self.font_family)
            .number("font-size", self.font_size);
        if self.bold {
            attrs.text("font-weight", "bold");
        }
        if self.italic {
            attrs.text("font-style", "italic");
        }
        if self.anchor != TextAnchor::Start {
            attrs.text("text-anchor", self.anchor.as_str());
        }
    }
}
