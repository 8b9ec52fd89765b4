//! Markup output.

use super::SVG_NAMESPACE;
use crate::color::Color;
use crate::geometry::Point;
use crate::model::{Shape, ShapeElement, ShapeStyle};
use quick_xml::escape::escape;
use std::fmt;

/// Formats a number the shortest way that reads back to the same value.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Accumulates ` name="value"` pairs for one start tag.
#[derive(Debug, Default)]
pub struct AttributeWriter {
    out: String,
    names: Vec<String>,
}

impl AttributeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(&mut self, name: &str, value: f64) -> &mut Self {
        self.raw(name, &format_number(value))
    }

    /// Writes a free-form value, escaping markup characters.
    pub fn text(&mut self, name: &str, value: &str) -> &mut Self {
        let escaped = escape(value);
        self.raw(name, &escaped)
    }

    pub fn points(&mut self, name: &str, points: &[Point]) -> &mut Self {
        let joined = points
            .iter()
            .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.raw(name, &joined)
    }

    /// Whether `name` has been written already.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn raw(&mut self, name: &str, value: &str) -> &mut Self {
        self.names.push(name.to_string());
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(value);
        self.out.push('"');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl fmt::Display for AttributeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// Writes the attributes every kind shares, in their fixed order.
fn write_style(style: &ShapeStyle, fill_override: Option<&str>, attrs: &mut AttributeWriter) {
    if let Some(id) = style.id.as_deref().filter(|id| !id.is_empty()) {
        attrs.text("id", id);
    }
    attrs.raw("stroke", &style.stroke.to_string());
    attrs.number("stroke-width", style.stroke_width());
    match fill_override {
        Some(fill) => attrs.raw("fill", fill),
        None => attrs.raw("fill", &style.fill.to_paint_string()),
    };
    if style.opacity() < 1.0 {
        attrs.number("opacity", style.opacity());
    }
    if !style.transform.is_empty() {
        attrs.text("transform", style.transform.as_str());
    }
    for (name, value) in style.extensions() {
        // geometry attributes of this kind take precedence
        if !attrs.contains(name) {
            attrs.text(name, &value.to_string());
        }
    }
}

/// Serializes one element as a single-line fragment.
pub fn element_markup(element: &ShapeElement) -> String {
    let mut attrs = AttributeWriter::new();
    element.shape.write_geometry(&mut attrs);

    let fill_override = match element.shape {
        Shape::Polyline(_) => Some("none"),
        _ => None,
    };
    write_style(&element.style, fill_override, &mut attrs);

    match &element.shape {
        Shape::Text(text) => format!("<text{}>{}</text>", attrs, escape(text.content.as_str())),
        shape => format!("<{}{} />", shape.shape_type().tag(), attrs),
    }
}

/// Serializes a whole document.
///
/// The background rectangle is only written when the background is neither
/// opaque white nor fully transparent.
pub fn document_markup<'a>(
    width: f64,
    height: f64,
    background: Color,
    elements: impl IntoIterator<Item = &'a ShapeElement>,
) -> String {
    let mut out = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"{}\">\n",
        format_number(width),
        format_number(height),
        SVG_NAMESPACE
    );

    if background != Color::WHITE && !background.is_transparent() {
        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" />\n",
            background
        ));
    }

    for element in elements {
        out.push_str("  ");
        out.push_str(&element_markup(element));
        out.push('\n');
    }

    out.push_str("</svg>");
    out
}
