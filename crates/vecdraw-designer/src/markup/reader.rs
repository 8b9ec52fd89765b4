//! Markup import.
//!
//! Reads the root `svg` size, an optional full-canvas background rectangle,
//! and one element per recognized shape tag. `g` elements are flattened into
//! their children. Children of any other element are skipped. Missing or
//! unreadable geometry defaults to 0; malformed XML fails the whole import.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};
use vecdraw_core::MarkupError;

use crate::color::Color;
use crate::geometry::{Point, Transform};
use crate::model::text::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use crate::model::{
    AttributeValue, Circle, Ellipse, Line, Polygon, Polyline, Rectangle, Shape, ShapeElement,
    Text, TextAnchor,
};

/// Result of importing a markup document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Root width, when present and readable.
    pub width: Option<f64>,
    /// Root height, when present and readable.
    pub height: Option<f64>,
    /// Fill of a leading full-canvas rectangle.
    pub background: Option<Color>,
    pub elements: Vec<ShapeElement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Root,
    Group,
    Text,
    Skipped,
}

#[derive(Debug)]
struct Frame {
    name: String,
    kind: FrameKind,
}

/// Attribute list of one start tag, consumed as fields are recognized.
struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    fn read(start: &BytesStart<'_>, element: &str) -> Result<Self, MarkupError> {
        let mut pairs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| MarkupError::InvalidAttribute {
                element: element.to_string(),
                reason: e.to_string(),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            pairs.push((key, value));
        }
        Ok(Self { pairs })
    }

    fn take(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(key, _)| key == name)?;
        Some(self.pairs.remove(index).1)
    }

    fn peek(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// A geometric attribute, 0 when missing or unreadable.
    fn length(&mut self, name: &str) -> f64 {
        self.take(name).and_then(|v| parse_length(&v)).unwrap_or(0.0)
    }

    fn into_extensions(self) -> impl Iterator<Item = (String, AttributeValue)> {
        self.pairs
            .into_iter()
            .filter(|(key, _)| key != "xmlns" && !key.starts_with("xmlns:"))
            .map(|(key, value)| {
                let value = AttributeValue::from_markup(&value);
                (key, value)
            })
    }
}

/// Reads a number with an optional `px` suffix.
pub fn parse_length(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix("px").unwrap_or(text).trim_end();
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads `x,y x,y ...`, skipping pairs that are not two numbers.
pub fn parse_points(text: &str) -> Vec<Point> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    tokens
        .chunks_exact(2)
        .filter_map(|pair| {
            let x = pair[0].parse::<f64>().ok()?;
            let y = pair[1].parse::<f64>().ok()?;
            Some(Point::new(x, y))
        })
        .collect()
}

/// Fill of a rectangle written as the document background: `width` and
/// `height` of `100%` and a `fill`, with nothing else.
fn background_fill(attrs: &Attributes) -> Option<&str> {
    let full = |name: &str| attrs.peek(name).is_some_and(|v| v.trim() == "100%");
    if attrs.pairs.len() != 3 || !full("width") || !full("height") {
        return None;
    }
    attrs.peek("fill")
}

fn is_bold(weight: &str) -> bool {
    match weight.trim() {
        "bold" | "bolder" => true,
        other => other.parse::<u32>().is_ok_and(|n| n >= 600),
    }
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

/// Builds the geometry for a recognized tag, or `None` when the tag is not a
/// shape or its point list is too short.
fn build_shape(name: &str, attrs: &mut Attributes) -> Option<Shape> {
    let shape: Shape = match name {
        "line" => Line::new(
            Point::new(attrs.length("x1"), attrs.length("y1")),
            Point::new(attrs.length("x2"), attrs.length("y2")),
        )
        .into(),
        "rect" => {
            let top_left = Point::new(attrs.length("x"), attrs.length("y"));
            let (width, height) = (attrs.length("width"), attrs.length("height"));
            Rectangle::new(top_left, width, height)
                .with_corner_radii(attrs.length("rx"), attrs.length("ry"))
                .into()
        }
        "circle" => Circle::new(
            Point::new(attrs.length("cx"), attrs.length("cy")),
            attrs.length("r"),
        )
        .into(),
        "ellipse" => Ellipse::new(
            Point::new(attrs.length("cx"), attrs.length("cy")),
            attrs.length("rx"),
            attrs.length("ry"),
        )
        .into(),
        "polygon" => {
            let points = parse_points(&attrs.take("points").unwrap_or_default());
            if points.len() < 3 {
                warn!("Skipping polygon with {} points", points.len());
                return None;
            }
            Polygon::from_points(points).into()
        }
        "polyline" => {
            let points = parse_points(&attrs.take("points").unwrap_or_default());
            if points.len() < 2 {
                warn!("Skipping polyline with {} points", points.len());
                return None;
            }
            Polyline::from_points(points).into()
        }
        "text" => {
            let mut text = Text::new(Point::new(attrs.length("x"), attrs.length("y")), "");
            text.font_family = attrs
                .take("font-family")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
            text.set_font_size(
                attrs
                    .take("font-size")
                    .and_then(|v| parse_length(&v))
                    .unwrap_or(DEFAULT_FONT_SIZE),
            );
            text.bold = attrs.take("font-weight").is_some_and(|w| is_bold(&w));
            text.italic = attrs
                .take("font-style")
                .is_some_and(|s| matches!(s.trim(), "italic" | "oblique"));
            text.anchor = attrs
                .take("text-anchor")
                .and_then(|a| a.parse::<TextAnchor>().ok())
                .unwrap_or_default();
            text.into()
        }
        _ => return None,
    };
    Some(shape)
}

/// Builds a complete element: geometry, shared attributes, extensions.
fn build_element(name: &str, mut attrs: Attributes) -> Option<ShapeElement> {
    let shape = build_shape(name, &mut attrs)?;
    let mut element = ShapeElement::new(shape);
    let style = &mut element.style;

    if let Some(id) = attrs.take("id").filter(|id| !id.is_empty()) {
        style.id = Some(id);
    }
    if let Some(fill) = attrs.take("fill") {
        style.fill = Color::parse(&fill);
    }
    if let Some(stroke) = attrs.take("stroke") {
        style.stroke = Color::parse(&stroke);
    }
    if let Some(width) = attrs.take("stroke-width").and_then(|v| parse_length(&v)) {
        style.set_stroke_width(width);
    }
    if let Some(opacity) = attrs.take("opacity").and_then(|v| v.trim().parse::<f64>().ok()) {
        style.set_opacity(opacity);
    }
    if let Some(transform) = attrs.take("transform") {
        style.transform = Transform::from_markup(&transform);
    }
    for (key, value) in attrs.into_extensions() {
        if !style.set_extension(key.clone(), value) {
            debug!("Dropping attribute '{}' on <{}>", key, name);
        }
    }

    Some(element)
}

/// Imports a whole markup document.
///
/// A leading rectangle in the exact form the writer uses for the background
/// sets the background color instead of becoming an element.
pub fn parse_document(text: &str) -> Result<ParsedDocument, MarkupError> {
    let mut reader = Reader::from_str(text);
    let mut parsed = ParsedDocument::default();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root_done = false;
    let mut root_children = 0usize;
    let mut pending_text: Option<(ShapeElement, String)> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let (start, is_empty) = match reader.read_event_into(&mut buf)? {
            Event::Start(e) => (e.into_owned(), false),
            Event::Empty(e) => (e.into_owned(), true),
            Event::End(_) => {
                if let Some(frame) = stack.pop() {
                    if frame.kind == FrameKind::Text {
                        if let Some((mut element, content)) = pending_text.take() {
                            if let Some(text) = element.shape.as_text_mut() {
                                text.content = content;
                            }
                            parsed.elements.push(element);
                        }
                    }
                }
                if stack.is_empty() {
                    root_done = true;
                }
                continue;
            }
            Event::Text(e) => {
                if let Some((_, content)) = pending_text.as_mut() {
                    content.push_str(&e.unescape().map_err(quick_xml::Error::from)?);
                }
                continue;
            }
            Event::CData(e) => {
                if let Some((_, content)) = pending_text.as_mut() {
                    content.push_str(&String::from_utf8_lossy(&e));
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        let name = local_name(&start);

        let Some(parent) = stack.last().map(|f| f.kind) else {
            if root_done {
                return Err(MarkupError::TrailingContent { name });
            }
            if name != "svg" {
                return Err(MarkupError::UnexpectedRoot { found: name });
            }
            let attrs = Attributes::read(&start, &name)?;
            parsed.width = read_root_dimension(&attrs, "width");
            parsed.height = read_root_dimension(&attrs, "height");
            if is_empty {
                root_done = true;
            } else {
                stack.push(Frame {
                    name,
                    kind: FrameKind::Root,
                });
            }
            continue;
        };

        let kind = match parent {
            FrameKind::Root | FrameKind::Group => {
                let attrs = Attributes::read(&start, &name)?;
                let first_child = parent == FrameKind::Root && root_children == 0;
                if parent == FrameKind::Root {
                    root_children += 1;
                }

                if first_child && name == "rect" {
                    if let Some(fill) = background_fill(&attrs) {
                        debug!("Using full-canvas rect as background");
                        parsed.background = Some(Color::parse(fill));
                        if is_empty {
                            continue;
                        }
                        stack.push(Frame {
                            name,
                            kind: FrameKind::Skipped,
                        });
                        continue;
                    }
                }

                match name.as_str() {
                    "g" => FrameKind::Group,
                    "text" => match build_element(&name, attrs) {
                        Some(element) if is_empty => {
                            parsed.elements.push(element);
                            FrameKind::Skipped
                        }
                        Some(element) => {
                            pending_text = Some((element, String::new()));
                            FrameKind::Text
                        }
                        None => FrameKind::Skipped,
                    },
                    _ => {
                        match build_element(&name, attrs) {
                            Some(element) => parsed.elements.push(element),
                            None => debug!("Ignoring <{}>", name),
                        }
                        FrameKind::Skipped
                    }
                }
            }
            FrameKind::Text | FrameKind::Skipped => FrameKind::Skipped,
        };

        if !is_empty {
            stack.push(Frame { name, kind });
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(MarkupError::UnclosedElement { name: frame.name });
    }
    if !root_done {
        return Err(MarkupError::MissingRoot);
    }

    Ok(parsed)
}

fn read_root_dimension(attrs: &Attributes, name: &str) -> Option<f64> {
    let value = attrs.peek(name)?;
    let parsed = parse_length(value);
    if parsed.is_none() {
        warn!("Ignoring unreadable root {} '{}'", name, value);
    }
    parsed
}
