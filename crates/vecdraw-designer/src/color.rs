//! Color values and their textual notations.
//!
//! [`Color::parse`] never fails: empty text, `none`, and anything it cannot
//! read all become [`Color::TRANSPARENT`]. Formatting always produces
//! `rgb(r,g,b)` for opaque colors and `rgba(r,g,b,a)` otherwise, with `a`
//! written as a 0-1 fraction.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0 is fully transparent, 255 fully opaque.
    pub a: u8,
}

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("white", (255, 255, 255)),
    ("maroon", (128, 0, 0)),
    ("red", (255, 0, 0)),
    ("purple", (128, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("olive", (128, 128, 0)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("blue", (0, 0, 255)),
    ("teal", (0, 128, 128)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("orange", (255, 165, 0)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("gold", (255, 215, 0)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("khaki", (240, 230, 140)),
    ("beige", (245, 245, 220)),
    ("ivory", (255, 255, 240)),
    ("lavender", (230, 230, 250)),
    ("turquoise", (64, 224, 208)),
    ("tomato", (255, 99, 71)),
    ("crimson", (220, 20, 60)),
    ("chocolate", (210, 105, 30)),
    ("tan", (210, 180, 140)),
    ("orchid", (218, 112, 214)),
    ("plum", (221, 160, 221)),
    ("skyblue", (135, 206, 235)),
    ("steelblue", (70, 130, 180)),
    ("royalblue", (65, 105, 225)),
    ("darkblue", (0, 0, 139)),
    ("darkred", (139, 0, 0)),
    ("darkgreen", (0, 100, 0)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("lightblue", (173, 216, 230)),
    ("lightgreen", (144, 238, 144)),
    ("limegreen", (50, 205, 50)),
    ("forestgreen", (34, 139, 34)),
    ("seagreen", (46, 139, 87)),
    ("orangered", (255, 69, 0)),
    ("hotpink", (255, 105, 180)),
    ("deeppink", (255, 20, 147)),
    ("slategray", (112, 128, 144)),
    ("slategrey", (112, 128, 144)),
    ("whitesmoke", (245, 245, 245)),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black, the fallback for unreadable input.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses any supported notation, falling back to [`Color::TRANSPARENT`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("none") {
            return Self::TRANSPARENT;
        }

        let parsed = if let Some(hex) = text.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = function_body(text, "rgba") {
            parse_rgba(body)
        } else if let Some(body) = function_body(text, "rgb") {
            parse_rgb(body)
        } else {
            named(text)
        };

        parsed.unwrap_or(Self::TRANSPARENT)
    }

    /// Looks up a color by its CSS name.
    pub fn from_name(name: &str) -> Option<Self> {
        named(name.trim())
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Alpha as a 0-1 fraction.
    pub fn alpha_fraction(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// The value written for a `fill` attribute: `none` when transparent.
    pub fn to_paint_string(&self) -> String {
        if self.is_transparent() {
            "none".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                self.alpha_fraction()
            )
        }
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn function_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let head = text.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    text[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn channel(field: &str) -> Option<u8> {
    let value: i64 = field.trim().parse().ok()?;
    Some(value.clamp(0, 255) as u8)
}

fn parse_rgb(body: &str) -> Option<Color> {
    let fields: Vec<&str> = body.split(',').collect();
    match fields.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        _ => None,
    }
}

fn parse_rgba(body: &str) -> Option<Color> {
    let fields: Vec<&str> = body.split(',').collect();
    match fields.as_slice() {
        [r, g, b, a] => {
            let alpha: f64 = a.trim().parse().ok()?;
            if !alpha.is_finite() {
                return None;
            }
            let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 16 + d);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    if name.eq_ignore_ascii_case("transparent") {
        return Some(Color::TRANSPARENT);
    }
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, (r, g, b))| Color::rgb(r, g, b))
}
