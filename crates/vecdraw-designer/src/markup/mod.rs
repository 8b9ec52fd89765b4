//! Markup format: a subset of SVG.
//!
//! - [`writer`]: element fragments and whole-document output
//! - [`reader`]: whole-document import built on `quick-xml`

pub mod reader;
pub mod writer;

pub use reader::{parse_document, ParsedDocument};
pub use writer::{document_markup, element_markup, format_number, AttributeWriter};

/// Namespace written on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
