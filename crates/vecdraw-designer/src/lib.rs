//! # VecDraw Designer
//!
//! The editing core of VecDraw: a document of vector shapes, its SVG
//! serialization, and an undoable history of edits.
//!
//! ## Components
//!
//! - **Color**: parsing and formatting of color notations
//! - **Geometry**: points and transform strings
//! - **Model**: line, rectangle, circle, ellipse, polygon, polyline,
//!   pentagon, hexagon, star and text elements
//! - **Document**: ordered elements kept together with their live handles
//! - **Markup**: SVG output and import
//! - **Commands**: create, delete and text edits that can be undone
//! - **History**: the undo/redo stacks
//! - **Engine / File I/O**: the current document and its file on disk
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vecdraw_designer::*;
//!
//! let document = shared(Document::default());
//! let view = shared(MemoryView::new());
//! let context = EditContext::new(&document, &view);
//! let mut history = CommandHistory::new();
//!
//! let rect = ShapeElement::new(Rectangle::new(Point::new(50.0, 50.0), 200.0, 100.0))
//!     .with_fill(Color::parse("blue"));
//! history.execute_command(Box::new(CreateShapeCommand::new(context, LiveHandle::new(), rect)));
//! history.undo();
//! history.redo();
//! ```

pub mod color;
pub mod commands;
pub mod document;
pub mod engine;
pub mod file_io;
pub mod geometry;
pub mod history;
pub mod live_view;
pub mod markup;
pub mod model;

pub use color::Color;
pub use commands::{
    Command, CreateShapeCommand, DeleteShapeCommand, EditContext, ModifyTextCommand,
    TextProperty,
};
pub use document::{Document, ElementKey};
pub use engine::Engine;
pub use file_io::{read_document, write_document, FileIo};
pub use geometry::{Point, Transform};
pub use history::CommandHistory;
pub use live_view::{LiveHandle, LiveView, MemoryView};
pub use model::{
    AttributeValue, Circle, Ellipse, Hexagon, Line, Pentagon, Polygon, Polyline, Rectangle,
    Shape, ShapeElement, ShapeGeometry, ShapeStyle, ShapeType, Star, Text, TextAnchor,
};

pub use vecdraw_core::{shared, Shared};
