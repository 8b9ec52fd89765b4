//! # VecDraw
//!
//! A 2-D vector graphics editing engine:
//! - Line, rectangle, circle, ellipse, polygon, polyline, pentagon, hexagon,
//!   star and text elements
//! - SVG generation and import
//! - Undoable create, delete and text edits mirrored into a live view
//!
//! ## Architecture
//!
//! VecDraw is organized as a workspace with multiple crates:
//!
//! 1. **vecdraw-core** - Error types and shared-ownership helpers
//! 2. **vecdraw-designer** - Shape model, document, markup, commands, history
//! 3. **vecdraw-settings** - Configuration and its persistence
//! 4. **vecdraw** - Main binary that integrates all crates

use std::path::Path;
use tracing::info;

pub use vecdraw_designer as designer;

pub use vecdraw_core::{CommandError, Error, FileIoError, MarkupError, Result};

pub use vecdraw_designer::{
    Color, Command, CommandHistory, CreateShapeCommand, DeleteShapeCommand, Document,
    EditContext, Engine, FileIo, LiveHandle, LiveView, MemoryView, ModifyTextCommand, Point,
    Shape, ShapeElement, ShapeType,
};

pub use vecdraw_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Opens the document at `path`.
pub fn open_document(path: &Path) -> Result<Document> {
    let document = vecdraw_designer::read_document(path)?;
    info!(
        "Opened {} with {} element(s)",
        path.display(),
        document.len()
    );
    Ok(document)
}

/// Saves `document` to `path`, replacing it only once fully written.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    vecdraw_designer::write_document(document, path)?;
    info!("Saved {}", path.display());
    Ok(())
}

/// Empty document sized and colored from the canvas settings.
pub fn new_document(config: &Config) -> Document {
    let canvas = &config.canvas;
    Document::new(canvas.width, canvas.height, Color::parse(&canvas.background))
}

/// History limited to the configured depth.
pub fn new_history(config: &Config) -> CommandHistory {
    CommandHistory::with_max_depth(config.history.max_depth)
}

/// One-line summary of an element, as printed by the binary.
pub fn describe_element(element: &ShapeElement) -> String {
    let kind = element.shape_type().display_name();
    match element.id() {
        Some(id) => format!("{} '{}': {}", kind, id, element.to_markup()),
        None => format!("{}: {}", kind, element.to_markup()),
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
