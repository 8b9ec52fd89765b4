//! Owner of the current document for an editing session.

use std::path::Path;
use tracing::info;
use vecdraw_core::{shared, Shared};

use crate::color::Color;
use crate::document::Document;
use crate::file_io::FileIo;

/// Holds the current document and performs whole-document file operations.
///
/// Replacing the document (new or opened) swaps in a fresh shared handle, so
/// commands still pointing at the old document fail instead of editing it.
#[derive(Debug)]
pub struct Engine {
    document: Shared<Document>,
    file_io: FileIo,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_document(Document::default())
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: shared(document),
            file_io: FileIo::new(),
        }
    }

    /// Shared handle to the current document.
    pub fn document(&self) -> Shared<Document> {
        self.document.clone()
    }

    pub fn create_new_document(&mut self, width: f64, height: f64, background: Color) {
        info!("New {}x{} document", width, height);
        self.document = shared(Document::new(width, height, background));
    }

    /// Opens `path` as the current document. On failure the current document
    /// is kept and [`Engine::last_error`] explains why.
    pub fn load_file(&mut self, path: &Path) -> bool {
        let mut loaded = Document::default();
        if !self.file_io.open_file(path, &mut loaded) {
            return false;
        }
        self.document = shared(loaded);
        true
    }

    pub fn save_file(&mut self, path: &Path) -> bool {
        let document = self.document.borrow();
        self.file_io.save_file(path, &document)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.file_io.last_error()
    }
}
