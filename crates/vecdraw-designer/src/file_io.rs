//! Reading and writing documents on disk.
//!
//! Writes go to a temporary file next to the destination, which replaces the
//! destination only once the whole document has been written.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{error, info};
use vecdraw_core::FileIoError;

use crate::document::Document;

/// Reads and imports the document at `path`.
pub fn read_document(path: &Path) -> Result<Document, FileIoError> {
    let content = std::fs::read_to_string(path).map_err(|source| FileIoError::CannotOpen {
        path: path.display().to_string(),
        source,
    })?;

    let mut document = Document::default();
    document.parse_markup(&content)?;
    Ok(document)
}

/// Writes the markup of `document` to `path`, all or nothing.
pub fn write_document(document: &Document, path: &Path) -> Result<(), FileIoError> {
    let shown = path.display().to_string();
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(directory).map_err(|source| FileIoError::CannotCreate {
        path: shown.clone(),
        source,
    })?;

    let write_failed = |source: std::io::Error| FileIoError::WriteFailed {
        path: shown.clone(),
        source,
    };
    file.write_all(document.generate_markup().as_bytes())
        .map_err(write_failed)?;
    file.as_file().sync_all().map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}

/// Document file operations reporting success as `bool` plus a retrievable
/// message for the last failure.
#[derive(Debug, Default)]
pub struct FileIo {
    last_error: Option<String>,
}

impl FileIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` into `document`. On failure `document` is untouched.
    pub fn open_file(&mut self, path: &Path, document: &mut Document) -> bool {
        match read_document(path) {
            Ok(loaded) => {
                info!("Opened {} ({} elements)", path.display(), loaded.len());
                *document = loaded;
                self.last_error = None;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn save_file(&mut self, path: &Path, document: &Document) -> bool {
        match write_document(document, path) {
            Ok(()) => {
                info!("Saved {} ({} elements)", path.display(), document.len());
                self.last_error = None;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Message describing the most recent failure, if the last call failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, e: FileIoError) -> bool {
        error!("{}", e);
        self.last_error = Some(e.to_string());
        false
    }
}
