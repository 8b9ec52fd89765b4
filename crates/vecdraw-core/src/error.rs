//! Error handling for VecDraw
//!
//! Provides error types for every layer that can fail outward:
//! - Markup errors (importing the vector markup format)
//! - Command errors (precondition violations while editing)
//! - File errors (reading and writing documents on disk)
//!
//! Color and shape code never fails; it clamps or falls back to defaults.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Markup import error type
///
/// Represents failures that abort a whole-document parse.
#[derive(Error, Debug)]
pub enum MarkupError {
    /// The underlying XML reader rejected the input
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute could not be decoded
    #[error("Invalid attribute on <{element}>: {reason}")]
    InvalidAttribute {
        /// The element carrying the attribute.
        element: String,
        /// Why the attribute was rejected.
        reason: String,
    },

    /// Input contained no root element
    #[error("Document has no root element")]
    MissingRoot,

    /// The root element is not `svg`
    #[error("Expected <svg> root element, found <{found}>")]
    UnexpectedRoot {
        /// The name of the root element that was found.
        found: String,
    },

    /// Input ended while an element was still open
    #[error("Unclosed element <{name}> at end of input")]
    UnclosedElement {
        /// The innermost element left open.
        name: String,
    },

    /// Content was found after the root element closed
    #[error("Unexpected content after the root element: <{name}>")]
    TrailingContent {
        /// The element found after the root.
        name: String,
    },
}

/// Command error type
///
/// Represents precondition violations detected by an edit command.
/// Commands report these without mutating anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The document the command targets has been dropped
    #[error("Document is no longer available")]
    DocumentUnavailable,

    /// The live view the command targets has been dropped
    #[error("Live view is no longer available")]
    ViewUnavailable,

    /// The live handle is not mirrored by any document element
    #[error("Live handle {handle} is not part of the document")]
    UnknownHandle {
        /// The handle that could not be found.
        handle: String,
    },

    /// The live handle does not refer to a text element
    #[error("Live handle {handle} does not refer to a text element")]
    NotText {
        /// The handle that was expected to be text.
        handle: String,
    },

    /// No document element carries the captured identifier
    #[error("No element with identifier '{id}'")]
    ElementNotFound {
        /// The captured identifier.
        id: String,
    },

    /// The command has no captured state to restore
    #[error("Nothing captured to restore for '{command}'")]
    MissingSnapshot {
        /// The description of the command.
        command: String,
    },
}

/// File I/O error type
///
/// Represents failures while persisting or loading a document.
#[derive(Error, Debug)]
pub enum FileIoError {
    /// The file could not be opened for reading
    #[error("Cannot open file: {path} ({source})")]
    CannotOpen {
        /// The path that was requested.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file was read but its content is not valid markup
    #[error("Cannot parse SVG file content: {0}")]
    CannotParse(#[from] MarkupError),

    /// The destination could not be opened for writing
    #[error("Cannot open file for writing: {path} ({source})")]
    CannotCreate {
        /// The destination path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing or committing the content failed
    #[error("Error writing file: {path} ({source})")]
    WriteFailed {
        /// The destination path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Main error type for VecDraw
///
/// What the binary sees when a document is opened or saved.
#[derive(Error, Debug)]
pub enum Error {
    /// Markup error
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// File error
    #[error(transparent)]
    FileIo(#[from] FileIoError),
}

impl Error {
    /// Check if the content, rather than the file, was at fault
    pub fn is_markup_error(&self) -> bool {
        matches!(
            self,
            Error::Markup(_) | Error::FileIo(FileIoError::CannotParse(_))
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
