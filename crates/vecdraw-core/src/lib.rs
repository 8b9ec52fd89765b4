//! # VecDraw Core
//!
//! Core types and utilities shared by the VecDraw crates.
//! Provides the error taxonomy used by the document, command and file
//! layers, and the single-threaded sharing aliases the editing session
//! is built on.

pub mod error;
pub mod types;

pub use error::{CommandError, Error, FileIoError, MarkupError, Result};

pub use types::{shared, Shared, SubscriptionId, WeakShared};
