//! Type aliases for the single-threaded sharing used by an editing session.
//!
//! A document and its live view are shared between the session and the
//! commands that edit them. Commands hold weak references so that a dropped
//! document or view shows up as a failed precondition instead of being kept
//! alive by the history.
//!
//! ```rust,ignore
//! use vecdraw_core::types::*;
//!
//! let document: Shared<Document> = shared(Document::default());
//! let weak: WeakShared<Document> = Rc::downgrade(&document);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A non-owning reference to a [`Shared`] value.
pub type WeakShared<T> = Weak<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
