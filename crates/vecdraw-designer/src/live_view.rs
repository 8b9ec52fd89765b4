//! Boundary to the interactive, on-screen representation of a document.
//!
//! A live view holds one opaque [`LiveHandle`] per visible element. Commands
//! only need to insert, remove and query handles; everything else on
//! [`LiveView`] has a no-op default so renderers implement what they use.

use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::model::ShapeElement;

/// Opaque identity of one element in a live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiveHandle(Uuid);

impl LiveHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LiveHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LiveHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", &self.0.simple().to_string()[..8])
    }
}

/// Capabilities the edit commands need from a live view.
pub trait LiveView {
    /// Shows `handle` for `element` at stacking `position`, or topmost when
    /// `position` is `None` or past the end.
    fn insert_handle(&mut self, handle: LiveHandle, element: &ShapeElement, position: Option<usize>);

    /// Hides `handle`. Returns whether it was shown.
    fn remove_handle(&mut self, handle: LiveHandle) -> bool;

    fn contains_handle(&self, handle: LiveHandle) -> bool;

    /// Stacking position of `handle`, 0 being the back.
    fn position_of(&self, _handle: LiveHandle) -> Option<usize> {
        None
    }

    /// The element behind `handle` was changed and should be redrawn.
    fn refresh_handle(&mut self, _handle: LiveHandle, _element: &ShapeElement) {}

    /// A text property was edited forward (not on undo).
    fn text_changed(&mut self, _handle: LiveHandle, _element: &ShapeElement) {}

    /// A handle that left the view for good; free whatever backs it.
    fn release_handle(&mut self, _handle: LiveHandle) {}
}

/// A headless live view that keeps handles in stacking order.
///
/// Useful for batch tools and for observing what edits do to the view.
#[derive(Debug, Default)]
pub struct MemoryView {
    items: Vec<(LiveHandle, ShapeElement)>,
    released: Vec<LiveHandle>,
    text_changes: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles from back to front.
    pub fn handles(&self) -> Vec<LiveHandle> {
        self.items.iter().map(|(handle, _)| *handle).collect()
    }

    pub fn element(&self, handle: LiveHandle) -> Option<&ShapeElement> {
        self.items
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, element)| element)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Handles released so far, in release order.
    pub fn released(&self) -> &[LiveHandle] {
        &self.released
    }

    pub fn text_change_count(&self) -> usize {
        self.text_changes
    }
}

impl LiveView for MemoryView {
    fn insert_handle(&mut self, handle: LiveHandle, element: &ShapeElement, position: Option<usize>) {
        let index = position
            .filter(|&p| p <= self.items.len())
            .unwrap_or(self.items.len());
        self.items.insert(index, (handle, element.clone()));
        debug!("View: inserted {} at {}", handle, index);
    }

    fn remove_handle(&mut self, handle: LiveHandle) -> bool {
        match self.position_of(handle) {
            Some(index) => {
                self.items.remove(index);
                debug!("View: removed {}", handle);
                true
            }
            None => false,
        }
    }

    fn contains_handle(&self, handle: LiveHandle) -> bool {
        self.items.iter().any(|(h, _)| *h == handle)
    }

    fn position_of(&self, handle: LiveHandle) -> Option<usize> {
        self.items.iter().position(|(h, _)| *h == handle)
    }

    fn refresh_handle(&mut self, handle: LiveHandle, element: &ShapeElement) {
        if let Some((_, shown)) = self.items.iter_mut().find(|(h, _)| *h == handle) {
            *shown = element.clone();
        }
    }

    fn text_changed(&mut self, handle: LiveHandle, element: &ShapeElement) {
        self.text_changes += 1;
        self.refresh_handle(handle, element);
    }

    fn release_handle(&mut self, handle: LiveHandle) {
        self.released.push(handle);
    }
}
