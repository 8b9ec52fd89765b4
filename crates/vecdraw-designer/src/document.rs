//! Document: canvas metadata plus the ordered element list.
//!
//! Each element lives in one record together with its optional live handle,
//! so the element list and the handle list cannot drift apart. List order is
//! paint order: the last element is drawn on top.

use std::collections::HashSet;
use tracing::{debug, info, warn};
use vecdraw_core::MarkupError;

use crate::color::Color;
use crate::live_view::LiveHandle;
use crate::markup::{self, ParsedDocument};
use crate::model::ShapeElement;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Stable identity of one record within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(u64);

#[derive(Debug, Clone)]
struct ElementRecord {
    key: ElementKey,
    element: ShapeElement,
    handle: Option<LiveHandle>,
}

#[derive(Debug, Clone)]
pub struct Document {
    width: f64,
    height: f64,
    background: Color,
    records: Vec<ElementRecord>,
    next_key: u64,
    next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color::WHITE)
    }
}

fn positive_or_one(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        1.0
    }
}

impl Document {
    pub fn new(width: f64, height: f64, background: Color) -> Self {
        Self {
            width: positive_or_one(width),
            height: positive_or_one(height),
            background,
            records: Vec::new(),
            next_key: 0,
            next_id: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Non-positive widths become 1.
    pub fn set_width(&mut self, width: f64) {
        self.width = positive_or_one(width);
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Non-positive heights become 1.
    pub fn set_height(&mut self, height: f64) {
        self.height = positive_or_one(height);
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &ShapeElement> + '_ {
        self.records.iter().map(|r| &r.element)
    }

    /// Live handles in paint order, skipping elements that have none.
    pub fn live_handles(&self) -> impl Iterator<Item = LiveHandle> + '_ {
        self.records.iter().filter_map(|r| r.handle)
    }

    pub fn keys(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.records.iter().map(|r| r.key)
    }

    pub fn get(&self, key: ElementKey) -> Option<&ShapeElement> {
        self.records
            .iter()
            .find(|r| r.key == key)
            .map(|r| &r.element)
    }

    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut ShapeElement> {
        self.records
            .iter_mut()
            .find(|r| r.key == key)
            .map(|r| &mut r.element)
    }

    /// First element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&ShapeElement> {
        self.elements().find(|e| e.id() == Some(id))
    }

    fn next_key(&mut self) -> ElementKey {
        let key = ElementKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Appends an element without a live handle.
    pub fn add_element(&mut self, element: ShapeElement) -> ElementKey {
        let key = self.next_key();
        debug!("Adding {} element {:?}", element.shape_type(), element.id());
        self.records.push(ElementRecord {
            key,
            element,
            handle: None,
        });
        key
    }

    /// Removes every element carrying `id`. Returns whether any matched.
    pub fn remove_element_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.element.id() != Some(id));
        let removed = before - self.records.len();
        if removed > 0 {
            debug!("Removed {} element(s) with id '{}'", removed, id);
        }
        removed > 0
    }

    /// Removes exactly the element stored under `key`.
    pub fn remove_element(&mut self, key: ElementKey) -> bool {
        match self.records.iter().position(|r| r.key == key) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_elements(&mut self) {
        self.records.clear();
    }

    /// Gives `element` a `<kind>-<n>` identifier unless it already has one.
    pub fn assign_identifier(&mut self, element: &mut ShapeElement) {
        if element.id().is_some_and(|id| !id.is_empty()) {
            return;
        }
        let used: HashSet<String> = self
            .elements()
            .filter_map(|e| e.id())
            .map(str::to_string)
            .collect();
        let prefix = element.shape_type().id_prefix();
        let id = loop {
            self.next_id += 1;
            let candidate = format!("{}-{}", prefix, self.next_id);
            if !used.contains(&candidate) {
                break candidate;
            }
        };
        element.style.id = Some(id);
    }

    /// Appends `element` mirrored by `handle`, assigning an identifier if it
    /// has none. Returns the stored element.
    pub fn insert_live(&mut self, element: ShapeElement, handle: LiveHandle) -> &ShapeElement {
        let index = self.records.len();
        self.insert_live_at(index, element, handle)
    }

    /// Inserts `element` mirrored by `handle` at `index` (clamped to the end).
    pub fn insert_live_at(
        &mut self,
        index: usize,
        mut element: ShapeElement,
        handle: LiveHandle,
    ) -> &ShapeElement {
        self.assign_identifier(&mut element);
        let key = self.next_key();
        let index = index.min(self.records.len());
        debug!("Inserting {:?} for {} at {}", element.id(), handle, index);
        self.records.insert(
            index,
            ElementRecord {
                key,
                element,
                handle: Some(handle),
            },
        );
        &self.records[index].element
    }

    pub fn position_of_handle(&self, handle: LiveHandle) -> Option<usize> {
        self.records.iter().position(|r| r.handle == Some(handle))
    }

    pub fn element_for_handle(&self, handle: LiveHandle) -> Option<&ShapeElement> {
        self.records
            .iter()
            .find(|r| r.handle == Some(handle))
            .map(|r| &r.element)
    }

    pub fn element_for_handle_mut(&mut self, handle: LiveHandle) -> Option<&mut ShapeElement> {
        self.records
            .iter_mut()
            .find(|r| r.handle == Some(handle))
            .map(|r| &mut r.element)
    }

    /// Removes the element mirrored by `handle`, returning its index.
    pub fn take_by_handle(&mut self, handle: LiveHandle) -> Option<(usize, ShapeElement)> {
        let index = self.position_of_handle(handle)?;
        Some((index, self.records.remove(index).element))
    }

    /// Removes the element mirrored by `handle`, provided it still carries
    /// `id`.
    pub fn take_live(&mut self, handle: LiveHandle, id: &str) -> Option<ShapeElement> {
        let index = self
            .records
            .iter()
            .position(|r| r.handle == Some(handle) && r.element.id() == Some(id))?;
        Some(self.records.remove(index).element)
    }

    /// Serializes the whole document.
    pub fn generate_markup(&self) -> String {
        markup::document_markup(self.width, self.height, self.background, self.elements())
    }

    /// Replaces the content with the imported `text`.
    ///
    /// Elements are cleared first. On failure the element list stays empty and
    /// the canvas metadata is left as it was.
    pub fn parse_markup(&mut self, text: &str) -> Result<(), MarkupError> {
        self.clear_elements();
        let parsed = markup::parse_document(text).map_err(|e| {
            warn!("Markup import failed: {}", e);
            e
        })?;
        self.apply_parsed(parsed);
        Ok(())
    }

    /// [`Document::parse_markup`] reporting only success.
    pub fn load_markup(&mut self, text: &str) -> bool {
        self.parse_markup(text).is_ok()
    }

    fn apply_parsed(&mut self, parsed: ParsedDocument) {
        if let Some(width) = parsed.width {
            self.set_width(width);
        }
        if let Some(height) = parsed.height {
            self.set_height(height);
        }
        self.background = parsed.background.unwrap_or(Color::WHITE);
        let count = parsed.elements.len();
        for element in parsed.elements {
            self.add_element(element);
        }
        info!(
            "Imported {} element(s) into {}x{} document",
            count, self.width, self.height
        );
    }
}
