//! Reversible edits.
//!
//! A command captures whatever it needs to reverse itself the first time it
//! runs. Commands reach the document and the live view through weak
//! references: a dropped document or view is reported as a
//! [`CommandError`] and nothing is mutated.
//!
//! Commands do not guard against running twice in the same direction; the
//! [`CommandHistory`](crate::history::CommandHistory) enforces alternation.

use std::rc::Rc;
use tracing::debug;
use vecdraw_core::{CommandError, Shared, WeakShared};

use crate::color::Color;
use crate::document::Document;
use crate::live_view::{LiveHandle, LiveView};
use crate::model::{ShapeElement, ShapeType, TextAnchor};

/// A command that can be executed and undone.
pub trait Command {
    /// Applies the edit.
    fn execute(&mut self) -> Result<(), CommandError>;

    /// Reverses the edit.
    fn undo(&mut self) -> Result<(), CommandError>;

    /// Returns the name of the command for display.
    fn description(&self) -> &str;
}

/// The document and live view a command edits.
#[derive(Clone)]
pub struct EditContext {
    document: WeakShared<Document>,
    view: WeakShared<dyn LiveView>,
}

impl EditContext {
    pub fn new<V: LiveView + 'static>(document: &Shared<Document>, view: &Shared<V>) -> Self {
        let view: WeakShared<V> = Rc::downgrade(view);
        let view: WeakShared<dyn LiveView> = view;
        Self {
            document: Rc::downgrade(document),
            view,
        }
    }

    pub fn from_dyn(document: &Shared<Document>, view: &Shared<dyn LiveView>) -> Self {
        Self {
            document: Rc::downgrade(document),
            view: Rc::downgrade(view),
        }
    }

    pub fn document(&self) -> Result<Shared<Document>, CommandError> {
        self.document
            .upgrade()
            .ok_or(CommandError::DocumentUnavailable)
    }

    pub fn view(&self) -> Result<Shared<dyn LiveView>, CommandError> {
        self.view.upgrade().ok_or(CommandError::ViewUnavailable)
    }

    /// Frees `handle` if the view still exists and no longer shows it.
    fn release_if_detached(&self, handle: LiveHandle) {
        let Some(view) = self.view.upgrade() else {
            return;
        };
        if let Ok(mut view) = view.try_borrow_mut() {
            if !view.contains_handle(handle) {
                debug!("Releasing detached handle {}", handle);
                view.release_handle(handle);
            }
        };
    }
}

/// Adds a new element mirrored by a live handle.
pub struct CreateShapeCommand {
    context: EditContext,
    handle: LiveHandle,
    /// Held while the element is not in the document.
    element: Option<ShapeElement>,
    /// Identifier the document gave the element, read back after insertion.
    element_id: Option<String>,
    owns_handle: bool,
    description: String,
}

impl CreateShapeCommand {
    pub fn new(context: EditContext, handle: LiveHandle, element: ShapeElement) -> Self {
        let description = format!("Add {}", element.shape_type().display_name());
        Self {
            context,
            handle,
            element: Some(element),
            element_id: None,
            owns_handle: true,
            description,
        }
    }

    pub fn handle(&self) -> LiveHandle {
        self.handle
    }

    /// Identifier of the created element, once executed.
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }
}

impl Command for CreateShapeCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let element = self.element.take().ok_or_else(|| CommandError::MissingSnapshot {
            command: self.description.clone(),
        })?;

        let mut document = document.borrow_mut();
        let inserted = document.insert_live(element, self.handle);
        self.element_id = inserted.id().map(str::to_string);

        let mut view = view.borrow_mut();
        if !view.contains_handle(self.handle) {
            view.insert_handle(self.handle, inserted, None);
        }
        self.owns_handle = false;

        debug!("{}: created {:?}", self.description, self.element_id);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let id = self
            .element_id
            .clone()
            .ok_or_else(|| CommandError::MissingSnapshot {
                command: self.description.clone(),
            })?;

        let element = document
            .borrow_mut()
            .take_live(self.handle, &id)
            .ok_or(CommandError::ElementNotFound { id: id.clone() })?;
        view.borrow_mut().remove_handle(self.handle);

        self.element = Some(element);
        self.owns_handle = true;
        debug!("{}: removed '{}'", self.description, id);
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Drop for CreateShapeCommand {
    fn drop(&mut self) {
        if self.owns_handle {
            self.context.release_if_detached(self.handle);
        }
    }
}

/// What a delete removed, and where from.
struct RemovedElement {
    element: ShapeElement,
    document_index: usize,
    view_index: Option<usize>,
}

/// Removes the element mirrored by a live handle.
///
/// Undo puts the element back at its recorded document position and the
/// handle back at its recorded stacking position.
pub struct DeleteShapeCommand {
    context: EditContext,
    handle: LiveHandle,
    removed: Option<RemovedElement>,
    owns_handle: bool,
    description: String,
}

impl DeleteShapeCommand {
    pub fn new(context: EditContext, handle: LiveHandle) -> Self {
        let kind = context.document().ok().and_then(|document| {
            document
                .borrow()
                .element_for_handle(handle)
                .map(|e| e.shape_type())
        });
        let description = format!(
            "Remove {}",
            kind.map(|k: ShapeType| k.display_name()).unwrap_or("Shape")
        );
        Self {
            context,
            handle,
            removed: None,
            owns_handle: false,
            description,
        }
    }

    pub fn handle(&self) -> LiveHandle {
        self.handle
    }
}

impl Command for DeleteShapeCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let mut view = view.borrow_mut();

        let view_index = view.position_of(self.handle);
        let (document_index, element) = document
            .borrow_mut()
            .take_by_handle(self.handle)
            .ok_or_else(|| CommandError::UnknownHandle {
                handle: self.handle.to_string(),
            })?;
        view.remove_handle(self.handle);

        debug!(
            "{}: removed {:?} from index {}",
            self.description,
            element.id(),
            document_index
        );
        self.removed = Some(RemovedElement {
            element,
            document_index,
            view_index,
        });
        self.owns_handle = true;
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let removed = self
            .removed
            .take()
            .ok_or_else(|| CommandError::MissingSnapshot {
                command: self.description.clone(),
            })?;

        let mut document = document.borrow_mut();
        let restored =
            document.insert_live_at(removed.document_index, removed.element, self.handle);
        view.borrow_mut()
            .insert_handle(self.handle, restored, removed.view_index);

        self.owns_handle = false;
        debug!("{}: restored at {}", self.description, removed.document_index);
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Drop for DeleteShapeCommand {
    fn drop(&mut self) {
        if self.owns_handle {
            self.context.release_if_detached(self.handle);
        }
    }
}

/// One text property and its value.
#[derive(Debug, Clone, PartialEq)]
pub enum TextProperty {
    Content(String),
    FontFamily(String),
    FontSize(i32),
    Bold(bool),
    Italic(bool),
    Alignment(TextAnchor),
    Color(Color),
}

impl TextProperty {
    pub fn description(&self) -> &'static str {
        match self {
            TextProperty::Content(_) => "Modify Text Content",
            TextProperty::FontFamily(_) => "Modify Font Family",
            TextProperty::FontSize(_) => "Modify Font Size",
            TextProperty::Bold(_) => "Modify Font Bold",
            TextProperty::Italic(_) => "Modify Font Italic",
            TextProperty::Alignment(_) => "Modify Text Alignment",
            TextProperty::Color(_) => "Modify Text Color",
        }
    }

    /// The current value of the same property on `element`, if it is text.
    fn read(&self, element: &ShapeElement) -> Option<TextProperty> {
        let text = element.shape.as_text()?;
        Some(match self {
            TextProperty::Content(_) => TextProperty::Content(text.content.clone()),
            TextProperty::FontFamily(_) => TextProperty::FontFamily(text.font_family.clone()),
            TextProperty::FontSize(_) => TextProperty::FontSize(text.font_size().round() as i32),
            TextProperty::Bold(_) => TextProperty::Bold(text.bold),
            TextProperty::Italic(_) => TextProperty::Italic(text.italic),
            TextProperty::Alignment(_) => TextProperty::Alignment(text.anchor),
            TextProperty::Color(_) => TextProperty::Color(element.style.fill),
        })
    }

    /// Writes this value onto `element`. Returns false if it is not text.
    fn apply(&self, element: &mut ShapeElement) -> bool {
        if let TextProperty::Color(color) = self {
            if element.shape.as_text().is_none() {
                return false;
            }
            element.style.fill = *color;
            return true;
        }
        let Some(text) = element.shape.as_text_mut() else {
            return false;
        };
        match self {
            TextProperty::Content(v) => text.content = v.clone(),
            TextProperty::FontFamily(v) => text.font_family = v.clone(),
            TextProperty::FontSize(v) => text.set_font_size(f64::from(*v)),
            TextProperty::Bold(v) => text.bold = *v,
            TextProperty::Italic(v) => text.italic = *v,
            TextProperty::Alignment(v) => text.anchor = *v,
            TextProperty::Color(_) => {}
        }
        true
    }
}

/// Changes one property of a text element.
///
/// The previous value is captured on the first execute. Only the forward
/// direction signals the live view that text changed; undo just refreshes it.
pub struct ModifyTextCommand {
    context: EditContext,
    handle: LiveHandle,
    new_value: TextProperty,
    old_value: Option<TextProperty>,
    /// Exact size before a font size edit; `TextProperty::FontSize` is whole.
    old_font_size: Option<f64>,
}

impl ModifyTextCommand {
    pub fn new(context: EditContext, handle: LiveHandle, value: TextProperty) -> Self {
        Self {
            context,
            handle,
            new_value: value,
            old_value: None,
            old_font_size: None,
        }
    }

    pub fn content(context: EditContext, handle: LiveHandle, content: impl Into<String>) -> Self {
        Self::new(context, handle, TextProperty::Content(content.into()))
    }

    pub fn font_family(context: EditContext, handle: LiveHandle, family: impl Into<String>) -> Self {
        Self::new(context, handle, TextProperty::FontFamily(family.into()))
    }

    pub fn font_size(context: EditContext, handle: LiveHandle, size: i32) -> Self {
        Self::new(context, handle, TextProperty::FontSize(size))
    }

    pub fn bold(context: EditContext, handle: LiveHandle, bold: bool) -> Self {
        Self::new(context, handle, TextProperty::Bold(bold))
    }

    pub fn italic(context: EditContext, handle: LiveHandle, italic: bool) -> Self {
        Self::new(context, handle, TextProperty::Italic(italic))
    }

    pub fn alignment(context: EditContext, handle: LiveHandle, anchor: TextAnchor) -> Self {
        Self::new(context, handle, TextProperty::Alignment(anchor))
    }

    pub fn color(context: EditContext, handle: LiveHandle, color: Color) -> Self {
        Self::new(context, handle, TextProperty::Color(color))
    }

    pub fn new_value(&self) -> &TextProperty {
        &self.new_value
    }

    pub fn old_value(&self) -> Option<&TextProperty> {
        self.old_value.as_ref()
    }

    fn unknown_handle(&self) -> CommandError {
        CommandError::UnknownHandle {
            handle: self.handle.to_string(),
        }
    }

    fn not_text(&self) -> CommandError {
        CommandError::NotText {
            handle: self.handle.to_string(),
        }
    }
}

impl Command for ModifyTextCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let mut document = document.borrow_mut();
        let element = document
            .element_for_handle_mut(self.handle)
            .ok_or_else(|| self.unknown_handle())?;

        if self.old_value.is_none() {
            self.old_value = Some(self.new_value.read(element).ok_or_else(|| self.not_text())?);
            if let TextProperty::FontSize(_) = self.new_value {
                self.old_font_size = element.shape.as_text().map(|text| text.font_size());
            }
        }
        if !self.new_value.apply(element) {
            return Err(self.not_text());
        }

        view.borrow_mut().text_changed(self.handle, element);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        let document = self.context.document()?;
        let view = self.context.view()?;
        let old_value = self
            .old_value
            .as_ref()
            .ok_or_else(|| CommandError::MissingSnapshot {
                command: self.description().to_string(),
            })?;

        let mut document = document.borrow_mut();
        let element = document
            .element_for_handle_mut(self.handle)
            .ok_or_else(|| self.unknown_handle())?;
        let restored = match self.old_font_size {
            Some(size) => element
                .shape
                .as_text_mut()
                .map(|text| text.set_font_size(size))
                .is_some(),
            None => old_value.apply(element),
        };
        if !restored {
            return Err(self.not_text());
        }

        view.borrow_mut().refresh_handle(self.handle, element);
        Ok(())
    }

    fn description(&self) -> &str {
        self.new_value.description()
    }
}
