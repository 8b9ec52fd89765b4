use vecdraw_designer::{
    shared, Color, Document, EditContext, MemoryView, Point, Rectangle, Shape, ShapeElement,
    Shared, Text,
};

pub struct Session {
    pub document: Shared<Document>,
    pub view: Shared<MemoryView>,
    pub context: EditContext,
}

pub fn session() -> Session {
    let document = shared(Document::default());
    let view = shared(MemoryView::new());
    let context = EditContext::new(&document, &view);
    Session {
        document,
        view,
        context,
    }
}

pub fn blue_rect() -> ShapeElement {
    ShapeElement::new(Rectangle::new(Point::new(50.0, 50.0), 200.0, 100.0))
        .with_fill(Color::parse("blue"))
}

pub fn label(content: &str) -> ShapeElement {
    ShapeElement::new(Text::new(Point::new(10.0, 20.0), content))
}

pub fn ids(document: &Shared<Document>) -> Vec<String> {
    document
        .borrow()
        .elements()
        .map(|e| e.id().unwrap_or_default().to_string())
        .collect()
}

pub fn text_of(element: &ShapeElement) -> &Text {
    match &element.shape {
        Shape::Text(text) => text,
        other => panic!("expected text, got {}", other.shape_type()),
    }
}
