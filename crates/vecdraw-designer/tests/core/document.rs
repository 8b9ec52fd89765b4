use vecdraw_designer::{
    Circle, Color, Document, Ellipse, Line, LiveHandle, Point, Rectangle, ShapeElement, Text,
};

#[test]
fn test_defaults() {
    let document = Document::default();
    assert_eq!(document.width(), 600.0);
    assert_eq!(document.height(), 400.0);
    assert_eq!(document.background(), Color::WHITE);
    assert!(document.is_empty());
}

#[test]
fn test_generate_empty_white_document() {
    let document = Document::new(100.0, 50.0, Color::WHITE);
    assert_eq!(
        document.generate_markup(),
        "<svg width=\"100\" height=\"50\" xmlns=\"http://www.w3.org/2000/svg\">\n</svg>"
    );
}

#[test]
fn test_generate_with_background_and_elements() {
    let mut document = Document::new(200.0, 100.0, Color::parse("#336699"));
    document.add_element(
        ShapeElement::new(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))).with_id("l"),
    );
    let markup = document.generate_markup();
    let lines: Vec<&str> = markup.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "  <rect width=\"100%\" height=\"100%\" fill=\"rgb(51,102,153)\" />"
    );
    assert!(lines[2].starts_with("  <line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"10\" id=\"l\""));
    assert_eq!(lines[3], "</svg>");
}

#[test]
fn test_transparent_background_not_written() {
    let document = Document::new(10.0, 10.0, Color::TRANSPARENT);
    assert!(!document.generate_markup().contains("100%"));
}

#[test]
fn test_element_order_is_document_order() {
    let mut document = Document::default();
    document.add_element(ShapeElement::new(Circle::new(Point::new(1.0, 1.0), 1.0)));
    document.add_element(ShapeElement::new(Ellipse::new(Point::new(1.0, 1.0), 1.0, 2.0)));
    document.add_element(ShapeElement::new(Text::new(Point::new(1.0, 1.0), "t")));
    let markup = document.generate_markup();
    let circle = markup.find("<circle").unwrap();
    let ellipse = markup.find("<ellipse").unwrap();
    let text = markup.find("<text").unwrap();
    assert!(circle < ellipse && ellipse < text);
}

#[test]
fn test_remove_by_id_removes_every_match() {
    let mut document = Document::default();
    let rect = || ShapeElement::new(Rectangle::new(Point::new(0.0, 0.0), 1.0, 1.0));
    document.add_element(rect().with_id("dup"));
    document.add_element(rect().with_id("keep"));
    document.add_element(rect().with_id("dup"));
    assert!(document.remove_element_by_id("dup"));
    assert_eq!(document.len(), 1);
    assert!(!document.remove_element_by_id("dup"));
    assert!(document.find_by_id("keep").is_some());
}

#[test]
fn test_live_insertion_assigns_unique_ids() {
    let mut document = Document::default();
    document.add_element(
        ShapeElement::new(Circle::new(Point::new(0.0, 0.0), 1.0)).with_id("circle-1"),
    );
    let first = LiveHandle::new();
    let second = LiveHandle::new();
    let id1 = document
        .insert_live(ShapeElement::new(Circle::new(Point::new(0.0, 0.0), 2.0)), first)
        .id()
        .map(str::to_string);
    let id2 = document
        .insert_live(ShapeElement::new(Circle::new(Point::new(0.0, 0.0), 3.0)), second)
        .id()
        .map(str::to_string);
    assert_eq!(id1.as_deref(), Some("circle-2"));
    assert_eq!(id2.as_deref(), Some("circle-3"));
    assert_eq!(document.position_of_handle(second), Some(2));
}

#[test]
fn test_failed_parse_clears_elements_keeps_size() {
    let mut document = Document::new(321.0, 123.0, Color::WHITE);
    document.add_element(ShapeElement::new(Circle::new(Point::new(0.0, 0.0), 1.0)));
    assert!(!document.load_markup("<svg><rect"));
    assert!(document.is_empty());
    assert_eq!(document.width(), 321.0);
    assert_eq!(document.height(), 123.0);
}

#[test]
fn test_parse_replaces_content() {
    let mut document = Document::new(10.0, 10.0, Color::parse("red"));
    document.add_element(ShapeElement::new(Circle::new(Point::new(0.0, 0.0), 1.0)));
    assert!(document.load_markup(
        "<svg width=\"40\" height=\"30\"><line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\"/></svg>"
    ));
    assert_eq!(document.len(), 1);
    assert_eq!((document.width(), document.height()), (40.0, 30.0));
    assert_eq!(document.background(), Color::WHITE);
}
