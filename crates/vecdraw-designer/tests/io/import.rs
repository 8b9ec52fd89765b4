use vecdraw_designer::{AttributeValue, Color, Document, Point, Shape, ShapeType, TextAnchor};

fn import(markup: &str) -> Document {
    let mut document = Document::default();
    document
        .parse_markup(markup)
        .unwrap_or_else(|e| panic!("import failed: {}", e));
    document
}

#[test]
fn test_single_rect() {
    let document = import(
        r#"<svg width="400" height="300"><rect x="10" y="20" width="30" height="40" fill="blue"/></svg>"#,
    );
    assert_eq!((document.width(), document.height()), (400.0, 300.0));
    assert_eq!(document.len(), 1);

    let element = document.elements().next().unwrap();
    let Shape::Rectangle(rect) = &element.shape else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.top_left, Point::new(10.0, 20.0));
    assert_eq!((rect.width(), rect.height()), (30.0, 40.0));
    assert_eq!(element.style.fill, Color::rgb(0, 0, 255));
}

#[test]
fn test_invalid_markup_is_rejected() {
    let mut document = Document::default();
    for markup in [
        "",
        "not markup at all",
        "<svg><rect></svg>",
        "<html></html>",
        "<svg></svg><svg></svg>",
    ] {
        assert!(!document.load_markup(markup), "accepted {:?}", markup);
        assert!(document.is_empty());
    }
}

#[test]
fn test_unknown_elements_ignored() {
    let document = import(
        r#"<svg><defs><circle r="3"/></defs><foo bar="1"/><circle cx="1" cy="2" r="3"/><path d="M0 0"/></svg>"#,
    );
    assert_eq!(document.len(), 1);
    assert_eq!(
        document.elements().next().map(|e| e.shape_type()),
        Some(ShapeType::Circle)
    );
}

#[test]
fn test_missing_attributes_default_to_zero() {
    let document = import(r#"<svg><ellipse/><line x2="5"/></svg>"#);
    let shapes: Vec<&Shape> = document.elements().map(|e| &e.shape).collect();
    let Shape::Ellipse(ellipse) = shapes[0] else {
        panic!("expected an ellipse");
    };
    assert_eq!(ellipse.center, Point::new(0.0, 0.0));
    assert_eq!((ellipse.rx(), ellipse.ry()), (0.0, 0.0));
    let Shape::Line(line) = shapes[1] else {
        panic!("expected a line");
    };
    assert_eq!(line.start, Point::new(0.0, 0.0));
    assert_eq!(line.end, Point::new(5.0, 0.0));
}

#[test]
fn test_extension_attributes() {
    let document = import(
        r#"<svg><circle r="1" data-custom-num="42.5" data-custom-str="hello" data-int="7"/></svg>"#,
    );
    let style = &document.elements().next().unwrap().style;
    assert_eq!(
        style.extension("data-custom-num"),
        Some(&AttributeValue::Float(42.5))
    );
    assert_eq!(
        style.extension("data-custom-str"),
        Some(&AttributeValue::String("hello".into()))
    );
    // integers come back as floats
    assert_eq!(style.extension("data-int"), Some(&AttributeValue::Float(7.0)));
    assert!(style.extension("r").is_none());
}

#[test]
fn test_namespace_declarations_not_kept() {
    let document = import(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><circle xmlns="http://www.w3.org/2000/svg" r="1"/></svg>"#,
    );
    assert!(document.elements().next().unwrap().style.extensions().is_empty());
}

#[test]
fn test_colors_and_units() {
    let document = import(
        r##"<svg width="640px" height="480px"><rect width="10px" height="5" fill="olive" stroke="#00ff00" stroke-width="3px" opacity="0.5"/></svg>"##,
    );
    assert_eq!((document.width(), document.height()), (640.0, 480.0));
    let element = document.elements().next().unwrap();
    assert_eq!(element.style.fill, Color::rgb(128, 128, 0));
    assert_eq!(element.style.stroke, Color::rgb(0, 255, 0));
    assert_eq!(element.style.stroke_width(), 3.0);
    assert_eq!(element.style.opacity(), 0.5);
}

#[test]
fn test_background_rect() {
    let document = import(
        r#"<svg width="50" height="50"><rect width="100%" height="100%" fill="navy"/><rect width="100%" height="100%" fill="red"/></svg>"#,
    );
    assert_eq!(document.background(), Color::parse("navy"));
    // only the first full-size child is the background
    assert_eq!(document.len(), 1);
}

#[test]
fn test_groups_are_flattened() {
    let document = import(
        r#"<svg><g id="outer"><line x1="1"/><g><circle r="2"/></g></g><ellipse rx="1" ry="1"/></svg>"#,
    );
    let kinds: Vec<ShapeType> = document.elements().map(|e| e.shape_type()).collect();
    assert_eq!(
        kinds,
        vec![ShapeType::Line, ShapeType::Circle, ShapeType::Ellipse]
    );
}

#[test]
fn test_short_point_lists_skipped() {
    let document = import(
        r#"<svg><polygon points="0,0 1,1"/><polyline points="0,0"/><polyline points="0,0 5,5"/></svg>"#,
    );
    assert_eq!(document.len(), 1);
    assert_eq!(
        document.elements().next().map(|e| e.shape_type()),
        Some(ShapeType::Polyline)
    );
}

#[test]
fn test_text_attributes() {
    let document = import(
        r#"<svg><text x="5" y="6" font-family="Courier" font-size="18px" font-weight="700" font-style="italic" text-anchor="end" fill="red">a &amp; b</text></svg>"#,
    );
    let element = document.elements().next().unwrap();
    let text = element.shape.as_text().unwrap();
    assert_eq!(text.content, "a & b");
    assert_eq!(text.position, Point::new(5.0, 6.0));
    assert_eq!(text.font_family, "Courier");
    assert_eq!(text.font_size(), 18.0);
    assert!(text.bold);
    assert!(text.italic);
    assert_eq!(text.anchor, TextAnchor::End);
    assert_eq!(element.style.fill, Color::parse("red"));
}

#[test]
fn test_text_defaults() {
    let document = import(r#"<svg><text>plain</text></svg>"#);
    let text = document.elements().next().unwrap().shape.as_text().unwrap();
    assert_eq!(text.font_family, "Arial");
    assert_eq!(text.font_size(), 12.0);
    assert!(!text.bold && !text.italic);
    assert_eq!(text.anchor, TextAnchor::Start);
}
