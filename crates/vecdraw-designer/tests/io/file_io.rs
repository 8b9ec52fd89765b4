use std::fs;
use tempfile::tempdir;
use vecdraw_designer::{
    read_document, write_document, Circle, Color, Document, Engine, FileIo, Point, ShapeElement,
};

fn sample() -> Document {
    let mut document = Document::new(120.0, 80.0, Color::parse("yellow"));
    document.add_element(ShapeElement::new(Circle::new(Point::new(5.0, 5.0), 4.0)).with_id("c"));
    document
}

#[test]
fn test_save_then_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    let mut io = FileIo::new();

    assert!(io.save_file(&path, &sample()));
    assert!(io.last_error().is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), sample().generate_markup());

    let mut document = Document::default();
    assert!(io.open_file(&path, &mut document));
    assert_eq!(document.width(), 120.0);
    assert_eq!(document.background(), Color::parse("yellow"));
    assert!(document.find_by_id("c").is_some());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    fs::write(&path, "old content that is much longer than the new one ".repeat(50)).unwrap();

    write_document(&Document::default(), &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.ends_with("</svg>"));
    // no temporary files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.svg");
    let mut io = FileIo::new();
    let mut document = sample();

    assert!(!io.open_file(&path, &mut document));
    assert!(io.last_error().unwrap().starts_with("Cannot open file: "));
    assert_eq!(document.len(), 1);
    assert_eq!(document.width(), 120.0);
}

#[test]
fn test_open_unparseable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.svg");
    fs::write(&path, "<svg><rect></svg>").unwrap();
    let mut io = FileIo::new();
    let mut document = sample();

    assert!(!io.open_file(&path, &mut document));
    assert!(io
        .last_error()
        .unwrap()
        .starts_with("Cannot parse SVG file content"));
    assert!(document.find_by_id("c").is_some());
    assert!(read_document(&path).is_err());
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.svg");
    let mut io = FileIo::new();

    assert!(!io.save_file(&path, &sample()));
    assert!(io
        .last_error()
        .unwrap()
        .starts_with("Cannot open file for writing: "));
    assert!(!path.exists());
}

#[test]
fn test_success_clears_last_error() {
    let dir = tempdir().unwrap();
    let mut io = FileIo::new();
    let mut document = Document::default();
    assert!(!io.open_file(&dir.path().join("missing.svg"), &mut document));
    assert!(io.last_error().is_some());
    assert!(io.save_file(&dir.path().join("ok.svg"), &document));
    assert!(io.last_error().is_none());
}

#[test]
fn test_engine_replaces_document_only_on_success() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.svg");
    write_document(&sample(), &good).unwrap();

    let mut engine = Engine::new();
    let before = engine.document();
    assert!(engine.load_file(&good));
    assert_eq!(engine.document().borrow().len(), 1);
    assert!(!std::rc::Rc::ptr_eq(&before, &engine.document()));

    let current = engine.document();
    assert!(!engine.load_file(&dir.path().join("missing.svg")));
    assert!(std::rc::Rc::ptr_eq(&current, &engine.document()));
    assert!(engine.last_error().is_some());

    engine.create_new_document(10.0, 20.0, Color::WHITE);
    assert_eq!(engine.document().borrow().height(), 20.0);
    assert!(engine.document().borrow().is_empty());
    assert!(engine.save_file(&dir.path().join("new.svg")));
}
