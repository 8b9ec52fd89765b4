use proptest::prelude::*;
use std::f64::consts::PI;
use vecdraw_designer::model::regular::{regular_vertices, star_vertices};
use vecdraw_designer::{
    Circle, Color, Ellipse, Hexagon, Pentagon, Point, Rectangle, ShapeElement, ShapeType, Star,
    Text,
};

const EPS: f64 = 1e-9;

fn angle_of(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

fn normalized(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 2.0 * PI;
    }
    while angle >= 2.0 * PI {
        angle -= 2.0 * PI;
    }
    angle
}

fn assert_fixed_step(center: Point, points: &[Point], step: f64) {
    for pair in points.windows(2) {
        let delta = normalized(angle_of(center, pair[1]) - angle_of(center, pair[0]));
        assert!((delta - step).abs() < 1e-6, "step {} != {}", delta, step);
    }
}

#[test]
fn test_pentagon_geometry() {
    let center = Point::new(100.0, 80.0);
    let pentagon = Pentagon::new(center, 40.0);
    assert_eq!(pentagon.points().len(), 5);
    for p in pentagon.points() {
        assert!((p.distance_to(&center) - 40.0).abs() < EPS);
    }
    assert_fixed_step(center, pentagon.points(), 2.0 * PI / 5.0);
    assert!((angle_of(center, pentagon.points()[0]) + PI / 2.0).abs() < EPS);
}

#[test]
fn test_hexagon_geometry() {
    let center = Point::new(-5.0, 5.0);
    let hexagon = Hexagon::new(center, 12.0);
    assert_eq!(hexagon.points().len(), 6);
    assert_fixed_step(center, hexagon.points(), PI / 3.0);
    assert!(angle_of(center, hexagon.points()[0]).abs() < EPS);
}

#[test]
fn test_star_geometry() {
    let center = Point::new(0.0, 0.0);
    let star = Star::new(center, 20.0, 8.0, 6, 15.0);
    assert_eq!(star.points().len(), 12);
    assert_fixed_step(center, star.points(), PI / 6.0);
    assert!((angle_of(center, star.points()[0]) - 15f64.to_radians()).abs() < EPS);
}

#[test]
fn test_star_defaults() {
    let star = Star::five_pointed(Point::new(0.0, 0.0), 10.0, 5.0);
    assert_eq!(star.num_points(), 5);
    assert_eq!(star.start_angle(), -90.0);
}

#[test]
fn test_clamping_never_keeps_raw_input() {
    let mut rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
    rect.set_width(-10.0);
    assert_eq!(rect.width(), 0.0);

    let mut circle = Circle::new(Point::new(0.0, 0.0), 3.0);
    circle.set_radius(-1.0);
    assert_eq!(circle.radius(), 0.0);

    let mut ellipse = Ellipse::new(Point::new(0.0, 0.0), 3.0, 4.0);
    ellipse.set_ry(-4.0);
    assert_eq!(ellipse.ry(), 0.0);

    let mut element = ShapeElement::new(Text::new(Point::new(0.0, 0.0), "t"));
    element.style.set_stroke_width(-2.0);
    element.style.set_opacity(3.0);
    assert_eq!(element.style.stroke_width(), 0.0);
    assert_eq!(element.style.opacity(), 1.0);
}

#[test]
fn test_regular_kinds_serialize_as_polygons() {
    let element = ShapeElement::new(Hexagon::new(Point::new(0.0, 0.0), 1.0));
    assert_eq!(element.shape_type(), ShapeType::Hexagon);
    assert!(element.to_markup().starts_with("<polygon points=\"1,0 "));
}

#[test]
fn test_fill_none_when_transparent() {
    let element = ShapeElement::new(Circle::new(Point::new(1.0, 2.0), 3.0))
        .with_fill(Color::rgba(10, 10, 10, 0));
    assert!(element.to_markup().contains(" fill=\"none\""));
    assert!(!element.to_markup().contains("opacity"));
}

proptest! {
    #[test]
    fn prop_regular_vertices_on_circle(
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
        radius in 0.0f64..500.0,
        sides in 3u32..12,
        start in -360.0f64..360.0,
    ) {
        let center = Point::new(cx, cy);
        let points = regular_vertices(center, radius, sides, start);
        prop_assert_eq!(points.len(), sides as usize);
        for p in &points {
            prop_assert!((p.distance_to(&center) - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_star_alternates(
        outer in 1.0f64..300.0,
        inner in 0.0f64..300.0,
        n in 0u32..20,
    ) {
        let center = Point::new(3.0, -7.0);
        let points = star_vertices(center, outer, inner, n, -90.0);
        if n < 2 {
            prop_assert!(points.is_empty());
        } else {
            prop_assert_eq!(points.len(), 2 * n as usize);
            for (i, p) in points.iter().enumerate() {
                let expected = if i % 2 == 0 { outer } else { inner };
                prop_assert!((p.distance_to(&center) - expected).abs() < 1e-6);
            }
        }
    }
}
