use lyon::path::Event;
use shapekit_core::{Arity, GeometryConfig, GeometryError};
use shapekit_designer::{
    Color, DesignBezier, DesignPolygon, DesignTriangle, DesignerShape, Point, Shape, ShapeType,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn collinear_bezier() -> DesignBezier {
    DesignBezier::new(
        &[p(0.0, 0.0), p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)],
        Color::BLUE,
    )
    .unwrap()
}

#[test]
fn test_construction_arity() {
    let err = DesignPolygon::new(vec![p(0.0, 0.0), p(1.0, 1.0)], Color::RED).unwrap_err();
    assert_eq!(
        err,
        GeometryError::InvalidArity {
            shape: "Polygon",
            expected: Arity::AtLeast(3),
            actual: 2
        }
    );
    assert!(DesignTriangle::new(&[p(0.0, 0.0); 4], Color::RED).is_err());
    assert!(DesignBezier::new(&[p(0.0, 0.0); 4], Color::RED).is_ok());
    assert!(DesignBezier::new(&[], Color::RED).is_err());
}

#[test]
fn test_collinear_bezier_is_straight() {
    let curve = collinear_bezier();
    let samples = curve.sample(100);
    for s in &samples {
        assert!((s.x - s.y).abs() < 1e-9, "{} is off the line", s);
    }
}

#[test]
fn test_bezier_sampling_is_deterministic_and_monotone() {
    let curve = collinear_bezier();
    let config = GeometryConfig::default();
    let samples = curve.sample(config.bezier_samples);
    assert_eq!(samples.len(), 100);
    assert_eq!(samples, curve.sample(config.bezier_samples));
    assert_eq!(samples[0], p(0.0, 0.0));
    assert!(samples[99].approx_eq(&p(30.0, 30.0), 1e-9));
    for pair in samples.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn test_bezier_render_is_an_open_polyline() {
    let curve = collinear_bezier();
    let mut config = GeometryConfig::default();
    config.bezier_samples = 8;
    let path = curve.render(&config);
    let lines = path
        .iter()
        .filter(|e| matches!(e, Event::Line { .. }))
        .count();
    assert_eq!(lines, 7);
    assert!(path
        .iter()
        .any(|e| matches!(e, Event::End { close: false, .. })));
}

#[test]
fn test_polygon_render_is_closed() {
    let poly = DesignPolygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0)], Color::RED).unwrap();
    let path = poly.render(&GeometryConfig::default());
    assert!(path
        .iter()
        .any(|e| matches!(e, Event::End { close: true, .. })));
}

#[test]
fn test_rotate_then_move_keeps_shape() {
    let mut shape = Shape::Triangle(DesignTriangle::from_corners(
        p(0.0, 0.0),
        p(6.0, 3.0),
        Color::BLACK,
    ));
    shape.rotate(30.0, p(1.0, 1.0));
    shape.move_to(p(50.0, 50.0));
    assert_eq!(shape.centroid(), p(50.0, 50.0));

    let v = shape.vertices();
    assert!((v[0].distance_to(&v[1]) - 6.0).abs() < 1e-9);
    assert!((v[0].distance_to(&v[2]) - 3.0).abs() < 1e-9);
}

#[test]
fn test_scale_updates_centroid() {
    let mut poly = DesignPolygon::new(
        vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)],
        Color::RED,
    )
    .unwrap();
    poly.scale_x(3.0, p(0.0, 0.0));
    assert_eq!(poly.bounds(), (0.0, 0.0, 6.0, 2.0));
    assert_eq!(poly.centroid(), p(3.0, 1.0));

    poly.scale_xy(0.5, p(0.0, 0.0));
    assert_eq!(poly.bounds(), (0.0, 0.0, 3.0, 1.0));
}

#[test]
fn test_reflect_triangle() {
    let mut tri = DesignTriangle::from_corners(p(1.0, 1.0), p(3.0, 4.0), Color::RED);
    tri.reflect(p(0.0, 0.0), p(0.0, 1.0));
    assert_eq!(tri.bounds(), (-3.0, 1.0, -1.0, 4.0));

    // A degenerate mirror line leaves the shape alone.
    let before = tri.clone();
    tri.reflect(p(2.0, 2.0), p(2.0, 2.0));
    assert_eq!(tri, before);
}

#[test]
fn test_bezier_moves_by_control_point_centroid() {
    let mut curve = Shape::Bezier(collinear_bezier());
    assert_eq!(curve.centroid(), p(15.0, 15.0));
    curve.move_to(p(0.0, 0.0));
    assert_eq!(curve.vertices()[0], p(-15.0, -15.0));
    assert_eq!(curve.selection_handles().len(), 4);
}

#[test]
fn test_polygonal_view() {
    let tri = Shape::Triangle(DesignTriangle::from_corners(p(0.0, 0.0), p(2.0, 2.0), Color::RED));
    assert_eq!(tri.shape_type(), ShapeType::Triangle);
    let poly = tri.to_polygon().unwrap();
    assert_eq!(poly.vertices(), tri.vertices());
    assert_eq!(poly.color, Color::RED);

    assert!(Shape::Bezier(collinear_bezier()).to_polygon().is_none());
}
