use shapekit_core::GeometryError;
use shapekit_designer::geometry::signed_area;
use shapekit_designer::{convex_hull, Color, DesignPolygon, DesignerShape, Point};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_duplicate_point_is_deduplicated() {
    let hull = convex_hull(&[p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
    assert_eq!(hull, vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
}

#[test]
fn test_too_few_distinct_points() {
    let err = convex_hull(&[p(1.0, 1.0), p(1.0, 1.0), p(2.0, 2.0)]).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateResult { .. }));
    assert!(convex_hull(&[]).is_err());
}

#[test]
fn test_hull_is_counter_clockwise_from_lowest_point() {
    let points = vec![
        p(3.0, 3.0),
        p(0.0, 4.0),
        p(2.0, 1.0),
        p(6.0, 5.0),
        p(4.0, -1.0),
        p(1.0, 2.0),
        p(-1.0, 1.0),
    ];
    let hull = convex_hull(&points).unwrap();
    assert_eq!(hull[0], p(4.0, -1.0));
    assert!(signed_area(&hull) > 0.0);
    assert_eq!(
        hull,
        vec![p(4.0, -1.0), p(6.0, 5.0), p(0.0, 4.0), p(-1.0, 1.0)]
    );
}

#[test]
fn test_lowest_point_tie_breaks_on_x() {
    let hull = convex_hull(&[p(5.0, 0.0), p(0.0, 0.0), p(2.0, 3.0)]).unwrap();
    assert_eq!(hull[0], p(0.0, 0.0));
}

#[test]
fn test_hull_polygon_constructor() {
    let poly = DesignPolygon::convex_hull(
        &[p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0), p(4.0, 4.0), p(0.0, 4.0)],
        Color::GREEN,
    )
    .unwrap();
    assert_eq!(poly.vertices().len(), 4);
    assert_eq!(poly.color, Color::GREEN);
    assert_eq!(poly.area(), 16.0);
}
