use shapekit_designer::geometry::{
    centroid, point_in_polygon, polygon_area, segment_intersection_point,
    segment_intersection_point_with, signed_area,
};
use shapekit_designer::{segments_intersect, Point};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square_a() -> Vec<Point> {
    vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
}

#[test]
fn test_offset_square_edges() {
    // Bottom edge of A and bottom edge of B are parallel and disjoint.
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(10.0, 0.0),
        p(5.0, 5.0),
        p(15.0, 5.0)
    ));
    // Right edge of A crosses bottom edge of B at (10, 5).
    assert!(segments_intersect(
        p(10.0, 0.0),
        p(10.0, 10.0),
        p(5.0, 5.0),
        p(15.0, 5.0)
    ));
    let hit = segment_intersection_point(p(10.0, 0.0), p(10.0, 10.0), p(5.0, 5.0), p(15.0, 5.0));
    assert_eq!(hit, Some(p(10.0, 5.0)));
}

#[test]
fn test_collinear_overlap_is_not_an_intersection() {
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(10.0, 0.0),
        p(5.0, 0.0),
        p(15.0, 0.0)
    ));
    assert_eq!(
        segment_intersection_point(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.0), p(15.0, 0.0)),
        None
    );
}

#[test]
fn test_intersection_point_respects_threshold() {
    // Nearly parallel segments that do cross: the determinant is tiny.
    let a1 = p(0.0, 0.0);
    let a2 = p(1.0, 1e-7);
    let b1 = p(0.0, 1e-7);
    let b2 = p(1.0, 0.0);
    assert!(segment_intersection_point_with(a1, a2, b1, b2, 1e-12).is_some());
    assert!(segment_intersection_point_with(a1, a2, b1, b2, 1e-3).is_none());
}

#[test]
fn test_point_in_polygon_vertex_rows() {
    let square = square_a();
    assert!(point_in_polygon(&square, p(5.0, 5.0)));
    assert!(!point_in_polygon(&square, p(-1.0, 5.0)));
    assert!(!point_in_polygon(&square, p(11.0, 5.0)));

    // A ray through the apex of a diamond must not count the apex twice.
    let diamond = vec![p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0), p(0.0, 5.0)];
    assert!(point_in_polygon(&diamond, p(2.0, 5.0)));
    assert!(!point_in_polygon(&diamond, p(-2.0, 5.0)));
    assert!(!point_in_polygon(&diamond, p(12.0, 5.0)));
    assert!(!point_in_polygon(&diamond, p(0.0, 10.0)));
}

#[test]
fn test_degenerate_polygon_contains_nothing() {
    assert!(!point_in_polygon(&[p(0.0, 0.0), p(1.0, 1.0)], p(0.5, 0.5)));
}

#[test]
fn test_centroid_is_vertex_mean() {
    let pts = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 5.0)];
    // Mean of the vertices, not the area centroid (5, 5).
    assert_eq!(centroid(&pts), p(4.0, 5.0));
    assert_eq!(centroid(&[]), Point::default());
}

#[test]
fn test_area_and_winding() {
    let square = square_a();
    assert_eq!(signed_area(&square), 100.0);
    let reversed: Vec<Point> = square.iter().rev().copied().collect();
    assert_eq!(signed_area(&reversed), -100.0);
    assert_eq!(polygon_area(&reversed), 100.0);
}
