//! Geometry primitives: orientation tests, segment intersection,
//! point-in-polygon and centroid helpers.
//!
//! All functions are pure and work on plain point slices; polygons are
//! implicitly closed (the last vertex connects back to the first).

use shapekit_core::{Point, DEFAULT_COLLINEAR_EPSILON};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Sign of the cross product `(q - p) × (r - q)`.
///
/// Exactly zero is collinear; no tolerance is applied.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q - p).cross(&(r - q));
    if val > 0.0 {
        Orientation::CounterClockwise
    } else if val < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns true when segment `a1-a2` and segment `b1-b2` straddle each other.
///
/// Fully collinear (overlapping or not) segments are reported as
/// non-intersecting.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    o1 != o2 && o3 != o4
}

/// Crossing point of two segments, if they intersect and are not parallel.
pub fn segment_intersection_point(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    segment_intersection_point_with(a1, a2, b1, b2, DEFAULT_COLLINEAR_EPSILON)
}

/// [`segment_intersection_point`] with an explicit near-zero determinant threshold.
pub fn segment_intersection_point_with(
    a1: Point,
    a2: Point,
    b1: Point,
    b2: Point,
    collinear_epsilon: f64,
) -> Option<Point> {
    if !segments_intersect(a1, a2, b1, b2) {
        return None;
    }

    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let denom = d1.cross(&d2);
    if denom.abs() < collinear_epsilon {
        return None;
    }

    let t = (b1 - a1).cross(&d2) / denom;
    Some(a1 + d1 * t)
}

/// Ray-casting point-in-polygon test.
///
/// A horizontal ray is cast towards +X. An edge counts as crossed when
/// exactly one of its endpoints lies strictly above the ray, so horizontal
/// edges on the ray are skipped and a vertex on the ray counts only when the
/// other endpoint of the edge is above it.
pub fn point_in_polygon(polygon: &[Point], point: Point) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of the points (not the area-weighted centroid).
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::default(), |acc, p| acc + *p);
    Point::new(sum.x / n, sum.y / n)
}

/// Shoelace signed area; positive for counter-clockwise winding (Y up).
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| polygon[i].cross(&polygon[(i + 1) % n]))
        .sum();
    twice / 2.0
}

pub fn polygon_area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
pub fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// True when any edge of `a` crosses any edge of `b`.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    edges(a).any(|(a1, a2)| edges(b).any(|(b1, b2)| segments_intersect(a1, a2, b1, b2)))
}

/// All crossing points between the edges of `a` and the edges of `b`.
pub fn intersection_points(a: &[Point], b: &[Point]) -> Vec<Point> {
    let mut points = Vec::new();
    for (a1, a2) in edges(a) {
        for (b1, b2) in edges(b) {
            if let Some(p) = segment_intersection_point(a1, a2, b1, b2) {
                points.push(p);
            }
        }
    }
    points
}

/// True when two non-adjacent edges of the polygon cross each other.
pub fn is_self_intersecting(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        let (a1, a2) = (polygon[i], polygon[(i + 1) % n]);
        for j in (i + 2)..n {
            // Edge n-1 shares vertex 0 with edge 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (polygon[j], polygon[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}
