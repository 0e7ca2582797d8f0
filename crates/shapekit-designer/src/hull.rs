//! Graham-scan convex hull.

use std::cmp::Ordering;

use shapekit_core::{GeometryError, GeometryResult, Point};

const OPERATION: &str = "convex hull";

/// Convex hull of an unordered point set.
///
/// Exact duplicate points are merged before the scan. Collinear boundary
/// points are excluded, so the result holds only extreme points, in
/// counter-clockwise order (Y up), starting at the lowest (then leftmost)
/// point and without a repeated closing vertex.
///
/// Fails with `DegenerateResult` when fewer than 3 distinct points remain or
/// all points are collinear.
pub fn convex_hull(points: &[Point]) -> GeometryResult<Vec<Point>> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.contains(p) {
            unique.push(*p);
        }
    }
    if unique.len() < 3 {
        return Err(GeometryError::degenerate(
            OPERATION,
            format!("{} distinct points, need at least 3", unique.len()),
        ));
    }

    let pivot_index = unique
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.y.partial_cmp(&b.y)
                .unwrap_or(Ordering::Equal)
                .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    let pivot = unique.swap_remove(pivot_index);

    // Polar angle around the pivot, nearer points first on equal angles.
    unique.sort_by(|a, b| {
        let angle_a = (a.y - pivot.y).atan2(a.x - pivot.x);
        let angle_b = (b.y - pivot.y).atan2(b.x - pivot.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                pivot
                    .distance_to(a)
                    .partial_cmp(&pivot.distance_to(b))
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut hull: Vec<Point> = Vec::with_capacity(unique.len() + 1);
    hull.push(pivot);
    for p in unique {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        return Err(GeometryError::degenerate(OPERATION, "all points are collinear"));
    }
    Ok(hull)
}

/// Cross product of `a - o` and `b - o`; positive for a left turn.
fn turn(o: Point, a: Point, b: Point) -> f64 {
    (a - o).cross(&(b - o))
}
