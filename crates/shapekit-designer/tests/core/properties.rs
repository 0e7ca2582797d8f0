use proptest::prelude::*;
use shapekit_designer::geometry::signed_area;
use shapekit_designer::{
    convex_hull, rotate_point, scale_point, Color, DesignTriangle, DesignerShape, Point,
};

fn coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn rotation_by_zero_is_identity(p in point(), c in point()) {
        prop_assert!(rotate_point(p, 0.0, c).approx_eq(&p, 1e-9));
    }

    #[test]
    fn rotation_round_trips(p in point(), c in point(), angle in -720.0f64..720.0) {
        let back = rotate_point(rotate_point(p, angle, c), -angle, c);
        prop_assert!(back.approx_eq(&p, 1e-6));
    }

    #[test]
    fn unit_scale_is_identity(p in point(), c in point()) {
        prop_assert!(scale_point(p, (1.0, 1.0), c).approx_eq(&p, 1e-9));
    }

    #[test]
    fn triangle_contains_interior_points(
        corner in point(),
        w in 1.0f64..200.0,
        h in 1.0f64..200.0,
        u in 0.05f64..0.9,
        v in 0.05f64..0.9,
    ) {
        prop_assume!(u + v < 0.95);
        let tri = DesignTriangle::from_corners(
            corner,
            Point::new(corner.x + w, corner.y + h),
            Color::BLACK,
        );
        // Barycentric interior point along the two legs.
        let inside = Point::new(corner.x + u * w, corner.y + v * h);
        prop_assert!(tri.contains_point(inside));
    }

    #[test]
    fn triangle_rejects_points_beyond_hypotenuse(
        corner in point(),
        w in 1.0f64..200.0,
        h in 1.0f64..200.0,
        u in 0.1f64..0.9,
    ) {
        let tri = DesignTriangle::from_corners(
            corner,
            Point::new(corner.x + w, corner.y + h),
            Color::BLACK,
        );
        // Normalised leg coordinates sum to 2, well past the hypotenuse.
        let outside = Point::new(corner.x + u * w + 0.5 * w, corner.y + (1.0 - u) * h + 0.5 * h);
        prop_assert!(!tri.contains_point(outside));
        prop_assert!(!tri.contains_point(Point::new(corner.x - 1.0, corner.y + 0.5 * h)));
    }

    #[test]
    fn hull_of_regular_polygon_is_the_polygon(
        center in point(),
        radius in 1.0f64..500.0,
        n in 3usize..24,
        phase in 0.0f64..std::f64::consts::TAU,
        interior in prop::collection::vec((0.0f64..0.45, 0.0f64..std::f64::consts::TAU), 0..20),
    ) {
        let mut points: Vec<Point> = (0..n)
            .map(|i| {
                let theta = phase + std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
            })
            .collect();
        let extremes = points.clone();
        for (r, theta) in interior {
            points.push(Point::new(
                center.x + radius * r * theta.cos(),
                center.y + radius * r * theta.sin(),
            ));
        }

        let hull = convex_hull(&points).unwrap();
        prop_assert_eq!(hull.len(), n);
        prop_assert!(signed_area(&hull) > 0.0);
        for p in &hull {
            prop_assert!(extremes.contains(p));
        }
    }
}
