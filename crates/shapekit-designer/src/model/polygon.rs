use lyon::path::Path;
use serde::Serialize;
use shapekit_core::{Arity, Color, GeometryConfig, GeometryError, GeometryResult, Point};

use super::{closed_path, move_vertices_to, DesignTriangle, DesignerShape};
use crate::geometry::{centroid, point_in_polygon, polygon_area};
use crate::hull;
use crate::transform::Affine2;

/// Closed polygon with at least three vertices, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignPolygon {
    vertices: Vec<Point>,
    centroid: Point,
    pub color: Color,
}

impl DesignPolygon {
    pub fn new(vertices: Vec<Point>, color: Color) -> GeometryResult<Self> {
        let expected = Arity::AtLeast(3);
        if !expected.accepts(vertices.len()) {
            return Err(GeometryError::InvalidArity {
                shape: "Polygon",
                expected,
                actual: vertices.len(),
            });
        }
        let centroid = centroid(&vertices);
        Ok(Self {
            vertices,
            centroid,
            color,
        })
    }

    /// Convex hull of an unordered point set as a polygon.
    pub fn convex_hull(points: &[Point], color: Color) -> GeometryResult<Self> {
        Self::new(hull::convex_hull(points)?, color)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }
}

impl From<&DesignTriangle> for DesignPolygon {
    fn from(triangle: &DesignTriangle) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
            centroid: triangle.centroid(),
            color: triangle.color,
        }
    }
}

impl DesignerShape for DesignPolygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn centroid(&self) -> Point {
        self.centroid
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn transform(&mut self, t: &Affine2) {
        t.apply_all(&mut self.vertices);
        self.centroid = centroid(&self.vertices);
    }

    fn move_to(&mut self, new_pos: Point) {
        move_vertices_to(&mut self.vertices, &mut self.centroid, new_pos);
    }

    fn hit_test(&self, p: Point, _config: &GeometryConfig) -> bool {
        point_in_polygon(&self.vertices, p)
    }

    fn render(&self, _config: &GeometryConfig) -> Path {
        closed_path(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DesignPolygon {
        DesignPolygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            Color::RED,
        )
        .unwrap()
    }

    #[test]
    fn test_polygon_requires_three_points() {
        let err = DesignPolygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)], Color::RED)
            .unwrap_err();
        assert_eq!(err.to_string(), "Polygon requires at least 3 points, got 2");
    }

    #[test]
    fn test_move_pins_centroid() {
        let mut poly = square();
        assert_eq!(poly.centroid(), Point::new(5.0, 5.0));
        poly.move_to(Point::new(0.1, 0.7));
        assert_eq!(poly.centroid(), Point::new(0.1, 0.7));
        assert!(poly.vertices()[0].approx_eq(&Point::new(-4.9, -4.3), 1e-12));
    }

    #[test]
    fn test_rotate_recomputes_centroid() {
        let mut poly = square();
        poly.rotate(90.0, Point::new(0.0, 0.0));
        assert!(poly.centroid().approx_eq(&Point::new(-5.0, 5.0), 1e-9));
        assert!((poly.area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test() {
        let poly = square();
        assert!(poly.contains_point(Point::new(5.0, 5.0)));
        assert!(!poly.contains_point(Point::new(15.0, 5.0)));
    }
}
