use lyon::path::Path;
use serde::Serialize;
use shapekit_core::{Arity, Color, GeometryConfig, GeometryError, GeometryResult, Point};

use super::{closed_path, move_vertices_to, DesignPolygon, DesignerShape};
use crate::geometry::{centroid, signed_area};
use crate::transform::Affine2;

/// Right triangle, built from its three vertices or from two bounding-box
/// corners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTriangle {
    vertices: [Point; 3],
    centroid: Point,
    pub color: Color,
}

impl DesignTriangle {
    /// Builds a triangle from 3 vertices, or from 2 corner points via
    /// [`DesignTriangle::from_corners`].
    pub fn new(points: &[Point], color: Color) -> GeometryResult<Self> {
        match *points {
            [a, b] => Ok(Self::from_corners(a, b, color)),
            [a, b, c] => Ok(Self::from_vertices([a, b, c], color)),
            _ => Err(GeometryError::InvalidArity {
                shape: "Triangle",
                expected: Arity::Either(2, 3),
                actual: points.len(),
            }),
        }
    }

    /// The right angle sits at `top_left`; the legs run along the two axes to
    /// the x and y of `bottom_right`.
    pub fn from_corners(top_left: Point, bottom_right: Point, color: Color) -> Self {
        Self::from_vertices(
            [
                top_left,
                Point::new(bottom_right.x, top_left.y),
                Point::new(top_left.x, bottom_right.y),
            ],
            color,
        )
    }

    pub fn from_vertices(vertices: [Point; 3], color: Color) -> Self {
        Self {
            centroid: centroid(&vertices),
            vertices,
            color,
        }
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    pub fn to_polygon(&self) -> DesignPolygon {
        DesignPolygon::from(self)
    }
}

impl DesignerShape for DesignTriangle {
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

    /// Area-sum test: the three sub-triangles formed with `p` add up to the
    /// whole area (within `containment_epsilon`) only when `p` is inside.
    fn hit_test(&self, p: Point, config: &GeometryConfig) -> bool {
        let [a, b, c] = self.vertices;
        let parts = signed_area(&[p, b, c]).abs()
            + signed_area(&[a, p, c]).abs()
            + signed_area(&[a, b, p]).abs();
        (parts - self.area()).abs() <= config.containment_epsilon
    }

    fn render(&self, _config: &GeometryConfig) -> Path {
        closed_path(&self.vertices)
    }
}
