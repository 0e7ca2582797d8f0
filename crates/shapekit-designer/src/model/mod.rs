use lyon::math::point;
use lyon::path::Path;
use serde::Serialize;
use shapekit_core::{Color, GeometryConfig, Point};

use crate::geometry;
use crate::transform::Affine2;

mod bezier;
mod polygon;
mod triangle;

pub use bezier::DesignBezier;
pub use polygon::DesignPolygon;
pub use triangle::DesignTriangle;

/// Capability set shared by every drawable shape.
///
/// Shapes keep their vertices in absolute canvas coordinates. Transforms are
/// applied to every vertex directly and the centroid is recomputed afterwards;
/// no matrix is ever cached on a shape.
pub trait DesignerShape {
    fn vertices(&self) -> &[Point];
    fn centroid(&self) -> Point;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    /// Applies `t` to every vertex and recomputes the centroid.
    fn transform(&mut self, t: &Affine2);

    /// Translates the shape so that its centroid is exactly `new_pos`.
    fn move_to(&mut self, new_pos: Point);

    fn hit_test(&self, p: Point, config: &GeometryConfig) -> bool;
    fn render(&self, config: &GeometryConfig) -> Path;

    /// Points at which the UI draws selection markers.
    fn selection_handles(&self) -> Vec<Point> {
        self.vertices().to_vec()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        geometry::bounds(self.vertices())
    }

    fn contains_point(&self, p: Point) -> bool {
        self.hit_test(p, &GeometryConfig::default())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform(&Affine2::translation(dx, dy));
    }

    fn rotate(&mut self, angle_deg: f64, center: Point) {
        self.transform(&Affine2::rotation_about(angle_deg, center));
    }

    fn scale_x(&mut self, sx: f64, center: Point) {
        self.transform(&Affine2::scaling_about(sx, 1.0, center));
    }

    fn scale_xy(&mut self, s: f64, center: Point) {
        self.transform(&Affine2::scaling_about(s, s, center));
    }

    /// Mirrors the shape across the line through `a` and `b`.
    fn reflect(&mut self, a: Point, b: Point) {
        if let Some(t) = Affine2::reflection_across(a, b) {
            self.transform(&t);
        }
    }
}

/// Shared body of `move_to`: translate by the centroid delta, then pin the
/// centroid so repeated drags do not accumulate rounding drift.
fn move_vertices_to(vertices: &mut [Point], centroid: &mut Point, new_pos: Point) {
    let delta = new_pos - *centroid;
    Affine2::translation(delta.x, delta.y).apply_all(vertices);
    *centroid = new_pos;
}

fn closed_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in iter {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.close();
    }
    builder.build()
}

fn open_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in iter {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(false);
    }
    builder.build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeType {
    Polygon,
    Triangle,
    Bezier,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Polygon => write!(f, "Polygon"),
            ShapeType::Triangle => write!(f, "Triangle"),
            ShapeType::Bezier => write!(f, "Bezier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Polygon(DesignPolygon),
    Triangle(DesignTriangle),
    Bezier(DesignBezier),
}

impl DesignerShape for Shape {
    fn vertices(&self) -> &[Point] {
        match self {
            Shape::Polygon(s) => s.vertices(),
            Shape::Triangle(s) => s.vertices(),
            Shape::Bezier(s) => s.vertices(),
        }
    }

    fn centroid(&self) -> Point {
        match self {
            Shape::Polygon(s) => s.centroid(),
            Shape::Triangle(s) => s.centroid(),
            Shape::Bezier(s) => s.centroid(),
        }
    }

    fn color(&self) -> Color {
        match self {
            Shape::Polygon(s) => s.color(),
            Shape::Triangle(s) => s.color(),
            Shape::Bezier(s) => s.color(),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            Shape::Polygon(s) => s.set_color(color),
            Shape::Triangle(s) => s.set_color(color),
            Shape::Bezier(s) => s.set_color(color),
        }
    }

    fn transform(&mut self, t: &Affine2) {
        match self {
            Shape::Polygon(s) => s.transform(t),
            Shape::Triangle(s) => s.transform(t),
            Shape::Bezier(s) => s.transform(t),
        }
    }

    fn move_to(&mut self, new_pos: Point) {
        match self {
            Shape::Polygon(s) => s.move_to(new_pos),
            Shape::Triangle(s) => s.move_to(new_pos),
            Shape::Bezier(s) => s.move_to(new_pos),
        }
    }

    fn hit_test(&self, p: Point, config: &GeometryConfig) -> bool {
        match self {
            Shape::Polygon(s) => s.hit_test(p, config),
            Shape::Triangle(s) => s.hit_test(p, config),
            Shape::Bezier(s) => s.hit_test(p, config),
        }
    }

    fn render(&self, config: &GeometryConfig) -> Path {
        match self {
            Shape::Polygon(s) => s.render(config),
            Shape::Triangle(s) => s.render(config),
            Shape::Bezier(s) => s.render(config),
        }
    }

    fn selection_handles(&self) -> Vec<Point> {
        match self {
            Shape::Polygon(s) => s.selection_handles(),
            Shape::Triangle(s) => s.selection_handles(),
            Shape::Bezier(s) => s.selection_handles(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Bezier(_) => ShapeType::Bezier,
        }
    }

    /// Polygon view of a polygon-shaped entity, used as a boolean operand.
    ///
    /// Returns `None` for Bezier curves, which have no closed outline.
    pub fn to_polygon(&self) -> Option<DesignPolygon> {
        match self {
            Shape::Polygon(s) => Some(s.clone()),
            Shape::Triangle(s) => Some(s.to_polygon()),
            Shape::Bezier(_) => None,
        }
    }
}

impl From<DesignPolygon> for Shape {
    fn from(s: DesignPolygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<DesignTriangle> for Shape {
    fn from(s: DesignTriangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<DesignBezier> for Shape {
    fn from(s: DesignBezier) -> Self {
        Shape::Bezier(s)
    }
}
