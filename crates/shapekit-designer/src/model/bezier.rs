use lyon::geom::{point, CubicBezierSegment};
use lyon::path::Path;
use serde::Serialize;
use shapekit_core::{Arity, Color, GeometryConfig, GeometryError, GeometryResult, Point};

use super::{move_vertices_to, open_path, DesignerShape};
use crate::geometry::centroid;
use crate::transform::Affine2;

/// Cubic Bezier curve defined by exactly four control points.
///
/// The curve itself is never stored: [`DesignBezier::sample`] evaluates it on
/// demand for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignBezier {
    control_points: [Point; 4],
    centroid: Point,
    pub color: Color,
}

impl DesignBezier {
    pub fn new(points: &[Point], color: Color) -> GeometryResult<Self> {
        let control_points: [Point; 4] =
            points.try_into().map_err(|_| GeometryError::InvalidArity {
                shape: "Bezier",
                expected: Arity::Exactly(4),
                actual: points.len(),
            })?;
        Ok(Self {
            centroid: centroid(&control_points),
            control_points,
            color,
        })
    }

    fn segment(&self) -> CubicBezierSegment<f64> {
        let [p0, p1, p2, p3] = self.control_points;
        CubicBezierSegment {
            from: point(p0.x, p0.y),
            ctrl1: point(p1.x, p1.y),
            ctrl2: point(p2.x, p2.y),
            to: point(p3.x, p3.y),
        }
    }

    /// Evaluates the curve at `samples` evenly spaced parameters from 0 to 1
    /// inclusive. The first sample is the first control point and the last
    /// sample is the last control point.
    pub fn sample(&self, samples: usize) -> Vec<Point> {
        let segment = self.segment();
        let n = samples.max(2);
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let p = segment.sample(t);
                Point::new(p.x, p.y)
            })
            .collect()
    }
}

impl DesignerShape for DesignBezier {
    fn vertices(&self) -> &[Point] {
        &self.control_points
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
        t.apply_all(&mut self.control_points);
        self.centroid = centroid(&self.control_points);
    }

    fn move_to(&mut self, new_pos: Point) {
        move_vertices_to(&mut self.control_points, &mut self.centroid, new_pos);
    }

    /// Proximity to any control point; the curve itself is not tested.
    fn hit_test(&self, p: Point, config: &GeometryConfig) -> bool {
        self.control_points
            .iter()
            .any(|c| c.distance_to(&p) < config.bezier_pick_radius)
    }

    fn render(&self, config: &GeometryConfig) -> Path {
        open_path(&self.sample(config.bezier_samples))
    }
}
