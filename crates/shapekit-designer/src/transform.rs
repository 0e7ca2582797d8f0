//! Affine transforms in homogeneous coordinates.
//!
//! Rotation and scaling about an arbitrary center are expressed as
//! `translate(center) * op * translate(-center)` 3x3 matrices. Shapes never
//! cache a matrix: every call re-applies the transform to the current
//! vertices, so repeated gestures compose by repeated application.

use nalgebra::{Matrix3, Vector2, Vector3};
use shapekit_core::{Point, DEFAULT_DRAG_SENSITIVITY, DEFAULT_MIN_SCALE_FACTOR};

/// A 2D affine transform stored as a homogeneous 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    matrix: Matrix3<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new_translation(&Vector2::new(dx, dy)),
        }
    }

    /// Counter-clockwise rotation (Y up) by `angle_deg` degrees about `center`.
    pub fn rotation_about(angle_deg: f64, center: Point) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        #[rustfmt::skip]
        let rotation = Matrix3::new(
            c,  -s,  0.0,
            s,   c,  0.0,
            0.0, 0.0, 1.0,
        );
        Self::about(rotation, center)
    }

    /// Non-uniform scaling by `(sx, sy)` about `center`.
    pub fn scaling_about(sx: f64, sy: f64, center: Point) -> Self {
        let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy));
        Self::about(scale, center)
    }

    /// Mirror across the line through `a` and `b`; `None` when `a == b`.
    pub fn reflection_across(a: Point, b: Point) -> Option<Self> {
        let d = b - a;
        let len_sq = d.dot(&d);
        if len_sq == 0.0 {
            return None;
        }
        let ux = d.x * d.x / len_sq;
        let uy = d.y * d.y / len_sq;
        let uxy = d.x * d.y / len_sq;
        #[rustfmt::skip]
        let reflect = Matrix3::new(
            2.0 * ux - 1.0, 2.0 * uxy,      0.0,
            2.0 * uxy,      2.0 * uy - 1.0, 0.0,
            0.0,            0.0,            1.0,
        );
        Some(Self::about(reflect, a))
    }

    fn about(op: Matrix3<f64>, center: Point) -> Self {
        let to_origin = Matrix3::new_translation(&Vector2::new(-center.x, -center.y));
        let back = Matrix3::new_translation(&Vector2::new(center.x, center.y));
        Self {
            matrix: back * op * to_origin,
        }
    }

    /// Returns the transform that applies `self` first, then `next`.
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            matrix: next.matrix * self.matrix,
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn apply(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    pub fn apply_all(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.apply(*p);
        }
    }
}

/// Rotates `p` by `angle_deg` degrees about `center`.
pub fn rotate_point(p: Point, angle_deg: f64, center: Point) -> Point {
    Affine2::rotation_about(angle_deg, center).apply(p)
}

/// Scales `p` by `(sx, sy)` about `center`.
pub fn scale_point(p: Point, (sx, sy): (f64, f64), center: Point) -> Point {
    Affine2::scaling_about(sx, sy, center).apply(p)
}

/// Mirrors `p` across the line through `a` and `b` (identity when `a == b`).
pub fn reflect_point(p: Point, a: Point, b: Point) -> Point {
    Affine2::reflection_across(a, b).map_or(p, |t| t.apply(p))
}

/// Axis selection of the scale tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    /// Scale along X only (`sy = 1`).
    X,
    /// Uniform scale (`sx = sy`).
    XY,
}

/// Absolute bearing from `center` to `target`, in degrees.
pub fn angle_from_drag(center: Point, target: Point) -> f64 {
    (target.y - center.y).atan2(target.x - center.x).to_degrees()
}

/// Scale factor of a drag gesture with the default sensitivity and floor.
pub fn scale_factor_from_drag(center: Point, target: Point, axis: ScaleAxis) -> f64 {
    drag_scale_factor(
        center,
        target,
        axis,
        DEFAULT_DRAG_SENSITIVITY,
        DEFAULT_MIN_SCALE_FACTOR,
    )
}

/// `max(floor, distance / sensitivity)`, where the distance is `|dx|` for
/// [`ScaleAxis::X`] and the Euclidean distance for [`ScaleAxis::XY`].
pub fn drag_scale_factor(
    center: Point,
    target: Point,
    axis: ScaleAxis,
    sensitivity: f64,
    floor: f64,
) -> f64 {
    let distance = match axis {
        ScaleAxis::X => (target.x - center.x).abs(),
        ScaleAxis::XY => center.distance_to(&target),
    };
    floor.max(distance / sensitivity)
}
