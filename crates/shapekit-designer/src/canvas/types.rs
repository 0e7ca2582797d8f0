//! Canvas type definitions: DrawingMode, DrawingObject, TransformAnchor.

use serde::Serialize;
use shapekit_core::{GeometryConfig, Point};

use crate::model::{DesignerShape, Shape};

/// Editing tools. Each one interprets clicks differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Bezier,
    Triangle,
    Polygon,
    Move,
    Rotate,
    ScaleX,
    ScaleXY,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 8] = [
        DrawingMode::Select,
        DrawingMode::Bezier,
        DrawingMode::Triangle,
        DrawingMode::Polygon,
        DrawingMode::Move,
        DrawingMode::Rotate,
        DrawingMode::ScaleX,
        DrawingMode::ScaleXY,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DrawingMode::Select => "select",
            DrawingMode::Bezier => "bezier",
            DrawingMode::Triangle => "triangle",
            DrawingMode::Polygon => "polygon",
            DrawingMode::Move => "move",
            DrawingMode::Rotate => "rotate",
            DrawingMode::ScaleX => "scale_x",
            DrawingMode::ScaleXY => "scale_xy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// True for the tools that collect a center and a target point.
    pub fn is_transform(&self) -> bool {
        matches!(
            self,
            DrawingMode::Rotate | DrawingMode::ScaleX | DrawingMode::ScaleXY
        )
    }
}

impl std::fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Drawing object on the canvas that can be selected and manipulated.
#[derive(Debug, Clone, Serialize)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
    pub selected: bool,
}

impl DrawingObject {
    /// Creates a new drawing object named after its shape kind and id.
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            name: format!("{} {}", shape.shape_type(), id),
            shape,
            selected: false,
        }
    }

    pub fn contains_point(&self, point: Point, config: &GeometryConfig) -> bool {
        self.shape.hit_test(point, config)
    }
}

/// Points picked so far for a rotate or scale gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformAnchor {
    center: Option<Point>,
}

impl TransformAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pick. The first pick is the center; the second completes the
    /// anchor, returning `(center, target)` and resetting it.
    pub fn push(&mut self, p: Point) -> Option<(Point, Point)> {
        match self.center.take() {
            Some(center) => Some((center, p)),
            None => {
                self.center = Some(p);
                None
            }
        }
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn is_empty(&self) -> bool {
        self.center.is_none()
    }

    pub fn clear(&mut self) {
        self.center = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_completes_on_second_pick() {
        let mut anchor = TransformAnchor::new();
        assert_eq!(anchor.push(Point::new(1.0, 1.0)), None);
        assert_eq!(anchor.center(), Some(Point::new(1.0, 1.0)));
        assert_eq!(
            anchor.push(Point::new(4.0, 5.0)),
            Some((Point::new(1.0, 1.0), Point::new(4.0, 5.0)))
        );
        assert!(anchor.is_empty());
    }

    #[test]
    fn test_mode_names() {
        for mode in DrawingMode::ALL {
            assert_eq!(DrawingMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(DrawingMode::from_name("SCALE_XY"), Some(DrawingMode::ScaleXY));
        assert_eq!(DrawingMode::from_name("lasso"), None);
    }
}
