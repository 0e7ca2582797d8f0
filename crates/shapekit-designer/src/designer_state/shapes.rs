//! Shape operations (create, delete, clear, booleans) for designer state.

use shapekit_core::{Arity, EditorError, EditorResult, GeometryError, Point, Result};
use tracing::info;

use super::DesignerState;
use crate::canvas::DrawingMode;
use crate::model::{DesignBezier, DesignPolygon, DesignTriangle, DesignerShape, Shape};
use crate::ops::{perform_boolean, BooleanOp};

impl DesignerState {
    /// Records a point for the active creation tool and commits the shape
    /// once the tool's arity is reached.
    pub(super) fn add_pending_point(&mut self, point: Point) -> Result<()> {
        self.pending.push(point);
        let count = self.pending.len();
        match self.tool() {
            DrawingMode::Bezier if count == 4 => {
                let curve = DesignBezier::new(&self.pending, self.current_color)?;
                self.commit(Shape::Bezier(curve));
            }
            DrawingMode::Bezier => self.status = format!("Point {}/4", count),
            DrawingMode::Triangle if count == 2 => {
                let triangle = DesignTriangle::new(&self.pending, self.current_color)?;
                self.commit(Shape::Triangle(triangle));
            }
            DrawingMode::Triangle => self.status = format!("Point {}/2", count),
            _ => self.status = format!("Vertex {}, close to finish", count),
        }
        Ok(())
    }

    /// Closes the polygon being drawn. Needs at least three pending points.
    pub fn finish_polygon(&mut self) -> Result<u64> {
        let result = self.try_finish_polygon();
        self.report(result)
    }

    fn try_finish_polygon(&mut self) -> Result<u64> {
        // Points picked with another tool never count towards a polygon.
        let count = if self.tool() == DrawingMode::Polygon {
            self.pending.len()
        } else {
            0
        };
        if count < 3 {
            return Err(GeometryError::InvalidArity {
                shape: "Polygon",
                expected: Arity::AtLeast(3),
                actual: count,
            }
            .into());
        }
        let polygon = DesignPolygon::new(self.pending.clone(), self.current_color)?;
        Ok(self.commit(Shape::Polygon(polygon)))
    }

    fn commit(&mut self, shape: Shape) -> u64 {
        let kind = shape.shape_type();
        let id = self.canvas.add_shape(shape);
        self.pending.clear();
        info!("Created {} {}", kind, id);
        self.status = format!("{} created", kind);
        id
    }

    /// Deletes the selected shape(s).
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.canvas.remove_selected();
        if !removed.is_empty() {
            info!("Deleted {} shapes", removed.len());
        }
        self.drag_offsets = None;
        self.status = format!("Deleted {} shapes", removed.len());
        removed.len()
    }

    /// Removes every shape and any in-progress gesture.
    pub fn clear_canvas(&mut self) {
        let count = self.canvas.shape_count();
        self.canvas.clear();
        self.pending.clear();
        self.anchor.clear();
        self.drag_offsets = None;
        info!("Cleared canvas ({} shapes)", count);
        self.status = "Canvas cleared".to_string();
    }

    /// Replaces the two selected polygon-shaped entities with the result of
    /// `op`, which becomes the sole selection.
    ///
    /// On failure the canvas and the selection are left unchanged.
    pub fn apply_boolean(&mut self, op: BooleanOp) -> Result<u64> {
        let result = self.try_apply_boolean(op);
        self.report(result)
    }

    fn try_apply_boolean(&mut self, op: BooleanOp) -> Result<u64> {
        let ids = self.canvas.selected_ids().to_vec();
        let [first, second] = ids[..] else {
            return Err(EditorError::SelectionPrecondition {
                expected: 2,
                actual: ids.len(),
            }
            .into());
        };

        let a = self.polygon_operand(first)?;
        let b = self.polygon_operand(second)?;
        let polygon = perform_boolean(&a, &b, op, &self.config)?;
        let vertex_count = polygon.vertices().len();

        self.canvas.remove_shape(first);
        self.canvas.remove_shape(second);
        let id = self.canvas.add_shape(Shape::Polygon(polygon));
        self.canvas.select_id(id, false);

        info!(
            "{} of shapes {} and {} produced shape {} with {} vertices",
            op, first, second, id, vertex_count
        );
        self.status = format!("{} done", op);
        Ok(id)
    }

    fn polygon_operand(&self, id: u64) -> EditorResult<DesignPolygon> {
        let obj = self
            .canvas
            .get_shape(id)
            .ok_or(EditorError::UnknownShape { id })?;
        obj.shape
            .to_polygon()
            .ok_or_else(|| EditorError::NotPolygonal {
                shape: obj.name.clone(),
            })
    }
}
