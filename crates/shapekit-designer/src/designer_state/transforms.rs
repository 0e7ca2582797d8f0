//! Transformations (move, rotate, scale) for designer state.

use shapekit_core::Point;
use tracing::{debug, info};

use super::DesignerState;
use crate::canvas::DrawingMode;
use crate::model::DesignerShape;
use crate::transform::{angle_from_drag, drag_scale_factor, ScaleAxis};

impl DesignerState {
    /// Starts a move drag of the selection, remembering where each shape's
    /// centroid sits relative to the cursor.
    pub(super) fn begin_drag(&mut self, cursor: Point) {
        let offsets: Vec<(u64, Point)> = self
            .canvas
            .selected_shapes()
            .map(|obj| (obj.id, cursor - obj.shape.centroid()))
            .collect();
        if offsets.is_empty() {
            self.status = "Select shapes to move".to_string();
            return;
        }
        debug!("Dragging {} shapes", offsets.len());
        self.status = format!("Moving {} shapes", offsets.len());
        self.drag_offsets = Some(offsets);
    }

    /// Moves every dragged shape so its centroid sits at `cursor - offset`.
    /// Ignored when no drag is active.
    pub fn drag_to(&mut self, cursor: Point) {
        let Some(offsets) = &self.drag_offsets else {
            return;
        };
        for &(id, offset) in offsets {
            if let Some(obj) = self.canvas.shape_store.get_mut(id) {
                obj.shape.move_to(cursor - offset);
            }
        }
    }

    /// Ends the active move drag.
    pub fn end_drag(&mut self) {
        if let Some(offsets) = self.drag_offsets.take() {
            info!("Moved {} shapes", offsets.len());
            self.status = format!("Moved {} shapes", offsets.len());
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offsets.is_some()
    }

    /// Collects the center and target of a rotate/scale gesture and applies
    /// it to the selection on the second pick.
    pub(super) fn pick_anchor(&mut self, point: Point) {
        let Some((center, target)) = self.anchor.push(point) else {
            self.status = "Pick the target point".to_string();
            return;
        };
        if self.canvas.selected_ids().is_empty() {
            self.status = "Select shapes to transform".to_string();
            return;
        }
        self.apply_transform(self.tool(), center, target);
    }

    fn apply_transform(&mut self, mode: DrawingMode, center: Point, target: Point) {
        let sensitivity = self.config.drag_sensitivity;
        let floor = self.config.min_scale_factor;
        let count = self.canvas.selected_ids().len();
        match mode {
            DrawingMode::Rotate => {
                let angle = angle_from_drag(center, target);
                self.canvas
                    .for_each_selected(|shape| shape.rotate(angle, center));
                info!("Rotated {} shapes by {:.1} degrees about {}", count, angle, center);
                self.status = format!("Rotate {:.0}°", angle);
            }
            DrawingMode::ScaleX => {
                let sx = drag_scale_factor(center, target, ScaleAxis::X, sensitivity, floor);
                self.canvas
                    .for_each_selected(|shape| shape.scale_x(sx, center));
                info!("Scaled {} shapes along X by {:.2}", count, sx);
                self.status = format!("Scale X: {:.1}", sx);
            }
            DrawingMode::ScaleXY => {
                let s = drag_scale_factor(center, target, ScaleAxis::XY, sensitivity, floor);
                self.canvas
                    .for_each_selected(|shape| shape.scale_xy(s, center));
                info!("Scaled {} shapes by {:.2}", count, s);
                self.status = format!("Scale XY: {:.1}", s);
            }
            _ => {}
        }
    }
}
