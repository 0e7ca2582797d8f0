//! Canvas for drawing and manipulating shapes.

mod types;

pub use types::{DrawingMode, DrawingObject, TransformAnchor};

use shapekit_core::{Color, GeometryConfig, Point};

use crate::model::{DesignerShape, Shape};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

/// Canvas state: the owned shape collection and the selection over it.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    mode: DrawingMode,
}

impl Canvas {
    /// Creates an empty canvas in select mode.
    pub fn new() -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            mode: DrawingMode::Select,
        }
    }

    /// Sets the drawing mode.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Adds a shape on top of the draw order and returns its id.
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.shape_store.generate_id();
        self.shape_store.insert(id, DrawingObject::new(id, shape));
        id
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shape_store.get(id)
    }

    /// All shapes, bottom of the draw order first.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shape_store.iter()
    }

    pub fn selected_ids(&self) -> &[u64] {
        self.selection_manager.selected_ids()
    }

    /// Selected objects in selection order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.selection_manager
            .selected_ids()
            .iter()
            .filter_map(|&id| self.shape_store.get(id))
    }

    pub fn select_at(&mut self, point: Point, config: &GeometryConfig, multi: bool) -> Option<u64> {
        self.selection_manager
            .select_at(&mut self.shape_store, point, config, multi)
    }

    pub fn select_id(&mut self, id: u64, multi: bool) {
        self.selection_manager
            .select_id(&mut self.shape_store, id, multi);
    }

    pub fn deselect_all(&mut self) {
        self.selection_manager.deselect_all(&mut self.shape_store);
    }

    /// Removes the selected shapes and returns them in selection order.
    pub fn remove_selected(&mut self) -> Vec<DrawingObject> {
        self.selection_manager.remove_selected(&mut self.shape_store)
    }

    pub fn remove_shape(&mut self, id: u64) -> Option<DrawingObject> {
        let removed = self.shape_store.remove(id);
        self.selection_manager.prune(&self.shape_store);
        removed
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shape_store.clear();
        self.selection_manager.prune(&self.shape_store);
    }

    /// Runs `f` on every selected shape, in selection order.
    pub fn for_each_selected(&mut self, mut f: impl FnMut(&mut Shape)) {
        for &id in self.selection_manager.selected_ids() {
            if let Some(obj) = self.shape_store.get_mut(id) {
                f(&mut obj.shape);
            }
        }
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.for_each_selected(|shape| shape.set_color(color));
    }

    /// Returns the axis-aligned bounding box of all selected shapes.
    /// Returns `None` when no shapes are selected.
    pub fn selection_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.selected_shapes()
            .map(|obj| obj.shape.bounds())
            .reduce(|(ax1, ay1, ax2, ay2), (bx1, by1, bx2, by2)| {
                (ax1.min(bx1), ay1.min(by1), ax2.max(bx2), ay2.max(by2))
            })
    }
}
