use shapekit_core::{GeometryConfig, Point};

use crate::canvas::DrawingObject;
use crate::shape_store::ShapeStore;

/// Manages shape selection state and selection operations.
///
/// # Selection Model
///
/// - The selection is an ordered set of shape ids, oldest pick first.
/// - Every id in the set is also present in the [`ShapeStore`], and the
///   `selected` flag of each stored object mirrors membership.
/// - **Multi-select**: with Shift held a click toggles the hit shape without
///   touching the rest of the selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.selected_ids().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Selected ids in the order they were picked.
    pub fn selected_ids(&self) -> &[u64] {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Deselects all shapes.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
        }
        self.selected.clear();
    }

    /// Selects a shape by ID.
    ///
    /// If `multi` is `false` the previous selection is replaced. Unknown ids
    /// are ignored.
    pub fn select_id(&mut self, store: &mut ShapeStore, id: u64, multi: bool) {
        if !store.contains(id) {
            return;
        }
        if !multi {
            self.deselect_all(store);
        }
        if let Some(obj) = store.get_mut(id) {
            obj.selected = true;
        }
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Selects the topmost shape at the given point.
    ///
    /// # Multi-select Behavior
    ///
    /// - If `multi` is `false`: deselects all other shapes before selecting,
    ///   and a click on empty space clears the selection.
    /// - If `multi` is `true`: toggles the hit shape and leaves the others.
    ///
    /// # Returns
    ///
    /// The ID of the shape under the point, or `None` if nothing was hit.
    pub fn select_at(
        &mut self,
        store: &mut ShapeStore,
        point: Point,
        config: &GeometryConfig,
        multi: bool,
    ) -> Option<u64> {
        let found_id = store
            .draw_order_iter()
            .rev()
            .find(|&id| store.get(id).is_some_and(|obj| obj.contains_point(point, config)));

        if !multi {
            self.deselect_all(store);
        }

        if let Some(id) = found_id {
            if multi && self.is_selected(id) {
                self.selected.retain(|&other| other != id);
                if let Some(obj) = store.get_mut(id) {
                    obj.selected = false;
                }
            } else {
                self.select_id(store, id, true);
            }
        }

        found_id
    }

    /// Removes all selected shapes from the store and returns them in
    /// selection order.
    pub fn remove_selected(&mut self, store: &mut ShapeStore) -> Vec<DrawingObject> {
        self.selected
            .drain(..)
            .filter_map(|id| store.remove(id))
            .collect()
    }

    /// Drops ids whose shapes are no longer in the store.
    pub fn prune(&mut self, store: &ShapeStore) {
        self.selected.retain(|&id| store.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignPolygon, Shape};
    use shapekit_core::Color;

    fn add_square(store: &mut ShapeStore, x: f64, y: f64) -> u64 {
        let id = store.generate_id();
        let poly = DesignPolygon::new(
            vec![
                Point::new(x, y),
                Point::new(x + 10.0, y),
                Point::new(x + 10.0, y + 10.0),
                Point::new(x, y + 10.0),
            ],
            Color::BLACK,
        )
        .unwrap();
        store.insert(id, DrawingObject::new(id, Shape::Polygon(poly)));
        id
    }

    #[test]
    fn test_topmost_shape_wins() {
        let mut store = ShapeStore::new();
        let mut manager = SelectionManager::new();
        let config = GeometryConfig::default();
        let _bottom = add_square(&mut store, 0.0, 0.0);
        let top = add_square(&mut store, 5.0, 5.0);

        let hit = manager.select_at(&mut store, Point::new(7.0, 7.0), &config, false);
        assert_eq!(hit, Some(top));
        assert_eq!(manager.selected_ids(), &[top]);
        assert!(store.get(top).unwrap().selected);
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut store = ShapeStore::new();
        let mut manager = SelectionManager::new();
        let config = GeometryConfig::default();
        let a = add_square(&mut store, 0.0, 0.0);
        let b = add_square(&mut store, 20.0, 0.0);

        manager.select_at(&mut store, Point::new(5.0, 5.0), &config, false);
        manager.select_at(&mut store, Point::new(25.0, 5.0), &config, true);
        assert_eq!(manager.selected_ids(), &[a, b]);

        manager.select_at(&mut store, Point::new(5.0, 5.0), &config, true);
        assert_eq!(manager.selected_ids(), &[b]);
        assert!(!store.get(a).unwrap().selected);

        // Plain click on empty space clears everything.
        manager.select_at(&mut store, Point::new(100.0, 100.0), &config, false);
        assert!(manager.selected_ids().is_empty());
        assert!(store.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_remove_selected() {
        let mut store = ShapeStore::new();
        let mut manager = SelectionManager::new();
        let a = add_square(&mut store, 0.0, 0.0);
        let b = add_square(&mut store, 20.0, 0.0);
        manager.select_id(&mut store, b, false);

        let removed = manager.remove_selected(&mut store);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, b);
        assert!(store.contains(a));
        assert_eq!(manager.selected_count(), 0);
    }
}
