//! Owned container of the shapes on a canvas.

use std::collections::HashMap;

use crate::canvas::DrawingObject;

/// Shapes keyed by id, plus the order they are drawn in.
///
/// Later entries in the draw order are drawn on top and win hit tests.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: HashMap<u64, DrawingObject>,
    draw_order: Vec<u64>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Hands out a fresh id; ids are never reused within a store.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts (or replaces) an object. New ids go on top of the draw order.
    pub fn insert(&mut self, id: u64, obj: DrawingObject) {
        if self.shapes.insert(id, obj).is_none() {
            self.draw_order.push(id);
        }
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(&id)
    }

    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            self.draw_order.retain(|&other| other != id);
        }
        removed
    }

    pub fn contains(&self, id: u64) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Objects in draw order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &DrawingObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Mutable access to every object, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> {
        self.shapes.values_mut()
    }

    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.draw_order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
    }
}
