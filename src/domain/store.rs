//! Entity store for task bodies.
//!
//! The collection is treated as an unordered set: rendering and physics only
//! care about ids, never insertion order. Ids are assigned once and never
//! reused, even across `clear()`.

use super::task::{Priority, TaskBody};

/// Holds the authoritative list of task bodies.
pub struct TaskStore {
    bodies: Vec<TaskBody>,
    next_id: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a task at the given spawn position.
    ///
    /// Returns `None` when the label is blank. Ids start at 1 so the WASM
    /// boundary can use 0 as the "rejected" marker.
    pub fn add(&mut self, label: &str, priority: Priority, x: f32, y: f32) -> Option<u32> {
        if label.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(TaskBody::new(id, label.to_string(), priority, x, y));
        Some(id)
    }

    /// Remove a task by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: u32) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    /// Replace the whole collection (snapshot import).
    ///
    /// `next_id` is bumped past the largest imported id so later adds never
    /// collide with an imported body.
    pub fn replace_all(&mut self, bodies: Vec<TaskBody>) {
        let max_id = bodies.iter().map(|b| b.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1));
        self.bodies = bodies;
    }

    /// Read-only snapshot of all bodies.
    pub fn read(&self) -> &[TaskBody] {
        &self.bodies
    }

    /// Mutable access for the physics stepper.
    pub(crate) fn bodies_mut(&mut self) -> &mut [TaskBody] {
        &mut self.bodies
    }

    pub fn get(&self, id: u32) -> Option<&TaskBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut TaskBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Remove every body. Keeps `next_id` so ids stay unique forever.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
