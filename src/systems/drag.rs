//! Drag controller - translates pointer input into physics overrides.
//!
//! This is the only writer of the `held` flag and of a held bubble's
//! position, which keeps the single-drag-target invariant local to this
//! file. Pointer coordinates are container-relative; the host adapter does
//! the bounding-box math before calling in.

use crate::core::vec2::Vec2;
use crate::domain::store::TaskStore;

/// Velocity gain applied to the last pointer delta on release (throw).
pub const THROW_GAIN: f32 = 0.5;

pub struct DragController {
    active: Option<u32>,
    pointer: Vec2,
    last_pointer: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            active: None,
            pointer: Vec2::zero(),
            last_pointer: Vec2::zero(),
        }
    }

    /// Id of the bubble currently held, if any.
    pub fn active_id(&self) -> Option<u32> {
        self.active
    }

    /// Begin dragging `id` at the given pointer position.
    ///
    /// Returns false when the body no longer exists (stale reference).
    /// A begin while another bubble is held releases the old one without a
    /// throw, so at most one body is ever held.
    pub fn begin(&mut self, tasks: &mut TaskStore, id: u32, x: f32, y: f32) -> bool {
        if let Some(prev) = self.active.take() {
            if let Some(body) = tasks.get_mut(prev) {
                body.held = false;
            }
        }

        let Some(body) = tasks.get_mut(id) else {
            return false;
        };

        body.held = true;
        body.vx = 0.0;
        body.vy = 0.0;
        self.pointer = Vec2::new(x, y);
        self.last_pointer = self.pointer;
        self.active = Some(id);
        true
    }

    /// Move the held bubble to the pointer. No-op when nothing is held.
    ///
    /// Keeps the previous pointer sample so the release velocity can be
    /// derived from the last two positions.
    pub fn motion(&mut self, tasks: &mut TaskStore, x: f32, y: f32) {
        let Some(id) = self.active else {
            return;
        };

        self.last_pointer = self.pointer;
        self.pointer = Vec2::new(x, y);

        match tasks.get_mut(id) {
            Some(body) => {
                body.x = x;
                body.y = y;
            }
            // Deleted mid-drag: drop the handle and keep ignoring events.
            None => self.active = None,
        }
    }

    /// Release the held bubble, converting the last pointer delta into a
    /// throw. A drag with no movement between the last two samples simply
    /// drops the bubble.
    pub fn end(&mut self, tasks: &mut TaskStore) {
        let Some(id) = self.active.take() else {
            return;
        };
        let Some(body) = tasks.get_mut(id) else {
            return;
        };

        let throw = (self.pointer - self.last_pointer) * THROW_GAIN;
        body.vx = throw.x;
        body.vy = throw.y;
        body.held = false;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
