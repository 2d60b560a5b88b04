//! World - task bubble simulation
//!
//! The world only orchestrates: entity bookkeeping lives in domain/, the
//! stepper and drag controller in systems/. The host drives `step()` from
//! its requestAnimationFrame loop and reads the body snapshot back out to
//! render; dropping the World on unmount stops everything.

use crate::domain::store::TaskStore;
use crate::domain::task::{Priority, TaskBody};
use crate::systems::drag::DragController;

#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;

/// The simulation world
pub struct WorldCore {
    tasks: TaskStore,
    drag: DragController,

    // Container geometry (CSS pixels); zero until the host has layout.
    width: f32,
    height: f32,

    // State
    frame: u64,
    last_time: Option<f64>,
    rng_state: u32,
}

impl WorldCore {
    /// Create a new world with given container dimensions
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height, init::DEFAULT_SEED)
    }

    /// Create a world with a fixed RNG seed (reproducible spawn positions)
    pub fn new_with_seed(width: f32, height: f32, seed: u32) -> Self {
        init::create_world_core(width, height, seed)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn task_count(&self) -> usize { self.tasks.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Update the container size after a host-side layout change
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Add a task bubble at a pseudo-random spot near the top.
    /// Returns the new id, or 0 when the text is blank.
    pub fn add_task(&mut self, label: &str, priority: Priority) -> u32 {
        commands::add_task(self, label, priority)
    }

    /// Remove a task by id (double-click delete); absent ids are a no-op
    pub fn remove_task(&mut self, id: u32) -> bool {
        commands::remove_task(self, id)
    }

    /// Remove all tasks
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Read-only snapshot of all bodies (render surface)
    pub fn tasks(&self) -> &[TaskBody] {
        self.tasks.read()
    }

    /// Serialize the current bodies to JSON for the host renderer
    pub fn tasks_json(&self) -> String {
        commands::tasks_json(self)
    }

    /// Replace the whole body collection from a JSON snapshot
    pub fn load_tasks_json(&mut self, json: &str) -> Result<(), String> {
        commands::load_tasks_json(self, json)
    }

    // === DRAG API ===

    /// Begin dragging a bubble; pointer coords are container-relative
    pub fn begin_drag(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.drag.begin(&mut self.tasks, id, x, y)
    }

    /// Move the held bubble to the pointer
    pub fn drag_move(&mut self, x: f32, y: f32) {
        self.drag.motion(&mut self.tasks, x, y);
    }

    /// Release the held bubble, throwing it with the last pointer delta
    pub fn end_drag(&mut self) {
        self.drag.end(&mut self.tasks);
    }

    /// Id of the bubble currently held, if any
    pub fn dragged_task(&self) -> Option<u32> {
        self.drag.active_id()
    }

    /// Step the simulation using a host timestamp in milliseconds
    /// (e.g. the requestAnimationFrame argument)
    pub fn step(&mut self, now_ms: f64) {
        step::step(self, now_ms);
    }

    /// Advance exactly one tick with a fixed elapsed factor (1.0 = 16 ms)
    pub fn advance(&mut self, dt: f32) {
        step::advance(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
