//! WASM facade - thin wrapper over WorldCore for the JS host.
//!
//! The host owns the requestAnimationFrame loop and the pointer listeners;
//! it forwards timestamps and container-relative pointer coordinates here
//! and reads the body snapshot back out each frame to position the DOM
//! bubbles. Dropping the World (free()) on unmount stops the simulation.

use wasm_bindgen::prelude::*;

use crate::domain::task::Priority;
use crate::simulation::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given container dimensions (CSS pixels)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world with a fixed RNG seed (reproducible spawn positions)
    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(width: f32, height: f32, seed: u32) -> Self {
        Self {
            core: WorldCore::new_with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn task_count(&self) -> usize { self.core.task_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Update the container size after a layout change (e.g. ResizeObserver)
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.core.set_container_size(width, height);
    }

    /// Add a task bubble. Returns the new id, or 0 when the text is blank.
    pub fn add_task(&mut self, label: String, priority: u8) -> u32 {
        let Some(priority) = Priority::from_u8(priority) else {
            return 0;
        };
        self.core.add_task(&label, priority)
    }

    /// Remove a task by id (double-click delete); absent ids are a no-op
    pub fn remove_task(&mut self, id: u32) -> bool {
        self.core.remove_task(id)
    }

    /// Remove all tasks
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation using a requestAnimationFrame timestamp (ms)
    pub fn step(&mut self, now_ms: f64) {
        self.core.step(now_ms);
    }

    // === DRAG API ===

    /// Begin dragging a bubble; pointer coords are container-relative.
    /// Returns false when the id is stale.
    pub fn begin_drag(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.begin_drag(id, x, y)
    }

    /// Move the held bubble to the pointer
    pub fn drag_move(&mut self, x: f32, y: f32) {
        self.core.drag_move(x, y);
    }

    /// Release the held bubble, throwing it with the last pointer delta
    pub fn end_drag(&mut self) {
        self.core.end_drag();
    }

    /// Id of the bubble being dragged (0 when none)
    pub fn dragged_task(&self) -> u32 {
        self.core.dragged_task().unwrap_or(0)
    }

    /// Serialize all bubbles to JSON for the host renderer
    pub fn tasks_json(&self) -> String {
        self.core.tasks_json()
    }

    /// Replace all bubbles from a JSON snapshot
    pub fn load_tasks(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tasks_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }
}
