use crate::core::random::unit_f32;
use crate::domain::task::{Priority, TaskBody};

use super::WorldCore;

/// Diameter of the largest bubble, kept clear of the edges at spawn.
const SPAWN_MARGIN: f32 = 80.0;
const SPAWN_PADDING: f32 = 20.0;
/// Vertical spawn band: 50..150 units from the top.
const SPAWN_BAND_TOP: f32 = 50.0;
const SPAWN_BAND_HEIGHT: f32 = 100.0;

pub(super) fn add_task(world: &mut WorldCore, label: &str, priority: Priority) -> u32 {
    let (x, y) = spawn_position(world);
    world.tasks.add(label, priority, x, y).unwrap_or(0)
}

/// Pseudo-random spawn point: across the width, in a band near the top.
fn spawn_position(world: &mut WorldCore) -> (f32, f32) {
    if world.width <= 0.0 || world.height <= 0.0 {
        // Not laid out yet; park the bubble at a fixed fallback.
        return (100.0, 100.0);
    }

    let span = (world.width - SPAWN_MARGIN - SPAWN_PADDING * 2.0).max(0.0);
    let x = unit_f32(&mut world.rng_state) * span + SPAWN_PADDING + SPAWN_MARGIN;
    let y = unit_f32(&mut world.rng_state) * SPAWN_BAND_HEIGHT + SPAWN_BAND_TOP;
    (x, y)
}

pub(super) fn remove_task(world: &mut WorldCore, id: u32) -> bool {
    world.tasks.remove(id)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.tasks.clear();
    world.frame = 0;
    world.last_time = None;
}

pub(super) fn tasks_json(world: &WorldCore) -> String {
    serde_json::to_string(world.tasks.read()).unwrap_or_else(|_| "[]".to_string())
}

pub(super) fn load_tasks_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let mut bodies: Vec<TaskBody> = serde_json::from_str(json).map_err(|e| e.to_string())?;

    // Snapshots never arrive mid-drag; force the held invariant.
    for body in bodies.iter_mut() {
        body.held = false;
    }

    world.tasks.replace_all(bodies);
    Ok(())
}
