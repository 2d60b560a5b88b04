use crate::domain::store::TaskStore;
use crate::systems::drag::DragController;

use super::WorldCore;

pub(super) const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_world_core(width: f32, height: f32, seed: u32) -> WorldCore {
    WorldCore {
        tasks: TaskStore::new(),
        drag: DragController::new(),
        width,
        height,
        frame: 0,
        last_time: None,
        // xorshift32 gets stuck at zero.
        rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
    }
}
