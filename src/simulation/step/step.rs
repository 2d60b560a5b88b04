use crate::systems::physics;

use super::WorldCore;

/// Nominal frame interval the velocity constants are tuned for.
const FRAME_MS: f64 = 16.0;

/// Step from a host timestamp.
///
/// The elapsed time is normalized so physics behaves the same across
/// refresh rates. The first call has no previous sample and uses one whole
/// nominal frame. A container without measured dimensions skips the tick
/// entirely; the next frame is the retry.
pub(super) fn step(world: &mut WorldCore, now_ms: f64) {
    if world.width <= 0.0 || world.height <= 0.0 {
        return;
    }

    let dt = match world.last_time {
        Some(prev) => ((now_ms - prev) / FRAME_MS) as f32,
        None => 1.0,
    };
    world.last_time = Some(now_ms);

    tick(world, dt);
}

/// Advance exactly one tick with a fixed elapsed factor.
pub(super) fn advance(world: &mut WorldCore, dt: f32) {
    if world.width <= 0.0 || world.height <= 0.0 {
        return;
    }
    tick(world, dt);
}

fn tick(world: &mut WorldCore, dt: f32) {
    let (width, height) = (world.width, world.height);
    let bodies = world.tasks.bodies_mut();

    physics::integrate(bodies, dt, width, height);
    physics::resolve_collisions(bodies);

    world.frame += 1;
}
