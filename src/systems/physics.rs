//! Physics stepper for task bubbles.
//!
//! Velocity-based movement against the container walls plus one pairwise
//! overlap-correction pass per tick.
//!
//! Key concepts:
//! - Bubbles have velocity (vx, vy) that persists across frames
//! - Gravity accelerates free bubbles downward each frame
//! - Walls clamp position and reflect velocity with energy loss
//! - Overlapping pairs get equal-and-opposite velocity nudges; every bubble
//!   has the same implicit mass, so this is impulse-like rather than a true
//!   momentum-conserving collision
//! - Velocities are per nominal 16 ms frame; `dt` scales them to the actual
//!   elapsed time

use crate::domain::task::TaskBody;

/// Downward acceleration per normalized frame.
pub const GRAVITY: f32 = 0.2;
/// Energy retained when bouncing off a wall.
pub const RESTITUTION: f32 = 0.8;
/// Extra horizontal decay while touching the floor.
pub const GROUND_FRICTION: f32 = 0.95;
/// Velocity decay applied to every free bubble every tick.
pub const AIR_DRAG: f32 = 0.99;
/// Gain of the corrective velocity nudge on overlap.
pub const COLLISION_GAIN: f32 = 0.05;
/// Fraction of the center offset used to push an overlapping pair apart.
pub const SEPARATION: f32 = 0.2;

/// Gravity, integration, wall bounce and air drag for every free bubble.
///
/// Held bubbles are owned by the drag controller and skipped entirely.
pub fn integrate(bodies: &mut [TaskBody], dt: f32, width: f32, height: f32) {
    for body in bodies.iter_mut() {
        if body.held {
            continue;
        }

        body.vy += GRAVITY * dt;

        body.x += body.vx * dt;
        body.y += body.vy * dt;

        // Walls: clamp back inside and reflect with 20% energy loss.
        if body.x - body.radius < 0.0 {
            body.x = body.radius;
            body.vx = body.vx.abs() * RESTITUTION;
        } else if body.x + body.radius > width {
            body.x = width - body.radius;
            body.vx = -body.vx.abs() * RESTITUTION;
        }

        if body.y - body.radius < 0.0 {
            body.y = body.radius;
            body.vy = body.vy.abs() * RESTITUTION;
        } else if body.y + body.radius > height {
            body.y = height - body.radius;
            body.vy = -body.vy.abs() * RESTITUTION;

            // Floor contact also bleeds horizontal speed.
            body.vx *= GROUND_FRICTION;
        }

        body.vx *= AIR_DRAG;
        body.vy *= AIR_DRAG;
    }
}

/// Single overlap-correction pass over all unordered pairs.
///
/// Pairs are visited in index order, each exactly once. With three or more
/// bubbles stacked the corrections can partially fight within one tick;
/// later ticks finish the job. Held bubbles never participate.
pub fn resolve_collisions(bodies: &mut [TaskBody]) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // i < j, so splitting at j gives two disjoint borrows.
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if a.held || b.held {
                continue;
            }

            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let min_distance = a.radius + b.radius;
            if distance >= min_distance {
                continue;
            }

            // Where B would sit if the pair were exactly in contact along
            // the current center line.
            let angle = dy.atan2(dx);
            let target_x = a.x + angle.cos() * min_distance;
            let target_y = a.y + angle.sin() * min_distance;
            let ax = (target_x - b.x) * COLLISION_GAIN;
            let ay = (target_y - b.y) * COLLISION_GAIN;

            // Equal-and-opposite nudges.
            a.vx -= ax;
            a.vy -= ay;
            b.vx += ax;
            b.vy += ay;

            // Positional separation so resting stacks don't stick together.
            let slx = dx * SEPARATION;
            let sly = dy * SEPARATION;
            a.x -= slx;
            a.y -= sly;
            b.x += slx;
            b.y += sly;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    fn medium(id: u32, x: f32, y: f32) -> TaskBody {
        TaskBody::new(id, format!("task-{id}"), Priority::Medium, x, y)
    }

    fn distance(a: &TaskBody, b: &TaskBody) -> f32 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn gravity_scales_with_elapsed_factor() {
        let mut bodies = vec![medium(1, 400.0, 100.0)];
        integrate(&mut bodies, 2.0, 800.0, 500.0);
        // vy = 0.2 * 2, then air drag.
        assert!((bodies[0].vy - 0.4 * AIR_DRAG).abs() < 1e-5);
        assert!((bodies[0].y - 100.8).abs() < 1e-4);
    }

    #[test]
    fn left_wall_clamps_and_reflects() {
        let mut bodies = vec![medium(1, 60.0, 250.0)];
        bodies[0].vx = -20.0;
        integrate(&mut bodies, 1.0, 800.0, 500.0);
        // x would be 40, radius is 55 -> clamped.
        assert_eq!(bodies[0].x, 55.0);
        assert!(bodies[0].vx > 0.0);
        assert!((bodies[0].vx - 20.0 * RESTITUTION * AIR_DRAG).abs() < 1e-4);
    }

    #[test]
    fn right_wall_clamps_and_reflects() {
        let mut bodies = vec![medium(1, 740.0, 250.0)];
        bodies[0].vx = 20.0;
        integrate(&mut bodies, 1.0, 800.0, 500.0);
        assert_eq!(bodies[0].x, 745.0);
        assert!(bodies[0].vx < 0.0);
    }

    #[test]
    fn floor_contact_applies_ground_friction() {
        let mut bodies = vec![medium(1, 400.0, 444.0)];
        bodies[0].vx = 10.0;
        bodies[0].vy = 5.0;
        integrate(&mut bodies, 1.0, 800.0, 500.0);

        assert_eq!(bodies[0].y, 445.0);
        assert!(bodies[0].vy < 0.0);
        assert!((bodies[0].vx - 10.0 * GROUND_FRICTION * AIR_DRAG).abs() < 1e-4);
    }

    #[test]
    fn ceiling_contact_skips_ground_friction() {
        let mut bodies = vec![medium(1, 400.0, 56.0)];
        bodies[0].vx = 10.0;
        bodies[0].vy = -20.0;
        integrate(&mut bodies, 1.0, 800.0, 500.0);

        assert_eq!(bodies[0].y, 55.0);
        assert!(bodies[0].vy > 0.0);
        // Only air drag on vx, no 0.95 factor.
        assert!((bodies[0].vx - 10.0 * AIR_DRAG).abs() < 1e-4);
    }

    #[test]
    fn held_bodies_are_not_integrated() {
        let mut bodies = vec![medium(1, 400.0, 100.0)];
        bodies[0].held = true;
        integrate(&mut bodies, 1.0, 800.0, 500.0);
        assert_eq!(bodies[0].y, 100.0);
        assert_eq!(bodies[0].vy, 0.0);
    }

    #[test]
    fn overlapping_pair_gets_opposite_nudges() {
        // Two radius-55 bubbles with centers 50 apart: 60 units of overlap.
        let mut bodies = vec![medium(1, 200.0, 200.0), medium(2, 250.0, 200.0)];
        let before = distance(&bodies[0], &bodies[1]);
        resolve_collisions(&mut bodies);

        // Horizontal contact: target for B is A.x + 110, so the nudge
        // magnitude is (310 - 250) * 0.05 = 3.
        assert_eq!(bodies[0].vx, -3.0);
        assert_eq!(bodies[1].vx, 3.0);
        assert_eq!(bodies[0].vy, 0.0);
        assert_eq!(bodies[1].vy, 0.0);

        // Each pushed 20% of the center offset apart.
        assert_eq!(bodies[0].x, 190.0);
        assert_eq!(bodies[1].x, 260.0);
        assert!(distance(&bodies[0], &bodies[1]) > before);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut bodies = vec![medium(1, 100.0, 200.0), medium(2, 300.0, 200.0)];
        resolve_collisions(&mut bodies);
        assert_eq!(bodies[0].x, 100.0);
        assert_eq!(bodies[1].x, 300.0);
        assert_eq!(bodies[0].vx, 0.0);
        assert_eq!(bodies[1].vx, 0.0);
    }

    #[test]
    fn held_bodies_do_not_collide() {
        let mut bodies = vec![medium(1, 200.0, 200.0), medium(2, 250.0, 200.0)];
        bodies[0].held = true;
        resolve_collisions(&mut bodies);
        assert_eq!(bodies[0].x, 200.0);
        assert_eq!(bodies[1].x, 250.0);
    }

    #[test]
    fn coincident_centers_diverge_over_ticks() {
        // Degenerate case: identical centers. The first pass cannot move the
        // positions (offset is zero) but the velocity nudge breaks the tie.
        let mut bodies = vec![medium(1, 300.0, 300.0), medium(2, 300.0, 300.0)];
        resolve_collisions(&mut bodies);
        assert!(bodies[0].vx < 0.0);
        assert!(bodies[1].vx > 0.0);

        integrate(&mut bodies, 1.0, 800.0, 500.0);
        assert!(distance(&bodies[0], &bodies[1]) > 0.0);
    }

    #[test]
    fn three_body_cluster_reduces_total_overlap() {
        let mut bodies = vec![
            medium(1, 200.0, 200.0),
            medium(2, 230.0, 200.0),
            medium(3, 215.0, 220.0),
        ];
        let overlap = |bodies: &[TaskBody]| {
            let mut total = 0.0f32;
            for i in 0..bodies.len() {
                for j in (i + 1)..bodies.len() {
                    let d = distance(&bodies[i], &bodies[j]);
                    let min_d = bodies[i].radius + bodies[j].radius;
                    total += (min_d - d).max(0.0);
                }
            }
            total
        };

        let before = overlap(&bodies);
        // Order-dependent partial correction within one tick is expected;
        // a handful of ticks settles the cluster.
        for _ in 0..10 {
            integrate(&mut bodies, 1.0, 800.0, 500.0);
            resolve_collisions(&mut bodies);
        }
        assert!(overlap(&bodies) < before);
    }
}
