use taskbubble_engine::simulation::WorldCore;
use taskbubble_engine::task::Priority;

#[test]
fn world_smoke_step() {
    let mut world = WorldCore::new_with_seed(800.0, 500.0, 7);

    for i in 0..6 {
        let priority = match i % 3 {
            0 => Priority::High,
            1 => Priority::Medium,
            _ => Priority::Low,
        };
        assert_ne!(world.add_task(&format!("task {i}"), priority), 0);
    }
    assert_eq!(world.task_count(), 6);

    // A second of frames at 60 Hz.
    for i in 0..60 {
        world.step(i as f64 * 16.0);
    }
    assert_eq!(world.frame(), 60);

    // Let the pile settle; six bubbles fit side by side on the floor.
    for _ in 0..2000 {
        world.advance(1.0);
    }
    for body in world.tasks() {
        assert!(body.x >= body.radius - 2.0 && body.x <= 800.0 - body.radius + 2.0);
        assert!(body.y <= 500.0 - body.radius + 2.0);
        assert!(body.vx.abs() < 2.0 && body.vy.abs() < 2.0);
    }

    // Snapshot parses back.
    let json = world.tasks_json();
    let mut restored = WorldCore::new(800.0, 500.0);
    restored.load_tasks_json(&json).unwrap();
    assert_eq!(restored.task_count(), 6);
}
