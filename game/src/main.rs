//! Demo loop wiring behaviors to the in-memory host

mod behaviors;

use behaviors::{PlayerController, Spawner, Spinner};
use scripting::prelude::*;
use std::sync::Arc;
use tracing::info;

/// Loop parameters for the demo
struct DemoConfig {
    steps: u32,
    delta_time: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: 180,
            delta_time: 1.0 / 60.0,
        }
    }
}

fn main() {
    scripting::init_logging();
    info!("Starting scripting demo");

    let config = DemoConfig::default();
    let host = Arc::new(InMemoryHost::new());

    // The "engine" side of the demo: two live entities and one prefab
    let player = host.spawn(TransformRecord::default());
    let pillar = host.spawn(TransformRecord {
        position: Vector3::new(0.0, 0.0, 4.0),
        ..Default::default()
    });
    let projectile = host.register_prefab(TransformRecord {
        scale: Vector3::ONE * 0.25,
        ..Default::default()
    });

    let mut runtime = ScriptRuntime::new(host.clone());
    runtime.attach(player, Box::new(PlayerController::new(4.0)));
    runtime.attach(player, Box::new(Spawner::new(projectile, 0.75)));
    runtime.attach(pillar, Box::new(Spinner::new(90.0)));

    for step in 0..config.steps {
        // Scripted input: strafe for the first second, then fire twice
        if step < 60 {
            host.push_axis_motion(1.0, 0.25);
        }
        match step {
            60 | 90 => host.press_key(Key::Space),
            62 | 92 => host.release_key(Key::Space),
            _ => {}
        }

        runtime.update(config.delta_time);
    }

    let position = host
        .transform_position(player)
        .expect("player outlives the demo");
    let heading = host
        .transform_rotation(pillar)
        .expect("pillar outlives the demo");
    info!(
        x = position.x,
        z = position.z,
        pillar_yaw = heading.y,
        entities = host.entity_count(),
        "Demo finished"
    );
}
