//! Axis-driven player movement

use scripting::prelude::*;

/// Moves its entity in the XZ plane from the input axes, with A/D
/// strafing on top.
pub struct PlayerController {
    speed: f32,
}

impl PlayerController {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Behavior for PlayerController {
    fn on_create(&mut self, ctx: &ScriptContext) {
        ctx.log().info("player ready");
    }

    fn on_update(&mut self, ctx: &ScriptContext, delta_time: f32) {
        let horizontal = ctx.input().horizontal_axis_change();
        let vertical = ctx.input().vertical_axis_change();

        let mut direction = Vector3::RIGHT * horizontal + Vector3::FRONT * vertical;
        if ctx.input().is_key_down(Key::A) {
            direction = direction + Vector3::LEFT;
        }
        if ctx.input().is_key_down(Key::D) {
            direction = direction + Vector3::RIGHT;
        }

        if direction == Vector3::ZERO {
            return;
        }

        let step = direction * (self.speed * delta_time);
        if let Err(error) = ctx.entity().transform().translate(step) {
            ctx.log().error(&format!("player move failed: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_axis_motion_translates_the_player() {
        let host = Arc::new(InMemoryHost::new());
        let id = host.spawn(TransformRecord::default());

        let mut runtime = ScriptRuntime::new(host.clone());
        runtime.attach(id, Box::new(PlayerController::new(2.0)));

        host.push_axis_motion(1.0, -0.5);
        runtime.update(0.5);

        assert_eq!(
            host.transform_position(id).unwrap(),
            Vector3::new(1.0, 0.0, -0.5)
        );
    }

    #[test]
    fn test_strafe_keys_add_to_axis_motion() {
        let host = Arc::new(InMemoryHost::new());
        let id = host.spawn(TransformRecord::default());

        let mut runtime = ScriptRuntime::new(host.clone());
        runtime.attach(id, Box::new(PlayerController::new(1.0)));

        host.press_key(Key::D);
        runtime.update(1.0);
        assert_eq!(
            host.transform_position(id).unwrap(),
            Vector3::new(1.0, 0.0, 0.0)
        );

        host.release_key(Key::D);
        host.press_key(Key::A);
        runtime.update(1.0);
        assert_eq!(host.transform_position(id).unwrap(), Vector3::ZERO);
    }
}
