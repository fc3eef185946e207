//! Constant-rate yaw

use scripting::prelude::*;

/// Rotates its entity around the vertical axis at a fixed rate.
pub struct Spinner {
    degrees_per_second: f32,
}

impl Spinner {
    pub fn new(degrees_per_second: f32) -> Self {
        Self { degrees_per_second }
    }
}

impl Behavior for Spinner {
    fn on_update(&mut self, ctx: &ScriptContext, delta_time: f32) {
        let delta = Vector3::UP * (self.degrees_per_second * delta_time);
        if let Err(error) = ctx.entity().transform().rotate(delta) {
            ctx.log().error(&format!("spin failed: {error}"));
        }
    }
}
