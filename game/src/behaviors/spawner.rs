//! Prefab spawning on key press

use scripting::prelude::*;

/// Instantiates a prefab on each fresh Space press and destroys the
/// spawned entities once their lifetime runs out.
pub struct Spawner {
    prefab: PrefabId,
    lifetime: f32,
    was_down: bool,
    live: Vec<(ScriptableEntity, f32)>,
}

impl Spawner {
    pub fn new(prefab: PrefabId, lifetime: f32) -> Self {
        Self {
            prefab,
            lifetime,
            was_down: false,
            live: Vec::new(),
        }
    }

    /// Spawned entities still alive
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Behavior for Spawner {
    fn on_update(&mut self, ctx: &ScriptContext, delta_time: f32) {
        // Edge detection: one spawn per press, not per held frame
        let down = ctx.input().is_key_down(Key::Space);
        if down && !self.was_down {
            match ctx.entity().instantiate(self.prefab) {
                Ok(spawned) => {
                    ctx.log().info(&format!("spawned entity {}", spawned.id()));
                    self.live.push((spawned, self.lifetime));
                }
                Err(error) => ctx.log().error(&format!("spawn failed: {error}")),
            }
        }
        self.was_down = down;

        for (_, remaining) in &mut self.live {
            *remaining -= delta_time;
        }

        let mut index = 0;
        while index < self.live.len() {
            if self.live[index].1 <= 0.0 {
                let (spawned, _) = self.live.swap_remove(index);
                let id = spawned.id();
                if let Err(error) = spawned.destroy() {
                    ctx.log().error(&format!("despawn of {id} failed: {error}"));
                }
            } else {
                index += 1;
            }
        }
    }
}
