//! Drives behavior hooks the way the host engine schedules them

use crate::core::entity::{Behavior, EntityId, PrefabId, ScriptContext, ScriptableEntity};
use crate::port::{EnginePort, PortError};
use std::sync::Arc;
use tracing::{debug, warn};

struct Entry {
    context: ScriptContext,
    behavior: Box<dyn Behavior>,
    started: bool,
}

/// Owns the behaviors bound to live entities and upholds the hook
/// contract: `on_create` exactly once per entity, before its first
/// `on_update`, then `on_update` every step, in attach order.
pub struct ScriptRuntime {
    port: Arc<dyn EnginePort>,
    entries: Vec<Entry>,
}

impl ScriptRuntime {
    /// Create a runtime issuing its boundary calls through `port`
    pub fn new(port: Arc<dyn EnginePort>) -> Self {
        Self {
            port,
            entries: Vec::new(),
        }
    }

    /// Attach a behavior to an entity the engine already created.
    ///
    /// The same entity may carry several behaviors; each gets its own
    /// context over the same handle.
    pub fn attach(&mut self, id: EntityId, behavior: Box<dyn Behavior>) {
        debug!(entity = id.raw(), "Attaching behavior");
        let entity = ScriptableEntity::bound(id, Arc::clone(&self.port));
        self.entries.push(Entry {
            context: ScriptContext::new(entity),
            behavior,
            started: false,
        });
    }

    /// Instantiate a prefab and attach `behavior` to the new entity
    pub fn spawn(
        &mut self,
        prefab: PrefabId,
        behavior: Box<dyn Behavior>,
    ) -> Result<EntityId, PortError> {
        let id = self.port.instantiate_prefab(prefab)?;
        self.attach(id, behavior);
        Ok(id)
    }

    /// Drop every behavior attached to `id`.
    ///
    /// Called when the engine destroys the entity; returns whether
    /// anything was attached.
    pub fn detach(&mut self, id: EntityId) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.context.entity().id() != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(entity = id.raw(), "Detached behavior");
        } else {
            warn!(entity = id.raw(), "Detach requested for unknown entity");
        }
        removed
    }

    /// Run one simulation step over every attached behavior.
    ///
    /// `delta_time` is the engine-measured elapsed time for the step and
    /// is handed to behaviors as-is.
    pub fn update(&mut self, delta_time: f32) {
        debug_assert!(delta_time >= 0.0, "delta_time must be non-negative");
        for entry in &mut self.entries {
            if !entry.started {
                entry.behavior.on_create(&entry.context);
                entry.started = true;
            }
            entry.behavior.on_update(&entry.context, delta_time);
        }
    }

    /// Whether `id` has had its creation hook run
    pub fn has_started(&self, id: EntityId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.context.entity().id() == id && entry.started)
    }

    /// Number of attached behaviors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no behaviors are attached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::memory::{InMemoryHost, TransformRecord};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counters {
        created: AtomicU32,
        updated: AtomicU32,
    }

    struct Counting {
        counters: Arc<Counters>,
    }

    impl Behavior for Counting {
        fn on_create(&mut self, _ctx: &ScriptContext) {
            // on_create must precede every on_update
            assert_eq!(self.counters.updated.load(Ordering::SeqCst), 0);
            self.counters.created.fetch_add(1, Ordering::SeqCst);
        }

        fn on_update(&mut self, _ctx: &ScriptContext, _delta_time: f32) {
            assert_eq!(self.counters.created.load(Ordering::SeqCst), 1);
            self.counters.updated.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_create_runs_once_before_updates() {
        let host = Arc::new(InMemoryHost::new());
        let id = host.spawn(TransformRecord::default());
        let counters = Arc::new(Counters::default());

        let mut runtime = ScriptRuntime::new(host);
        runtime.attach(
            id,
            Box::new(Counting {
                counters: counters.clone(),
            }),
        );
        assert!(!runtime.has_started(id));

        for _ in 0..5 {
            runtime.update(0.016);
        }

        assert!(runtime.has_started(id));
        assert_eq!(counters.created.load(Ordering::SeqCst), 1);
        assert_eq!(counters.updated.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_detach_stops_updates() {
        let host = Arc::new(InMemoryHost::new());
        let id = host.spawn(TransformRecord::default());
        let counters = Arc::new(Counters::default());

        let mut runtime = ScriptRuntime::new(host);
        runtime.attach(
            id,
            Box::new(Counting {
                counters: counters.clone(),
            }),
        );
        runtime.update(0.016);

        assert!(runtime.detach(id));
        assert!(runtime.is_empty());
        runtime.update(0.016);

        assert_eq!(counters.updated.load(Ordering::SeqCst), 1);
        assert!(!runtime.detach(id));
    }

    #[test]
    fn test_spawn_attaches_to_fresh_entity() {
        let host = Arc::new(InMemoryHost::new());
        let prefab = host.register_prefab(TransformRecord::default());
        let counters = Arc::new(Counters::default());

        let mut runtime = ScriptRuntime::new(host.clone());
        let id = runtime
            .spawn(
                prefab,
                Box::new(Counting {
                    counters: counters.clone(),
                }),
            )
            .unwrap();

        assert!(host.is_alive(id));
        assert_eq!(runtime.len(), 1);

        runtime.update(0.016);
        assert_eq!(counters.created.load(Ordering::SeqCst), 1);
    }
}
