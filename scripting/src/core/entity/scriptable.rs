//! Script-visible entities and the behavior hook contract

use crate::component::{Component, TransformComponent};
use crate::core::entity::{EntityId, PrefabId, ScriptError};
use crate::input::Input;
use crate::logging::Log;
use crate::port::EnginePort;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Script-side view of one engine entity.
///
/// Owns the entity's handle and nothing else; transform state lives in
/// the engine and is reached through the injected port.
pub struct ScriptableEntity {
    id: EntityId,
    port: Arc<dyn EnginePort>,
}

impl ScriptableEntity {
    /// Wrap a handle the engine passed to the script layer
    pub fn bound(id: EntityId, port: Arc<dyn EnginePort>) -> Self {
        debug!(entity = id.raw(), "Bound script entity");
        Self { id, port }
    }

    /// An entity carrying the reserved sentinel handle.
    ///
    /// Issuing boundary calls through it is a contract violation and
    /// surfaces as [`ScriptError::Unbound`] instead of reaching the host.
    pub fn unbound(port: Arc<dyn EnginePort>) -> Self {
        Self {
            id: EntityId::INVALID,
            port,
        }
    }

    /// This entity's handle
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Whether the entity carries a real handle
    pub fn is_bound(&self) -> bool {
        self.id.is_valid()
    }

    /// The port this entity issues its boundary calls through
    pub fn port(&self) -> &Arc<dyn EnginePort> {
        &self.port
    }

    /// Bind a fresh transform accessor to this entity
    pub fn transform(&self) -> TransformComponent {
        self.component()
    }

    /// Bind a fresh accessor of any component type to this entity
    pub fn component<C: Component>(&self) -> C {
        C::bind(self)
    }

    /// Ask the host to clone `prefab` into a new live entity.
    ///
    /// The returned entity is bound to the fresh handle; invoking its
    /// creation hook is the host's job, not this layer's.
    pub fn instantiate(&self, prefab: PrefabId) -> Result<ScriptableEntity, ScriptError> {
        let id = self.port.instantiate_prefab(prefab)?;
        Ok(ScriptableEntity::bound(id, Arc::clone(&self.port)))
    }

    /// Ask the host to destroy this entity.
    ///
    /// Consumes the entity: once the host returns, the handle is dead and
    /// this script can no longer name it. Accessors bound earlier keep
    /// the stale handle and get [`crate::port::PortError::EntityNotAlive`]
    /// from the host.
    pub fn destroy(self) -> Result<(), ScriptError> {
        if !self.id.is_valid() {
            return Err(ScriptError::Unbound);
        }
        self.port.destroy_entity(self.id)?;
        Ok(())
    }
}

impl fmt::Debug for ScriptableEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptableEntity")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Services available to a behavior while its hooks run
pub struct ScriptContext {
    entity: ScriptableEntity,
    input: Input,
    log: Log,
}

impl ScriptContext {
    /// Build the per-entity context over the entity's own port
    pub fn new(entity: ScriptableEntity) -> Self {
        let port = Arc::clone(entity.port());
        Self {
            input: Input::new(Arc::clone(&port)),
            log: Log::new(port),
            entity,
        }
    }

    /// The entity this behavior is attached to
    pub fn entity(&self) -> &ScriptableEntity {
        &self.entity
    }

    /// Keyboard and mouse polling
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Log lines forwarded to the host
    pub fn log(&self) -> &Log {
        &self.log
    }
}

/// User-authored behavior attached to one entity.
///
/// `on_create` runs exactly once per entity, before its first
/// `on_update`. `on_update` runs every simulation step with the elapsed
/// time the engine measured for that step; it is non-negative but not
/// constant, so behaviors must scale by it rather than assume a fixed
/// tick.
pub trait Behavior {
    /// One-time setup, before the first update
    fn on_create(&mut self, _ctx: &ScriptContext) {}

    /// Per-step logic
    fn on_update(&mut self, _ctx: &ScriptContext, _delta_time: f32) {}
}
