//! In-memory host backing the engine port
//!
//! Holds the authoritative state a real engine would own, keyed by the
//! same opaque handles scripts see. Tests and the demo game drive their
//! scenarios through this host; the extra methods beyond the port are the
//! engine-side controls a test plays the role of the engine with.

use crate::core::entity::{EntityId, PrefabId};
use crate::core::math::Vector3;
use crate::input::{Key, MouseButton};
use crate::port::{EnginePort, LogLevel, PortError};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use tracing::{debug, error, info, trace, warn};

/// Host-side transform state for one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformRecord {
    pub position: Vector3,
    /// Euler angles in degrees, the representation crossing the boundary
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for TransformRecord {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }
}

#[derive(Default)]
struct HostState {
    entities: HashMap<EntityId, TransformRecord>,
    prefabs: HashMap<PrefabId, TransformRecord>,
    next_entity: u64,
    next_prefab: u64,
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    horizontal: f32,
    vertical: f32,
    log: Vec<(LogLevel, String)>,
}

/// Engine port implementation over a handle-keyed map.
///
/// Handle values start at 1; zero stays reserved for "no entity".
pub struct InMemoryHost {
    state: RwLock<HostState>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HostState::default()),
        }
    }

    /// Create a live entity with the given transform, returning its handle
    pub fn spawn(&self, record: TransformRecord) -> EntityId {
        let mut state = self.state.write().unwrap();
        state.next_entity += 1;
        let id = EntityId::from_raw(state.next_entity);
        state.entities.insert(id, record);
        debug!(entity = id.raw(), "Spawned entity");
        id
    }

    /// Register a template for later instantiation
    pub fn register_prefab(&self, template: TransformRecord) -> PrefabId {
        let mut state = self.state.write().unwrap();
        state.next_prefab += 1;
        let id = PrefabId::from_raw(state.next_prefab);
        state.prefabs.insert(id, template);
        debug!(prefab = id.raw(), "Registered prefab");
        id
    }

    /// Whether the handle names a live entity
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.state.read().unwrap().entities.contains_key(&entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.state.read().unwrap().entities.len()
    }

    pub fn press_key(&self, key: Key) {
        self.state.write().unwrap().keys_down.insert(key);
    }

    pub fn release_key(&self, key: Key) {
        self.state.write().unwrap().keys_down.remove(&key);
    }

    pub fn press_button(&self, button: MouseButton) {
        self.state.write().unwrap().buttons_down.insert(button);
    }

    pub fn release_button(&self, button: MouseButton) {
        self.state.write().unwrap().buttons_down.remove(&button);
    }

    /// Feed axis input; deltas accumulate until a script polls them
    pub fn push_axis_motion(&self, horizontal: f32, vertical: f32) {
        let mut state = self.state.write().unwrap();
        state.horizontal += horizontal;
        state.vertical += vertical;
    }

    /// Script log lines received so far, oldest first
    pub fn logs(&self) -> Vec<(LogLevel, String)> {
        self.state.read().unwrap().log.clone()
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EnginePort for InMemoryHost {
    fn transform_position(&self, entity: EntityId) -> Result<Vector3, PortError> {
        let state = self.state.read().unwrap();
        state
            .entities
            .get(&entity)
            .map(|record| record.position)
            .ok_or(PortError::EntityNotAlive(entity))
    }

    fn set_transform_position(
        &self,
        entity: EntityId,
        position: Vector3,
    ) -> Result<(), PortError> {
        let mut state = self.state.write().unwrap();
        let record = state
            .entities
            .get_mut(&entity)
            .ok_or(PortError::EntityNotAlive(entity))?;
        record.position = position;
        trace!(entity = entity.raw(), "Set position");
        Ok(())
    }

    fn transform_scale(&self, entity: EntityId) -> Result<Vector3, PortError> {
        let state = self.state.read().unwrap();
        state
            .entities
            .get(&entity)
            .map(|record| record.scale)
            .ok_or(PortError::EntityNotAlive(entity))
    }

    fn set_transform_scale(&self, entity: EntityId, scale: Vector3) -> Result<(), PortError> {
        let mut state = self.state.write().unwrap();
        let record = state
            .entities
            .get_mut(&entity)
            .ok_or(PortError::EntityNotAlive(entity))?;
        record.scale = scale;
        trace!(entity = entity.raw(), "Set scale");
        Ok(())
    }

    fn transform_rotation(&self, entity: EntityId) -> Result<Vector3, PortError> {
        let state = self.state.read().unwrap();
        state
            .entities
            .get(&entity)
            .map(|record| record.rotation)
            .ok_or(PortError::EntityNotAlive(entity))
    }

    fn set_transform_rotation(
        &self,
        entity: EntityId,
        rotation: Vector3,
    ) -> Result<(), PortError> {
        let mut state = self.state.write().unwrap();
        let record = state
            .entities
            .get_mut(&entity)
            .ok_or(PortError::EntityNotAlive(entity))?;
        record.rotation = rotation;
        trace!(entity = entity.raw(), "Set rotation");
        Ok(())
    }

    fn instantiate_prefab(&self, prefab: PrefabId) -> Result<EntityId, PortError> {
        let mut state = self.state.write().unwrap();
        let template = *state
            .prefabs
            .get(&prefab)
            .ok_or(PortError::UnknownPrefab(prefab))?;
        state.next_entity += 1;
        let id = EntityId::from_raw(state.next_entity);
        state.entities.insert(id, template);
        debug!(
            prefab = prefab.raw(),
            entity = id.raw(),
            "Instantiated prefab"
        );
        Ok(id)
    }

    fn destroy_entity(&self, entity: EntityId) -> Result<(), PortError> {
        let mut state = self.state.write().unwrap();
        state
            .entities
            .remove(&entity)
            .ok_or(PortError::EntityNotAlive(entity))?;
        debug!(entity = entity.raw(), "Destroyed entity");
        Ok(())
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.state.read().unwrap().keys_down.contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.state.read().unwrap().buttons_down.contains(&button)
    }

    fn horizontal_axis_change(&self) -> f32 {
        std::mem::take(&mut self.state.write().unwrap().horizontal)
    }

    fn vertical_axis_change(&self) -> f32 {
        std::mem::take(&mut self.state.write().unwrap().vertical)
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!("[script] {message}"),
            LogLevel::Warning => warn!("[script] {message}"),
            LogLevel::Error => error!("[script] {message}"),
        }
        self.state
            .write()
            .unwrap()
            .log
            .push((level, message.to_string()));
    }
}
