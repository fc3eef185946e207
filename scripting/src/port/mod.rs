//! The call surface between scripts and the host engine

pub mod memory;

use crate::core::entity::{EntityId, PrefabId};
use crate::core::math::Vector3;
use crate::input::{Key, MouseButton};

/// Severity of a script log line forwarded to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// Errors a handle-keyed boundary call can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The handle does not name a live entity (destroyed, or never valid)
    #[error("no live entity for handle {0}")]
    EntityNotAlive(EntityId),

    /// The prefab handle has no registered template
    #[error("no prefab registered for handle {0}")]
    UnknownPrefab(PrefabId),
}

/// The only channel through which entity state crosses into the host
/// engine: one method per boundary call, keyed by an opaque handle.
///
/// Every call is a synchronous round trip — the host resolves it before
/// returning control, and nothing is queued or batched, so two reads in
/// a row may observe different answers if the host mutated state in
/// between. Rotation crosses the boundary as Euler degrees; scripts
/// convert with [`crate::core::math::Quaternion::from_euler`] when they
/// need to compose.
///
/// Implementations are injected (`Arc<dyn EnginePort>`) into the
/// accessor and identity layers; a production implementation adapts this
/// surface to the engine's ABI, while
/// [`memory::InMemoryHost`] backs tests and demos.
pub trait EnginePort: Send + Sync {
    fn transform_position(&self, entity: EntityId) -> Result<Vector3, PortError>;
    fn set_transform_position(&self, entity: EntityId, position: Vector3)
        -> Result<(), PortError>;

    fn transform_scale(&self, entity: EntityId) -> Result<Vector3, PortError>;
    fn set_transform_scale(&self, entity: EntityId, scale: Vector3) -> Result<(), PortError>;

    /// Rotation as Euler angles in degrees
    fn transform_rotation(&self, entity: EntityId) -> Result<Vector3, PortError>;
    fn set_transform_rotation(&self, entity: EntityId, rotation: Vector3)
        -> Result<(), PortError>;

    /// Clone a prefab's template state into a new live entity
    fn instantiate_prefab(&self, prefab: PrefabId) -> Result<EntityId, PortError>;

    /// Destroy a live entity; its handle must not be used afterwards
    fn destroy_entity(&self, entity: EntityId) -> Result<(), PortError>;

    fn is_key_down(&self, key: Key) -> bool;
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Horizontal input accumulated since the previous poll; polling
    /// drains the accumulator
    fn horizontal_axis_change(&self) -> f32;

    /// Vertical counterpart of [`EnginePort::horizontal_axis_change`]
    fn vertical_axis_change(&self) -> f32;

    /// Forward a script log line to the host's transport
    fn log(&self, level: LogLevel, message: &str);
}
