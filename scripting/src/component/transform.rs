//! Transform accessor translating property access into boundary calls

use crate::component::Component;
use crate::core::entity::{EntityId, ScriptError, ScriptableEntity};
use crate::core::math::{Quaternion, Vector3};
use crate::port::EnginePort;
use std::sync::Arc;
use tracing::trace;

struct Binding {
    entity: EntityId,
    port: Arc<dyn EnginePort>,
}

/// Accessor for an entity's engine-side transform.
///
/// Every read and write is its own round trip into the host, so
/// back-to-back reads may differ when the engine (or another accessor on
/// the same handle) moved the entity in between.
pub struct TransformComponent {
    binding: Option<Binding>,
}

impl TransformComponent {
    /// An accessor not yet bound to any entity; every access fails with
    /// [`ScriptError::Unbound`] rather than defaulting silently.
    pub fn unbound() -> Self {
        Self { binding: None }
    }

    fn binding(&self) -> Result<&Binding, ScriptError> {
        match &self.binding {
            Some(binding) if binding.entity.is_valid() => Ok(binding),
            _ => Err(ScriptError::Unbound),
        }
    }

    pub fn position(&self) -> Result<Vector3, ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Reading position");
        Ok(binding.port.transform_position(binding.entity)?)
    }

    pub fn set_position(&self, position: Vector3) -> Result<(), ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Writing position");
        Ok(binding.port.set_transform_position(binding.entity, position)?)
    }

    pub fn scale(&self) -> Result<Vector3, ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Reading scale");
        Ok(binding.port.transform_scale(binding.entity)?)
    }

    pub fn set_scale(&self, scale: Vector3) -> Result<(), ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Writing scale");
        Ok(binding.port.set_transform_scale(binding.entity, scale)?)
    }

    /// Rotation as Euler angles in degrees, as the boundary carries it
    pub fn rotation(&self) -> Result<Vector3, ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Reading rotation");
        Ok(binding.port.transform_rotation(binding.entity)?)
    }

    pub fn set_rotation(&self, rotation: Vector3) -> Result<(), ScriptError> {
        let binding = self.binding()?;
        trace!(entity = binding.entity.raw(), "Writing rotation");
        Ok(binding.port.set_transform_rotation(binding.entity, rotation)?)
    }

    /// The current rotation converted for script-side composition
    pub fn rotation_quaternion(&self) -> Result<Quaternion, ScriptError> {
        Ok(Quaternion::from_euler(self.rotation()?))
    }

    /// Move by `delta`: one read plus one write, not an atomic
    /// engine-side add. A concurrent mutation of the same property can
    /// land between the two round trips.
    pub fn translate(&self, delta: Vector3) -> Result<(), ScriptError> {
        let position = self.position()?;
        self.set_position(position + delta)
    }

    /// Rotate by `delta` Euler degrees, with the same read-then-write
    /// shape as [`TransformComponent::translate`]
    pub fn rotate(&self, delta: Vector3) -> Result<(), ScriptError> {
        let rotation = self.rotation()?;
        self.set_rotation(rotation + delta)
    }
}

impl Component for TransformComponent {
    fn bind(entity: &ScriptableEntity) -> Self {
        Self {
            binding: Some(Binding {
                entity: entity.id(),
                port: Arc::clone(entity.port()),
            }),
        }
    }

    fn owner(&self) -> Option<EntityId> {
        self.binding
            .as_ref()
            .map(|binding| binding.entity)
            .filter(|entity| entity.is_valid())
    }
}
