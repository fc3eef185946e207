//! Core scripting types: the transform algebra and entity identity

pub mod entity;
pub mod math;

// Re-export commonly used types
pub use entity::{
    Behavior, EntityId, PrefabId, ScriptContext, ScriptError, ScriptRuntime, ScriptableEntity,
};
pub use math::{Quaternion, Vector3};
