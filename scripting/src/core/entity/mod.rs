//! Entity identity and lifecycle
//!
//! Entities here are handles, not storage: the engine owns every
//! component's data, and the types in this module only carry the opaque
//! id that keys boundary calls, plus the hook contract behaviors are
//! driven through.

pub mod handle;
pub mod runtime;
pub mod scriptable;

pub use handle::{EntityId, PrefabId};
pub use runtime::ScriptRuntime;
pub use scriptable::{Behavior, ScriptContext, ScriptableEntity};

use crate::port::PortError;

/// Errors surfaced to script code
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// An accessor or entity was used before being bound to a live handle
    #[error("used before being bound to an entity")]
    Unbound,

    /// The host rejected a boundary call
    #[error(transparent)]
    Port(#[from] PortError),
}
