//! Scripting surface for the Phos engine
//!
//! Behaviors written against this crate read and mutate engine-owned
//! transform state through a narrow, handle-keyed port. The engine stays
//! authoritative: a script holds one opaque handle per entity, and every
//! property access is a synchronous round trip into the host.

pub mod component;
pub mod core;
pub mod input;
pub mod logging;
pub mod port;

// Re-export commonly used types
pub mod prelude {
    // Entity and lifecycle types
    pub use crate::core::entity::{
        Behavior, EntityId, PrefabId, ScriptContext, ScriptError, ScriptRuntime, ScriptableEntity,
    };

    // Math types
    pub use crate::core::math::{Quaternion, Vector3};

    // Component accessors
    pub use crate::component::{Component, TransformComponent};

    // Boundary types
    pub use crate::port::memory::{InMemoryHost, TransformRecord};
    pub use crate::port::{EnginePort, LogLevel, PortError};

    // Input and logging facades
    pub use crate::input::{Input, Key, MouseButton};
    pub use crate::logging::Log;
}

/// Initialize logging for the scripting layer
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
