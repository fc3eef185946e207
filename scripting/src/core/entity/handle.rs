//! Opaque engine-assigned handles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a live engine-side entity.
///
/// Assigned by the engine, unique for the entity's lifetime, and
/// meaningless once the entity is destroyed. Zero is reserved for
/// "no entity". Scripts never interpret the value; it only keys boundary
/// calls, so the type exposes equality and nothing arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// The reserved "no entity" sentinel
    pub const INVALID: Self = Self(0);

    /// Wrap a raw handle value received from the engine
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value sent across the boundary
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether this handle refers to some entity rather than the sentinel
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a prefab template the engine can instantiate from.
///
/// Opaque to scripts, same as [`EntityId`]; the host defines what initial
/// state the template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabId(u64);

impl PrefabId {
    /// Wrap a raw prefab handle
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value sent across the boundary
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrefabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_invalid() {
        assert!(!EntityId::INVALID.is_valid());
        assert_eq!(EntityId::from_raw(0), EntityId::INVALID);
        assert!(EntityId::from_raw(1).is_valid());
    }

    #[test]
    fn test_handles_compare_by_value() {
        assert_eq!(EntityId::from_raw(7), EntityId::from_raw(7));
        assert_ne!(EntityId::from_raw(7), EntityId::from_raw(8));
        assert_eq!(EntityId::from_raw(7).raw(), 7);
    }
}
