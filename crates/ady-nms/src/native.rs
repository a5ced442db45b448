//! Native values: what a specific server release understands.
//!
//! None of these are stable across releases. They are produced by the
//! adapters and cached per abstract value.

use std::sync::Arc;

use ady_core::BlockPos;
use serde::Serialize;

/// An entry in one of the server's name-indexed registries.
///
/// The key is shared, so clones handed out by a cache point at the same
/// allocation as the cached value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RegistryRef {
    pub key: Arc<str>,
    pub protocol_id: i32,
}

impl RegistryRef {
    pub fn new(key: impl Into<Arc<str>>, protocol_id: i32) -> Self {
        Self {
            key: key.into(),
            protocol_id,
        }
    }

    /// True when both refs share the same key allocation.
    #[must_use]
    pub fn same_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.key, &other.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NativeEntityType {
    /// Resolved through the entity type registry (1.14+).
    Registry(RegistryRef),
    /// Numeric type id (before 1.14).
    LegacyId { id: i32 },
}

impl NativeEntityType {
    #[must_use]
    pub fn id(&self) -> i32 {
        match self {
            Self::Registry(entry) => entry.protocol_id,
            Self::LegacyId { id } => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NativePainting {
    /// Resolved through the painting registry (1.13+).
    Registry(RegistryRef),
    /// Art ordinal (before 1.13).
    Legacy { ordinal: i32 },
}

impl NativePainting {
    #[must_use]
    pub fn id(&self) -> i32 {
        match self {
            Self::Registry(entry) => entry.protocol_id,
            Self::Legacy { ordinal } => *ordinal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NativeParticle {
    Registry(RegistryRef),
    /// Releases before 1.13 have no particle registry; callers send nothing.
    Disabled,
}

impl NativeParticle {
    /// Protocol id, or 0 for [`NativeParticle::Disabled`].
    #[must_use]
    pub fn id(&self) -> i32 {
        match self {
            Self::Registry(entry) => entry.protocol_id,
            Self::Disabled => 0,
        }
    }
}

/// What the 1.13 particle registry yields for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticleRegistryEntry {
    /// A particle type carrying its own parameter object.
    Typed { param: RegistryRef },
    /// A bare entry.
    Raw(RegistryRef),
}

impl ParticleRegistryEntry {
    #[must_use]
    pub fn into_ref(self) -> RegistryRef {
        match self {
            Self::Typed { param } => param,
            Self::Raw(entry) => entry,
        }
    }
}

/// Block coordinates plus their wire encoding on the running release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NativeBlockPos {
    pub pos: BlockPos,
    pub packed: i64,
}
