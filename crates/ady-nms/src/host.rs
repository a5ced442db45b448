//! The server internals surface adapters read from.
//!
//! A [`NativeHost`] exposes the handful of internal accessors adapters need.
//! Accessors that do not exist on the running release return
//! [`HostError::Missing`](crate::HostError::Missing); adapters only call the
//! ones that belong to their era, and the chunk prober relies on the error to
//! move on to its next strategy.

use ady_core::{BlockData, ChunkPos};
use serde::{Deserialize, Serialize};

use crate::error::HostResult;
use crate::native::{ParticleRegistryEntry, RegistryRef};

/// A connected player, as far as adapters care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHandle {
    pub name: String,
    pub world: String,
}

impl PlayerHandle {
    pub fn new(name: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: world.into(),
        }
    }
}

/// A live server-side entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityHandle {
    pub id: i32,
    pub world: String,
    pub type_key: String,
}

pub trait NativeHost: Send + Sync {
    /// Entity type holder field by name (1.14+).
    fn entity_type_field(&self, name: &str) -> HostResult<Option<RegistryRef>>;

    /// Entity type registry lookup by namespaced key (1.13).
    fn entity_type_registry(&self, key: &str) -> HostResult<Option<RegistryRef>>;

    /// Painting holder field by registry path (1.13+).
    fn painting_field(&self, path: &str) -> HostResult<Option<RegistryRef>>;

    /// Particle holder field by name (1.14+).
    fn particle_field(&self, name: &str) -> HostResult<Option<RegistryRef>>;

    /// Particle registry lookup by namespaced key (1.13).
    fn particle_registry(&self, key: &str) -> HostResult<Option<ParticleRegistryEntry>>;

    /// Block state registry id (1.18+).
    fn block_registry_id(&self, block: &BlockData) -> HostResult<Option<i32>>;

    /// Combined block state id (1.13 to 1.17).
    fn combined_block_id(&self, block: &BlockData) -> HostResult<Option<i32>>;

    fn entity(&self, world: &str, id: i32) -> HostResult<Option<EntityHandle>>;

    /// Server-provided "has this chunk been sent" check, where the fork offers one.
    fn paper_chunk_sent(&self, player: &PlayerHandle, chunk: ChunkPos) -> HostResult<bool>;

    /// `chunkSource.chunkMap.visibleChunkMap` presence (1.18+).
    fn visible_chunk_map_contains(&self, world: &str, key: i64) -> HostResult<bool>;

    /// `chunkProvider.playerChunkMap.getVisibleChunk` presence (1.14 to 1.17).
    fn player_chunk_map_visible(&self, world: &str, key: i64) -> HostResult<bool>;

    /// `playerChunkMap.getChunk(x, z)` presence (before 1.14).
    fn legacy_chunk_map_contains(&self, world: &str, x: i32, z: i32) -> HostResult<bool>;
}
