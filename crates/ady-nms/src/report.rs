//! A [`NativeHost`] backed by the vanilla data generator reports.
//!
//! `registries.json` supplies entity type, particle and painting protocol ids;
//! `blocks.json` supplies block state ids. Chunk delivery and live entities
//! are tracked in memory by whoever drives the connection.
//!
//! Accessors answer [`HostError::Missing`] outside the releases that have
//! them, mirroring which internals exist where.

use std::collections::HashMap as StdHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ady_core::{BlockData, ChunkPos, PlatformVersion};
use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::{HostError, HostResult};
use crate::host::{EntityHandle, NativeHost, PlayerHandle};
use crate::native::{ParticleRegistryEntry, RegistryRef};

pub const ENTITY_TYPE_REGISTRY: &str = "minecraft:entity_type";
pub const PARTICLE_TYPE_REGISTRY: &str = "minecraft:particle_type";
/// Painting registries, newest name first (`motive` before 1.19).
pub const PAINTING_REGISTRIES: [&str; 2] = ["minecraft:painting_variant", "minecraft:motive"];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry entry from Mojang's data generator
#[derive(Debug, Deserialize)]
struct RegistryEntryInfo {
    protocol_id: i32,
}

#[derive(Debug, Deserialize)]
struct RegistryInfo {
    entries: StdHashMap<String, RegistryEntryInfo>,
}

/// RegistryName -> RegistryInfo
type RegistriesData = StdHashMap<String, RegistryInfo>;

/// Block state from Mojang's data generator
#[derive(Debug, Deserialize)]
struct BlockStateInfo {
    id: i32,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    properties: StdHashMap<String, String>,
}

/// Block info from Mojang's data generator
#[derive(Debug, Deserialize)]
struct BlockInfo {
    #[serde(default)]
    properties: StdHashMap<String, Vec<String>>,
    states: Vec<BlockStateInfo>,
}

/// BlockName -> BlockInfo
type BlocksData = StdHashMap<String, BlockInfo>;

#[derive(Debug, Default)]
struct SentChunks {
    by_world: HashMap<String, HashSet<i64>>,
    /// Keyed by name and world, so a world change starts from nothing.
    by_player: HashMap<PlayerHandle, HashSet<i64>>,
}

pub struct ReportHost {
    version: PlatformVersion,
    registries: HashMap<String, HashMap<String, RegistryRef>>,
    blocks: Option<BlocksData>,
    paper: bool,
    sent: RwLock<SentChunks>,
    entities: RwLock<HashMap<(String, i32), EntityHandle>>,
}

impl ReportHost {
    /// A host with no registry data, enough for pre-1.13 releases.
    #[must_use]
    pub fn empty(version: PlatformVersion) -> Self {
        Self {
            version,
            registries: HashMap::new(),
            blocks: None,
            paper: false,
            sent: RwLock::new(SentChunks::default()),
            entities: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_json(
        version: PlatformVersion,
        registries: &str,
        blocks: Option<&str>,
    ) -> Result<Self, ReportError> {
        let data: RegistriesData = serde_json::from_str(registries)?;
        let mut host = Self::empty(version);
        for (registry, info) in data {
            let entries = info
                .entries
                .into_iter()
                .map(|(key, entry)| {
                    let reference = RegistryRef::new(key.as_str(), entry.protocol_id);
                    (key, reference)
                })
                .collect();
            host.registries.insert(registry, entries);
        }
        host.blocks = blocks.map(serde_json::from_str).transpose()?;
        debug!(
            %version,
            registries = host.registries.len(),
            blocks = host.blocks.as_ref().map_or(0, StdHashMap::len),
            "loaded data generator reports"
        );
        Ok(host)
    }

    /// Load `registries.json` and, when present, `blocks.json` from `dir`.
    pub fn from_dir(version: PlatformVersion, dir: &Path) -> Result<Self, ReportError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| ReportError::Io { path, source })
        };
        let registries = read("registries.json")?;
        let blocks = if dir.join("blocks.json").exists() {
            Some(read("blocks.json")?)
        } else {
            None
        };
        info!(dir = %dir.display(), %version, "reading data generator reports");
        Self::from_json(version, &registries, blocks.as_deref())
    }

    /// Whether the running fork offers its own chunk-sent check.
    #[must_use]
    pub fn with_paper(mut self, paper: bool) -> Self {
        self.paper = paper;
        self
    }

    #[must_use]
    pub fn version(&self) -> PlatformVersion {
        self.version
    }

    pub fn mark_chunk_sent(&self, player: &PlayerHandle, chunk: ChunkPos) {
        let mut sent = self.sent.write();
        sent.by_world
            .entry(player.world.clone())
            .or_default()
            .insert(chunk.key());
        sent.by_player
            .entry(player.clone())
            .or_default()
            .insert(chunk.key());
    }

    pub fn unload_chunk(&self, player: &PlayerHandle, chunk: ChunkPos) {
        let mut sent = self.sent.write();
        if let Some(keys) = sent.by_world.get_mut(&player.world) {
            keys.remove(&chunk.key());
        }
        if let Some(keys) = sent.by_player.get_mut(player) {
            keys.remove(&chunk.key());
        }
    }

    pub fn spawn_entity(&self, entity: EntityHandle) {
        self.entities
            .write()
            .insert((entity.world.clone(), entity.id), entity);
    }

    fn require(&self, since: PlatformVersion, path: &'static str) -> HostResult<()> {
        if self.version >= since {
            Ok(())
        } else {
            Err(HostError::Missing(path))
        }
    }

    fn require_before(&self, until: PlatformVersion, path: &'static str) -> HostResult<()> {
        if self.version < until {
            Ok(())
        } else {
            Err(HostError::Missing(path))
        }
    }

    fn registry_entry(&self, registry: &str, key: &str) -> Option<RegistryRef> {
        self.registries.get(registry)?.get(key).cloned()
    }

    fn field_key(name: &str) -> String {
        format!("minecraft:{}", name.to_ascii_lowercase())
    }

    fn block_state_id(&self, block: &BlockData, path: &'static str) -> HostResult<Option<i32>> {
        let blocks = self.blocks.as_ref().ok_or(HostError::Missing(path))?;
        let Some(info) = blocks.get(&block.namespaced_name()) else {
            return Ok(None);
        };
        let Some(default) = info
            .states
            .iter()
            .find(|state| state.default)
            .or_else(|| info.states.first())
        else {
            return Ok(None);
        };

        let mut wanted = default.properties.clone();
        for (key, value) in &block.properties {
            let known = info
                .properties
                .get(key)
                .is_some_and(|values| values.contains(value));
            if !known {
                return Ok(None);
            }
            wanted.insert(key.clone(), value.clone());
        }

        Ok(info
            .states
            .iter()
            .find(|state| state.properties == wanted)
            .map(|state| state.id))
    }

    fn sent_in_world(&self, world: &str, key: i64) -> bool {
        self.sent
            .read()
            .by_world
            .get(world)
            .is_some_and(|keys| keys.contains(&key))
    }
}

impl NativeHost for ReportHost {
    fn entity_type_field(&self, name: &str) -> HostResult<Option<RegistryRef>> {
        self.require(PlatformVersion::V1_14, "EntityTypes")?;
        Ok(self.registry_entry(ENTITY_TYPE_REGISTRY, &Self::field_key(name)))
    }

    fn entity_type_registry(&self, key: &str) -> HostResult<Option<RegistryRef>> {
        self.require(PlatformVersion::V1_13, "IRegistry.ENTITY_TYPE")?;
        Ok(self.registry_entry(ENTITY_TYPE_REGISTRY, key))
    }

    fn painting_field(&self, path: &str) -> HostResult<Option<RegistryRef>> {
        self.require(PlatformVersion::V1_13, "Paintings")?;
        let key = Self::field_key(path);
        Ok(PAINTING_REGISTRIES
            .iter()
            .find_map(|registry| self.registry_entry(registry, &key)))
    }

    fn particle_field(&self, name: &str) -> HostResult<Option<RegistryRef>> {
        self.require(PlatformVersion::V1_14, "Particles")?;
        Ok(self.registry_entry(PARTICLE_TYPE_REGISTRY, &Self::field_key(name)))
    }

    fn particle_registry(&self, key: &str) -> HostResult<Option<ParticleRegistryEntry>> {
        self.require(PlatformVersion::V1_13, "IRegistry.PARTICLE_TYPE")?;
        // Every vanilla particle type is its own parameter object.
        Ok(self
            .registry_entry(PARTICLE_TYPE_REGISTRY, key)
            .map(|param| ParticleRegistryEntry::Typed { param }))
    }

    fn block_registry_id(&self, block: &BlockData) -> HostResult<Option<i32>> {
        self.require(PlatformVersion::V1_18, "Block.getId")?;
        self.block_state_id(block, "Block.getId")
    }

    fn combined_block_id(&self, block: &BlockData) -> HostResult<Option<i32>> {
        self.require(PlatformVersion::V1_13, "Block.getCombinedId")?;
        self.block_state_id(block, "Block.getCombinedId")
    }

    fn entity(&self, world: &str, id: i32) -> HostResult<Option<EntityHandle>> {
        Ok(self.entities.read().get(&(world.to_owned(), id)).cloned())
    }

    fn paper_chunk_sent(&self, player: &PlayerHandle, chunk: ChunkPos) -> HostResult<bool> {
        if !self.paper {
            return Err(HostError::Missing("Player.isChunkSent"));
        }
        Ok(self
            .sent
            .read()
            .by_player
            .get(player)
            .is_some_and(|keys| keys.contains(&chunk.key())))
    }

    fn visible_chunk_map_contains(&self, world: &str, key: i64) -> HostResult<bool> {
        self.require(PlatformVersion::V1_18, "ChunkMap.visibleChunkMap")?;
        Ok(self.sent_in_world(world, key))
    }

    fn player_chunk_map_visible(&self, world: &str, key: i64) -> HostResult<bool> {
        self.require(PlatformVersion::V1_14, "PlayerChunkMap.getVisibleChunk")?;
        self.require_before(PlatformVersion::V1_18, "PlayerChunkMap.getVisibleChunk")?;
        Ok(self.sent_in_world(world, key))
    }

    fn legacy_chunk_map_contains(&self, world: &str, x: i32, z: i32) -> HostResult<bool> {
        self.require_before(PlatformVersion::V1_14, "PlayerChunkMap.getChunk")?;
        Ok(self.sent_in_world(world, ChunkPos::as_long(x, z)))
    }
}
