//! A scriptable [`NativeHost`] for facade tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ady_cache::{Clock, SystemClock};
use ady_core::{BlockData, ChunkPos, PlatformVersion};
use ady_nms::{
    AdapterConfig, AdapterContext, DefaultMinecraftHelper, EntityHandle, HostError, HostResult,
    NativeHost, ParticleRegistryEntry, PlayerHandle, RegistryRef,
};

#[derive(Debug, Default)]
pub struct MockHost {
    entity_types: HashMap<String, RegistryRef>,
    entity_registry: HashMap<String, RegistryRef>,
    paintings: HashMap<String, RegistryRef>,
    particles: HashMap<String, RegistryRef>,
    particle_registry: HashMap<String, ParticleRegistryEntry>,
    block_ids: HashMap<String, i32>,
    entities: HashMap<(String, i32), EntityHandle>,
    /// Field names whose lookup raises.
    raising: HashSet<String>,
    /// Keys present in the 1.18 visible chunk map; `None` when the map is absent.
    visible_chunks: Option<HashSet<i64>>,
    /// Chunks present in the pre-1.14 chunk map; `None` when the map is absent.
    legacy_chunks: Option<HashSet<(i32, i32)>>,
    entity_lookups: AtomicUsize,
    block_lookups: AtomicUsize,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_type(mut self, name: &str, id: i32) -> Self {
        let key = format!("minecraft:{}", name.to_ascii_lowercase());
        self.entity_types
            .insert(name.to_owned(), RegistryRef::new(key, id));
        self
    }

    pub fn entity_type_registry_entry(mut self, key: &str, id: i32) -> Self {
        self.entity_registry
            .insert(key.to_owned(), RegistryRef::new(key, id));
        self
    }

    pub fn painting(mut self, path: &str, id: i32) -> Self {
        self.paintings.insert(
            path.to_owned(),
            RegistryRef::new(format!("minecraft:{path}"), id),
        );
        self
    }

    pub fn particle(mut self, name: &str, id: i32) -> Self {
        let key = format!("minecraft:{}", name.to_ascii_lowercase());
        self.particles
            .insert(name.to_owned(), RegistryRef::new(key, id));
        self
    }

    pub fn particle_registry_entry(mut self, key: &str, entry: ParticleRegistryEntry) -> Self {
        self.particle_registry.insert(key.to_owned(), entry);
        self
    }

    pub fn block(mut self, name: &str, id: i32) -> Self {
        self.block_ids.insert(name.to_owned(), id);
        self
    }

    pub fn spawn(mut self, entity: EntityHandle) -> Self {
        self.entities
            .insert((entity.world.clone(), entity.id), entity);
        self
    }

    pub fn raising(mut self, name: &str) -> Self {
        self.raising.insert(name.to_owned());
        self
    }

    pub fn visible_chunks(mut self, chunks: &[ChunkPos]) -> Self {
        self.visible_chunks = Some(chunks.iter().map(|chunk| chunk.key()).collect());
        self
    }

    pub fn legacy_chunks(mut self, chunks: &[ChunkPos]) -> Self {
        self.legacy_chunks = Some(chunks.iter().map(|chunk| (chunk.x, chunk.z)).collect());
        self
    }

    pub fn entity_lookups(&self) -> usize {
        self.entity_lookups.load(Ordering::SeqCst)
    }

    pub fn block_lookups(&self) -> usize {
        self.block_lookups.load(Ordering::SeqCst)
    }

    fn check(&self, name: &str) -> HostResult<()> {
        if self.raising.contains(name) {
            Err(HostError::Failed {
                path: "mock",
                message: format!("{name} raised"),
            })
        } else {
            Ok(())
        }
    }
}

impl NativeHost for MockHost {
    fn entity_type_field(&self, name: &str) -> HostResult<Option<RegistryRef>> {
        self.entity_lookups.fetch_add(1, Ordering::SeqCst);
        self.check(name)?;
        Ok(self.entity_types.get(name).cloned())
    }

    fn entity_type_registry(&self, key: &str) -> HostResult<Option<RegistryRef>> {
        self.check(key)?;
        Ok(self.entity_registry.get(key).cloned())
    }

    fn painting_field(&self, path: &str) -> HostResult<Option<RegistryRef>> {
        self.check(path)?;
        Ok(self.paintings.get(path).cloned())
    }

    fn particle_field(&self, name: &str) -> HostResult<Option<RegistryRef>> {
        self.check(name)?;
        Ok(self.particles.get(name).cloned())
    }

    fn particle_registry(&self, key: &str) -> HostResult<Option<ParticleRegistryEntry>> {
        self.check(key)?;
        Ok(self.particle_registry.get(key).cloned())
    }

    fn block_registry_id(&self, block: &BlockData) -> HostResult<Option<i32>> {
        self.block_lookups.fetch_add(1, Ordering::SeqCst);
        self.check(&block.name)?;
        Ok(self.block_ids.get(&block.name).copied())
    }

    fn combined_block_id(&self, block: &BlockData) -> HostResult<Option<i32>> {
        self.block_registry_id(block)
    }

    fn entity(&self, world: &str, id: i32) -> HostResult<Option<EntityHandle>> {
        self.check(world)?;
        Ok(self.entities.get(&(world.to_owned(), id)).cloned())
    }

    fn paper_chunk_sent(&self, _player: &PlayerHandle, _chunk: ChunkPos) -> HostResult<bool> {
        Err(HostError::Missing("Player.isChunkSent"))
    }

    fn visible_chunk_map_contains(&self, _world: &str, key: i64) -> HostResult<bool> {
        self.visible_chunks
            .as_ref()
            .map(|keys| keys.contains(&key))
            .ok_or(HostError::Missing("ChunkMap.visibleChunkMap"))
    }

    fn player_chunk_map_visible(&self, _world: &str, _key: i64) -> HostResult<bool> {
        Err(HostError::Missing("PlayerChunkMap.getVisibleChunk"))
    }

    fn legacy_chunk_map_contains(&self, _world: &str, x: i32, z: i32) -> HostResult<bool> {
        self.legacy_chunks
            .as_ref()
            .map(|chunks| chunks.contains(&(x, z)))
            .ok_or(HostError::Missing("PlayerChunkMap.getChunk"))
    }
}

pub fn version(minor: u32) -> PlatformVersion {
    PlatformVersion::new(minor, 0).unwrap()
}

pub fn helper(version: PlatformVersion, host: MockHost) -> (Arc<MockHost>, DefaultMinecraftHelper) {
    helper_with(version, host, AdapterConfig::default())
}

pub fn helper_with(
    version: PlatformVersion,
    host: MockHost,
    config: AdapterConfig,
) -> (Arc<MockHost>, DefaultMinecraftHelper) {
    build(version, host, config, Arc::new(SystemClock))
}

/// A helper whose caches read time from `clock`.
pub fn helper_at(
    version: PlatformVersion,
    host: MockHost,
    clock: Arc<dyn Clock>,
) -> (Arc<MockHost>, DefaultMinecraftHelper) {
    build(version, host, AdapterConfig::default(), clock)
}

fn build(
    version: PlatformVersion,
    host: MockHost,
    config: AdapterConfig,
    clock: Arc<dyn Clock>,
) -> (Arc<MockHost>, DefaultMinecraftHelper) {
    let host = Arc::new(host);
    let config = AdapterConfig {
        version: Some(version),
        ..config
    };
    let context = AdapterContext::from_config(config, None, host.clone()).unwrap();
    (host, DefaultMinecraftHelper::with_clock(context, clock))
}
