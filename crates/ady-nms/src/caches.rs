//! The four per-category resource caches.

use std::sync::Arc;
use std::time::Duration;

use ady_cache::{CacheStats, Clock, IdleCache, SystemClock};
use ady_core::{BlockData, EntityType, Painting, Particle};
use serde::Serialize;
use tracing::debug;

use crate::native::{NativeEntityType, NativePainting, NativeParticle};

/// Idle caches keyed by abstract value, one per category.
#[derive(Debug)]
pub struct AdapterCaches {
    pub(crate) entity_types: IdleCache<EntityType, NativeEntityType>,
    pub(crate) paintings: IdleCache<Painting, NativePainting>,
    pub(crate) particles: IdleCache<Particle, NativeParticle>,
    pub(crate) blocks: IdleCache<BlockData, i32>,
}

/// Counters for every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdapterCacheStats {
    pub entity_types: CacheStats,
    pub paintings: CacheStats,
    pub particles: CacheStats,
    pub blocks: CacheStats,
}

impl AdapterCaches {
    pub fn new(idle: Duration) -> Self {
        Self::with_clock(idle, Arc::new(SystemClock))
    }

    pub fn with_clock(idle: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entity_types: IdleCache::with_clock("entity_types", idle, Arc::clone(&clock)),
            paintings: IdleCache::with_clock("paintings", idle, Arc::clone(&clock)),
            particles: IdleCache::with_clock("particles", idle, Arc::clone(&clock)),
            blocks: IdleCache::with_clock("blocks", idle, clock),
        }
    }

    #[must_use]
    pub fn stats(&self) -> AdapterCacheStats {
        AdapterCacheStats {
            entity_types: self.entity_types.stats(),
            paintings: self.paintings.stats(),
            particles: self.particles.stats(),
            blocks: self.blocks.stats(),
        }
    }

    /// Run an eviction pass over every category.
    pub fn evict_expired(&self) -> usize {
        let evicted = self.entity_types.evict_expired()
            + self.paintings.evict_expired()
            + self.particles.evict_expired()
            + self.blocks.evict_expired();
        if evicted > 0 {
            debug!(evicted, "evicted idle adapter cache entries");
        }
        evicted
    }

    pub fn invalidate_all(&self) {
        self.entity_types.invalidate_all();
        self.paintings.invalidate_all();
        self.particles.invalidate_all();
        self.blocks.invalidate_all();
    }
}
