//! The adapter facade.

use std::sync::Arc;

use ady_cache::{Clock, SystemClock};
use ady_core::{
    BlockData, ChatComponent, EntityType, Location, Painting, Particle, PlatformVersion,
    TropicalFishPattern, Vec3d, Vector,
};
use tracing::info;

use crate::caches::{AdapterCacheStats, AdapterCaches};
use crate::chat::ChatSerializer;
use crate::chunk::ChunkVisibilityProber;
use crate::context::AdapterContext;
use crate::error::{AdaptError, Result};
use crate::host::{EntityHandle, PlayerHandle};
use crate::native::{NativeBlockPos, NativeEntityType, NativePainting, NativeParticle};
use crate::versions::{self, Era, VersionAdapter};

/// Translation from abstract values to what the running release understands.
pub trait MinecraftHelper: Send + Sync {
    fn version(&self) -> PlatformVersion;

    /// Native entity type. Cached per type.
    fn adapt_entity_type(&self, ty: EntityType) -> Result<NativeEntityType>;

    /// Block coordinates of `location` and their wire encoding.
    fn adapt_location(&self, location: &Location) -> NativeBlockPos;

    /// Native painting. Cached per painting.
    fn adapt_painting(&self, painting: Painting) -> Result<NativePainting>;

    /// Native particle. Cached per particle.
    fn adapt_particle(&self, particle: Particle) -> Result<NativeParticle>;

    /// Tropical fish pattern from a variant int; colour bytes are ignored.
    fn adapt_tropical_fish_pattern(&self, data: i32) -> Result<TropicalFishPattern>;

    /// Variant int of `pattern`, the inverse of
    /// [`adapt_tropical_fish_pattern`](Self::adapt_tropical_fish_pattern).
    fn adapt_tropical_fish_data(&self, pattern: TropicalFishPattern) -> i32;

    /// Block state id. Cached per block.
    fn get_block_id(&self, block: &BlockData) -> Result<i32>;

    fn vec3d_to_vector(&self, vec: Vec3d) -> Vector;

    fn chat_serializer_to_json(&self, component: &ChatComponent) -> Result<String>;

    fn chat_message_from_string(&self, text: &str) -> ChatComponent;

    /// Whether chunk (`x`, `z`) has already been sent to `player`.
    fn is_chunk_visible(&self, player: &PlayerHandle, x: i32, z: i32) -> Result<bool>;

    fn entity_by_id(&self, world: &str, id: i32) -> Result<Option<EntityHandle>>;

    /// Name of the entity metadata field on this release.
    fn entity_metadata_accessor(&self) -> &'static str;
}

/// [`MinecraftHelper`] over an [`AdapterContext`], with one idle cache per
/// category.
#[derive(Debug)]
pub struct DefaultMinecraftHelper {
    context: AdapterContext,
    adapter: Box<dyn VersionAdapter>,
    caches: AdapterCaches,
    prober: ChunkVisibilityProber,
    chat: ChatSerializer,
}

impl DefaultMinecraftHelper {
    pub fn new(context: AdapterContext) -> Self {
        Self::with_clock(context, Arc::new(SystemClock))
    }

    pub fn with_clock(context: AdapterContext, clock: Arc<dyn Clock>) -> Self {
        let version = context.version();
        let adapter = versions::select(version);
        let prober =
            ChunkVisibilityProber::new(adapter.chunk_tiers(), context.config().paper_chunk_probe);
        let caches = AdapterCaches::with_clock(context.config().cache_idle(), clock);
        let chat = ChatSerializer::for_version(version);
        info!(
            %version,
            era = %adapter.era(),
            probes = ?prober.probe_names().collect::<Vec<_>>(),
            "minecraft helper ready"
        );
        Self {
            context,
            adapter,
            caches,
            prober,
            chat,
        }
    }

    #[must_use]
    pub fn context(&self) -> &AdapterContext {
        &self.context
    }

    #[must_use]
    pub fn era(&self) -> Era {
        self.adapter.era()
    }

    #[must_use]
    pub fn prober(&self) -> &ChunkVisibilityProber {
        &self.prober
    }

    #[must_use]
    pub fn chat_serializer(&self) -> ChatSerializer {
        self.chat
    }

    #[must_use]
    pub fn cache_stats(&self) -> AdapterCacheStats {
        self.caches.stats()
    }

    pub fn evict_expired(&self) -> usize {
        self.caches.evict_expired()
    }

    pub fn invalidate_all(&self) {
        self.caches.invalidate_all();
    }
}

impl MinecraftHelper for DefaultMinecraftHelper {
    fn version(&self) -> PlatformVersion {
        self.context.version()
    }

    fn adapt_entity_type(&self, ty: EntityType) -> Result<NativeEntityType> {
        self.caches
            .entity_types
            .get_or_try_insert_with(&ty, || self.adapter.entity_type(&self.context, ty))
    }

    fn adapt_location(&self, location: &Location) -> NativeBlockPos {
        let pos = location.block_pos();
        NativeBlockPos {
            pos,
            packed: pos.pack(self.adapter.pack_layout()),
        }
    }

    fn adapt_painting(&self, painting: Painting) -> Result<NativePainting> {
        self.caches
            .paintings
            .get_or_try_insert_with(&painting, || self.adapter.painting(&self.context, painting))
    }

    fn adapt_particle(&self, particle: Particle) -> Result<NativeParticle> {
        self.caches
            .particles
            .get_or_try_insert_with(&particle, || self.adapter.particle(&self.context, particle))
    }

    fn adapt_tropical_fish_pattern(&self, data: i32) -> Result<TropicalFishPattern> {
        Ok(TropicalFishPattern::from_data(data)?)
    }

    fn adapt_tropical_fish_data(&self, pattern: TropicalFishPattern) -> i32 {
        pattern.data_value()
    }

    fn get_block_id(&self, block: &BlockData) -> Result<i32> {
        self.caches
            .blocks
            .get_or_try_insert_with(block, || self.adapter.block_id(&self.context, block))
    }

    fn vec3d_to_vector(&self, vec: Vec3d) -> Vector {
        Vector::new(vec.x, vec.y, vec.z)
    }

    fn chat_serializer_to_json(&self, component: &ChatComponent) -> Result<String> {
        self.chat.to_json(component)
    }

    fn chat_message_from_string(&self, text: &str) -> ChatComponent {
        self.chat.from_string(text)
    }

    fn is_chunk_visible(&self, player: &PlayerHandle, x: i32, z: i32) -> Result<bool> {
        self.prober
            .is_chunk_visible(self.context.host(), player, x, z)
    }

    fn entity_by_id(&self, world: &str, id: i32) -> Result<Option<EntityHandle>> {
        self.context
            .host()
            .entity(world, id)
            .map_err(|source| AdaptError::lookup("World.getEntity", self.version(), source))
    }

    fn entity_metadata_accessor(&self) -> &'static str {
        self.adapter.metadata_accessor(self.version())
    }
}
