//! 1.18 onwards: block states by registry id and the renamed chunk map.

use ady_core::{BlockData, EntityType, Painting, Particle, PlatformVersion};

use super::{
    Era, VersionAdapter, block_lookup, named_entity_type, named_painting, named_particle,
};
use crate::chunk::ChunkTier;
use crate::context::AdapterContext;
use crate::error::Result;
use crate::native::{NativeEntityType, NativePainting, NativeParticle};

#[derive(Debug, Clone, Copy, Default)]
pub struct CavesAdapter;

impl VersionAdapter for CavesAdapter {
    fn era(&self) -> Era {
        Era::Caves
    }

    fn entity_type(&self, ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType> {
        named_entity_type(ctx, ty)
    }

    fn painting(&self, ctx: &AdapterContext, painting: Painting) -> Result<NativePainting> {
        named_painting(ctx, painting)
    }

    fn particle(&self, ctx: &AdapterContext, particle: Particle) -> Result<NativeParticle> {
        named_particle(ctx, particle)
    }

    fn block_id(&self, ctx: &AdapterContext, block: &BlockData) -> Result<i32> {
        block_lookup(ctx, block, "Block.getId", |host| host.block_registry_id(block))
    }

    fn chunk_tiers(&self) -> &'static [ChunkTier] {
        &[
            ChunkTier::VisibleChunkMap,
            ChunkTier::PlayerChunkMap,
            ChunkTier::LegacyChunkMap,
        ]
    }

    fn metadata_accessor(&self, version: PlatformVersion) -> &'static str {
        if version >= PlatformVersion::V1_19 {
            "entityData"
        } else {
            "dataWatcher"
        }
    }
}
