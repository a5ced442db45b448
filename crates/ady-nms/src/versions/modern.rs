//! 1.14 to 1.17: every registry is name-indexed.

use ady_core::{BlockData, EntityType, Painting, Particle};

use super::{
    Era, VersionAdapter, block_lookup, named_entity_type, named_painting, named_particle,
};
use crate::chunk::ChunkTier;
use crate::context::AdapterContext;
use crate::error::Result;
use crate::native::{NativeEntityType, NativePainting, NativeParticle};

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernAdapter;

impl VersionAdapter for ModernAdapter {
    fn era(&self) -> Era {
        Era::Modern
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
        block_lookup(ctx, block, "Block.getCombinedId", |host| {
            host.combined_block_id(block)
        })
    }

    fn chunk_tiers(&self) -> &'static [ChunkTier] {
        &[ChunkTier::PlayerChunkMap, ChunkTier::LegacyChunkMap]
    }
}
