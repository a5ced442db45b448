//! 1.8 to 1.12: numeric ids everywhere, no particle registry.

use ady_core::{BlockData, EntityType, PackLayout, Painting, Particle};

use super::{Era, VersionAdapter, legacy_entity_type, legacy_painting};
use crate::chunk::ChunkTier;
use crate::context::AdapterContext;
use crate::error::Result;
use crate::native::{NativeEntityType, NativePainting, NativeParticle};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAdapter;

impl VersionAdapter for LegacyAdapter {
    fn era(&self) -> Era {
        Era::Legacy
    }

    fn entity_type(&self, ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType> {
        legacy_entity_type(ctx, ty)
    }

    fn painting(&self, ctx: &AdapterContext, painting: Painting) -> Result<NativePainting> {
        legacy_painting(ctx, painting)
    }

    fn particle(&self, _ctx: &AdapterContext, _particle: Particle) -> Result<NativeParticle> {
        Ok(NativeParticle::Disabled)
    }

    fn block_id(&self, _ctx: &AdapterContext, block: &BlockData) -> Result<i32> {
        Ok(block.legacy_combined_id())
    }

    fn pack_layout(&self) -> PackLayout {
        PackLayout::XYZ
    }

    fn chunk_tiers(&self) -> &'static [ChunkTier] {
        &[ChunkTier::LegacyChunkMap]
    }
}
