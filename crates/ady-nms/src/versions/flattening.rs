//! 1.13: names for blocks and paintings, a particle registry, but entity
//! types still by numeric id. Types new in 1.13 never had one and come from
//! the entity type registry instead.

use ady_core::{BlockData, EntityType, PackLayout, Painting, Particle};
use tracing::trace;

use super::{Era, VersionAdapter, block_lookup, legacy_entity_type, named_painting};
use crate::chunk::ChunkTier;
use crate::context::AdapterContext;
use crate::error::{AdaptError, Result};
use crate::native::{NativeEntityType, NativePainting, NativeParticle, ParticleRegistryEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct FlatteningAdapter;

impl VersionAdapter for FlatteningAdapter {
    fn era(&self) -> Era {
        Era::Flattening
    }

    fn entity_type(&self, ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType> {
        let registry = ctx.registry();
        if !registry.is_available(ty, ctx.version()) || registry.bukkit_entity_id(ty).is_some() {
            return legacy_entity_type(ctx, ty);
        }

        let key = format!("minecraft:{}", ty.name().to_ascii_lowercase());
        match ctx.host().entity_type_registry(&key) {
            Ok(Some(entry)) => Ok(NativeEntityType::Registry(entry)),
            Ok(None) => Err(AdaptError::UnsupportedEntityType {
                ty,
                candidates: vec![key],
                version: ctx.version(),
            }),
            Err(source) => Err(AdaptError::lookup(
                "IRegistry.ENTITY_TYPE",
                ctx.version(),
                source,
            )),
        }
    }

    fn painting(&self, ctx: &AdapterContext, painting: Painting) -> Result<NativePainting> {
        named_painting(ctx, painting)
    }

    fn particle(&self, ctx: &AdapterContext, particle: Particle) -> Result<NativeParticle> {
        let key = particle.key();
        match ctx.host().particle_registry(&key) {
            Ok(Some(entry)) => {
                if let ParticleRegistryEntry::Typed { param } = &entry {
                    trace!(%particle, param = %param.key, "particle registry entry is its own param");
                }
                Ok(NativeParticle::Registry(entry.into_ref()))
            }
            Ok(None) => Err(AdaptError::unsupported("particle", particle, ctx.version())),
            Err(source) => Err(AdaptError::lookup(
                "IRegistry.PARTICLE_TYPE",
                ctx.version(),
                source,
            )),
        }
    }

    fn block_id(&self, ctx: &AdapterContext, block: &BlockData) -> Result<i32> {
        block_lookup(ctx, block, "Block.getCombinedId", |host| {
            host.combined_block_id(block)
        })
    }

    fn pack_layout(&self) -> PackLayout {
        PackLayout::XYZ
    }

    fn chunk_tiers(&self) -> &'static [ChunkTier] {
        &[ChunkTier::LegacyChunkMap]
    }
}
