//! One adapter per range of server releases.
//!
//! | era          | releases     | entity types | paintings | particles        | block ids     |
//! |--------------|--------------|--------------|-----------|------------------|---------------|
//! | `legacy`     | 1.8 to 1.12  | numeric id   | ordinal   | disabled         | item + data   |
//! | `flattening` | 1.13         | numeric id   | by name   | particle registry| combined id   |
//! | `modern`     | 1.14 to 1.17 | by name      | by name   | by name          | combined id   |
//! | `caves`      | 1.18 onwards | by name      | by name   | by name          | registry id   |
//!
//! The adapter is picked once, from the detected release, by [`select`].

mod caves;
mod flattening;
mod legacy;
mod modern;

pub use caves::CavesAdapter;
pub use flattening::FlatteningAdapter;
pub use legacy::LegacyAdapter;
pub use modern::ModernAdapter;

use std::fmt;

use ady_core::{BlockData, EntityType, PackLayout, Painting, Particle, PlatformVersion};
use serde::Serialize;
use tracing::{debug, warn};

use crate::chunk::ChunkTier;
use crate::context::AdapterContext;
use crate::error::{AdaptError, HostResult, Result};
use crate::host::NativeHost;
use crate::native::{NativeEntityType, NativePainting, NativeParticle, RegistryRef};

/// Release ranges sharing one set of internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Legacy,
    Flattening,
    Modern,
    Caves,
}

impl Era {
    #[must_use]
    pub fn of(version: PlatformVersion) -> Self {
        if version.major() >= 10 {
            Self::Caves
        } else if version.major_legacy() >= 11400 {
            Self::Modern
        } else if version.major() >= 5 {
            Self::Flattening
        } else {
            Self::Legacy
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Flattening => "flattening",
            Self::Modern => "modern",
            Self::Caves => "caves",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translation of abstract values for one era.
///
/// Implementations are stateless; caching happens above them.
pub trait VersionAdapter: Send + Sync + fmt::Debug {
    fn era(&self) -> Era;

    fn entity_type(&self, ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType>;

    fn painting(&self, ctx: &AdapterContext, painting: Painting) -> Result<NativePainting>;

    fn particle(&self, ctx: &AdapterContext, particle: Particle) -> Result<NativeParticle>;

    fn block_id(&self, ctx: &AdapterContext, block: &BlockData) -> Result<i32>;

    /// Bit layout of packed block positions on the wire.
    fn pack_layout(&self) -> PackLayout {
        PackLayout::XZY
    }

    /// Chunk map shapes present in this era, newest first.
    fn chunk_tiers(&self) -> &'static [ChunkTier];

    /// Name of the entity metadata field.
    fn metadata_accessor(&self, _version: PlatformVersion) -> &'static str {
        "dataWatcher"
    }
}

/// The adapter for `version`.
#[must_use]
pub fn select(version: PlatformVersion) -> Box<dyn VersionAdapter> {
    let era = Era::of(version);
    debug!(%version, %era, "selected version adapter");
    match era {
        Era::Legacy => Box::new(LegacyAdapter),
        Era::Flattening => Box::new(FlatteningAdapter),
        Era::Modern => Box::new(ModernAdapter),
        Era::Caves => Box::new(CavesAdapter),
    }
}

/// First candidate name the host knows, canonical name first.
///
/// A candidate whose lookup raises counts as absent.
fn named_entity_type(ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType> {
    let candidates = ctx.registry().candidates(ty);
    for name in &candidates {
        match ctx.host().entity_type_field(name) {
            Ok(Some(entry)) => {
                debug!(%ty, name, id = entry.protocol_id, "resolved entity type");
                return Ok(NativeEntityType::Registry(entry));
            }
            Ok(None) => {}
            Err(error) => debug!(%ty, name, %error, "entity type candidate lookup failed"),
        }
    }
    warn!(%ty, version = %ctx.version(), ?candidates, "entity type not supported");
    Err(AdaptError::UnsupportedEntityType {
        ty,
        candidates: candidates.iter().map(|name| (*name).to_owned()).collect(),
        version: ctx.version(),
    })
}

fn legacy_entity_type(ctx: &AdapterContext, ty: EntityType) -> Result<NativeEntityType> {
    let registry = ctx.registry();
    if !registry.is_available(ty, ctx.version()) {
        return Err(AdaptError::UnsupportedEntityType {
            ty,
            candidates: Vec::new(),
            version: ctx.version(),
        });
    }
    registry
        .bukkit_entity_id(ty)
        .map(|id| NativeEntityType::LegacyId { id })
        .ok_or_else(|| AdaptError::UnsupportedEntityType {
            ty,
            candidates: Vec::new(),
            version: ctx.version(),
        })
}

fn named_painting(ctx: &AdapterContext, painting: Painting) -> Result<NativePainting> {
    match ctx.host().painting_field(painting.path()) {
        Ok(Some(entry)) => Ok(NativePainting::Registry(entry)),
        Ok(None) => Err(AdaptError::unsupported("painting", painting, ctx.version())),
        Err(source) => Err(AdaptError::lookup("Paintings", ctx.version(), source)),
    }
}

fn legacy_painting(ctx: &AdapterContext, painting: Painting) -> Result<NativePainting> {
    painting
        .legacy()
        .map(|ordinal| NativePainting::Legacy { ordinal })
        .ok_or_else(|| AdaptError::unsupported("painting", painting, ctx.version()))
}

/// Particle by field name, substituting the configured fallback when the
/// release lacks the requested one.
fn named_particle(ctx: &AdapterContext, particle: Particle) -> Result<NativeParticle> {
    let field = |name: &str| -> Result<Option<RegistryRef>> {
        ctx.host()
            .particle_field(name)
            .map_err(|source| AdaptError::lookup("Particles", ctx.version(), source))
    };
    if let Some(entry) = field(particle.name())? {
        return Ok(NativeParticle::Registry(entry));
    }
    let fallback = ctx.config().particle_fallback;
    warn!(%particle, %fallback, version = %ctx.version(), "particle missing, using fallback");
    field(fallback.name())?
        .map(NativeParticle::Registry)
        .ok_or_else(|| AdaptError::unsupported("particle", particle, ctx.version()))
}

fn block_lookup<F>(
    ctx: &AdapterContext,
    block: &BlockData,
    path: &'static str,
    lookup: F,
) -> Result<i32>
where
    F: FnOnce(&dyn NativeHost) -> HostResult<Option<i32>>,
{
    match lookup(ctx.host()) {
        Ok(Some(id)) => Ok(id),
        Ok(None) => Err(AdaptError::unsupported(
            "block",
            block.namespaced_name(),
            ctx.version(),
        )),
        Err(source) => Err(AdaptError::lookup(path, ctx.version(), source)),
    }
}
