//! Version adaptation for server internals.
//!
//! Abstract values from `ady-core` go in, values native to the running server
//! release come out. The release is detected once and fixed in an
//! [`AdapterContext`]; [`DefaultMinecraftHelper`] picks the matching
//! [`VersionAdapter`] and memoizes its answers per category.
//!
//! Server internals are reached through the [`NativeHost`] trait.
//! [`ReportHost`] implements it from the vanilla data generator reports.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ady_core::{EntityType, PlatformVersion};
//! use ady_nms::{AdapterContext, DefaultMinecraftHelper, MinecraftHelper, ReportHost};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let version = PlatformVersion::detect("git-Paper-196 (MC: 1.19.4)")?;
//! let host = ReportHost::from_dir(version, "generated/reports".as_ref())?;
//! let helper = DefaultMinecraftHelper::new(AdapterContext::new(version, Arc::new(host)));
//! let zombie = helper.adapt_entity_type(EntityType::Zombie)?;
//! assert!(zombie.id() >= 0);
//! # Ok(())
//! # }
//! ```

mod caches;
mod chat;
mod chunk;
mod config;
mod context;
mod error;
mod helper;
mod host;
mod native;
mod report;
pub mod versions;

pub use caches::{AdapterCacheStats, AdapterCaches};
pub use chat::ChatSerializer;
pub use chunk::{
    ChunkProbe, ChunkTier, ChunkVisibilityProber, LegacyChunkMapProbe, PaperProbe,
    PlayerChunkMapProbe, VisibleChunkMapProbe,
};
pub use config::{AdapterConfig, ConfigError, ENV_CACHE_IDLE_MINUTES, ENV_VERSION};
pub use context::AdapterContext;
pub use error::{AdaptError, HostError, HostResult, ProbeFailure, Result};
pub use helper::{DefaultMinecraftHelper, MinecraftHelper};
pub use host::{EntityHandle, NativeHost, PlayerHandle};
pub use native::{
    NativeBlockPos, NativeEntityType, NativePainting, NativeParticle, ParticleRegistryEntry,
    RegistryRef,
};
pub use report::{ReportError, ReportHost};
pub use versions::{Era, VersionAdapter};
