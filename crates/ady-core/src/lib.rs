//! Version-independent model for simulated entities.
//!
//! Every value here is stable across server releases. Translating them into
//! what a particular release understands is the job of `ady-nms`.
//!
//! ```text
//!   EntityType ─┐
//!   Painting ───┤                     ┌──────────────────────┐
//!   Particle ───┼── abstract values ──▶  per-version adapter │──▶ native values
//!   BlockData ──┤                     └──────────────────────┘
//!   Location ───┘                         ▲
//!                                         │ branches on
//!                                   PlatformVersion
//! ```

pub mod block;
pub mod chat;
pub mod entity;
pub mod fish;
pub mod painting;
pub mod particle;
pub mod pos;
pub mod version;

pub use block::BlockData;
pub use chat::{ChatColor, ChatComponent, NamedColor};
pub use entity::EntityType;
pub use fish::{FishPatternError, TropicalFishPattern};
pub use painting::Painting;
pub use particle::Particle;
pub use pos::{BlockPos, ChunkPos, Location, PackLayout, Vec3d, Vector};
pub use version::{MAX_PATCH, PlatformVersion, VersionError};
