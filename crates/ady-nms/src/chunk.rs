//! Has a chunk already been sent to a player?
//!
//! Each way of answering is a [`ChunkProbe`]. The prober holds them in order
//! and asks each until one answers without raising:
//!
//! ```text
//!   paper ──err──▶ visible-chunk-map ──err──▶ player-chunk-map ──err──▶ legacy-chunk-map ──err──▶ exhausted
//!     │ ok                │ ok                      │ ok                       │ ok
//!     ▼                   ▼                         ▼                          ▼
//!   answer              answer                    answer                     answer
//! ```
//!
//! Tiers that do not exist on the running release are left out up front.

use std::fmt;

use ady_core::{ChunkPos, PlatformVersion};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{AdaptError, HostResult, ProbeFailure, Result};
use crate::host::{NativeHost, PlayerHandle};
use crate::versions;

/// Shapes of the server's per-world chunk map, one per era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkTier {
    /// `visibleChunkMap` presence, 1.18 onwards.
    VisibleChunkMap,
    /// `getVisibleChunk`, 1.14 to 1.17.
    PlayerChunkMap,
    /// `getChunk(x, z)`, before 1.14.
    LegacyChunkMap,
}

impl ChunkTier {
    #[must_use]
    pub fn probe(self) -> Box<dyn ChunkProbe> {
        match self {
            Self::VisibleChunkMap => Box::new(VisibleChunkMapProbe),
            Self::PlayerChunkMap => Box::new(PlayerChunkMapProbe),
            Self::LegacyChunkMap => Box::new(LegacyChunkMapProbe),
        }
    }
}

/// One way of checking chunk delivery.
pub trait ChunkProbe: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn probe(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        chunk: ChunkPos,
    ) -> HostResult<bool>;
}

/// The server fork's own `isChunkSent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperProbe;

impl ChunkProbe for PaperProbe {
    fn name(&self) -> &'static str {
        "paper"
    }

    fn probe(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        chunk: ChunkPos,
    ) -> HostResult<bool> {
        host.paper_chunk_sent(player, chunk)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleChunkMapProbe;

impl ChunkProbe for VisibleChunkMapProbe {
    fn name(&self) -> &'static str {
        "visible-chunk-map"
    }

    fn probe(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        chunk: ChunkPos,
    ) -> HostResult<bool> {
        host.visible_chunk_map_contains(&player.world, chunk.key())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerChunkMapProbe;

impl ChunkProbe for PlayerChunkMapProbe {
    fn name(&self) -> &'static str {
        "player-chunk-map"
    }

    fn probe(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        chunk: ChunkPos,
    ) -> HostResult<bool> {
        host.player_chunk_map_visible(&player.world, chunk.key())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyChunkMapProbe;

impl ChunkProbe for LegacyChunkMapProbe {
    fn name(&self) -> &'static str {
        "legacy-chunk-map"
    }

    fn probe(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        chunk: ChunkPos,
    ) -> HostResult<bool> {
        host.legacy_chunk_map_contains(&player.world, chunk.x, chunk.z)
    }
}

/// Ordered chunk probes; the first one that answers wins.
#[derive(Debug)]
pub struct ChunkVisibilityProber {
    probes: Vec<Box<dyn ChunkProbe>>,
}

impl ChunkVisibilityProber {
    /// `tiers` in order, preceded by the fork probe when `paper` is set.
    #[must_use]
    pub fn new(tiers: &[ChunkTier], paper: bool) -> Self {
        let mut probes: Vec<Box<dyn ChunkProbe>> = Vec::with_capacity(tiers.len() + 1);
        if paper {
            probes.push(Box::new(PaperProbe));
        }
        probes.extend(tiers.iter().map(|tier| tier.probe()));
        Self::with_probes(probes)
    }

    #[must_use]
    pub fn for_version(version: PlatformVersion, paper: bool) -> Self {
        Self::new(versions::select(version).chunk_tiers(), paper)
    }

    /// Exactly `probes`, tried in the given order.
    #[must_use]
    pub fn with_probes(probes: Vec<Box<dyn ChunkProbe>>) -> Self {
        Self { probes }
    }

    pub fn probe_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.probes.iter().map(|probe| probe.name())
    }

    /// Whether chunk (`x`, `z`) has been sent to `player`.
    ///
    /// Fails with [`AdaptError::ChunkProbeExhausted`] when every probe raises.
    pub fn is_chunk_visible(
        &self,
        host: &dyn NativeHost,
        player: &PlayerHandle,
        x: i32,
        z: i32,
    ) -> Result<bool> {
        let chunk = ChunkPos::new(x, z);
        let mut attempts = Vec::new();
        for probe in &self.probes {
            match probe.probe(host, player, chunk) {
                Ok(visible) => {
                    trace!(
                        probe = probe.name(),
                        player = %player.name,
                        x,
                        z,
                        visible,
                        "chunk probe answered"
                    );
                    return Ok(visible);
                }
                Err(error) => {
                    debug!(probe = probe.name(), %error, "chunk probe failed, falling back");
                    attempts.push(ProbeFailure {
                        probe: probe.name(),
                        error,
                    });
                }
            }
        }
        warn!(player = %player.name, x, z, "every chunk probe failed");
        Err(AdaptError::ChunkProbeExhausted {
            player: player.name.clone(),
            x,
            z,
            attempts,
        })
    }
}
