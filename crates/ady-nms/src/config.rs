//! Adapter configuration.
//!
//! Read from a JSON file, then overridden by `ADY_VERSION` and
//! `ADY_CACHE_IDLE_MINUTES` when those are set.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ady_core::{Particle, PlatformVersion, VersionError};
use ady_registry::RegistryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const ENV_VERSION: &str = "ADY_VERSION";
pub const ENV_CACHE_IDLE_MINUTES: &str = "ADY_CACHE_IDLE_MINUTES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {key}: {source}")]
    Version {
        key: &'static str,
        #[source]
        source: VersionError,
    },
    #[error("invalid {key}: {value:?} is not a whole number of minutes")]
    IdleMinutes { key: &'static str, value: String },
    #[error("no platform version configured and none detected")]
    NoVersion,
    #[error("invalid entity_aliases: {0}")]
    Aliases(#[from] RegistryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Forces the release instead of detecting it.
    pub version: Option<PlatformVersion>,
    pub cache_idle_minutes: u64,
    /// Particle substituted when a name-indexed release lacks the requested one.
    pub particle_fallback: Particle,
    /// Whether to ask the server's own chunk-sent check before the internal maps.
    pub paper_chunk_probe: bool,
    /// Extra server-side names per canonical entity type name.
    pub entity_aliases: HashMap<String, Vec<String>>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            version: None,
            cache_idle_minutes: 30,
            particle_fallback: Particle::Flame,
            paper_chunk_probe: true,
            entity_aliases: HashMap::new(),
        }
    }
}

impl AdapterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), "loaded adapter config");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_VERSION) {
            let version = PlatformVersion::detect(&raw).map_err(|source| ConfigError::Version {
                key: ENV_VERSION,
                source,
            })?;
            debug!(%version, "version overridden from environment");
            self.version = Some(version);
        }
        if let Some(raw) = lookup(ENV_CACHE_IDLE_MINUTES) {
            self.cache_idle_minutes = raw.trim().parse().map_err(|_| ConfigError::IdleMinutes {
                key: ENV_CACHE_IDLE_MINUTES,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn cache_idle(&self) -> Duration {
        Duration::from_secs(self.cache_idle_minutes.saturating_mul(60))
    }

    /// The configured release, else the one parsed from `detected`.
    pub fn resolve_version(&self, detected: Option<&str>) -> Result<PlatformVersion, ConfigError> {
        if let Some(version) = self.version {
            return Ok(version);
        }
        let raw = detected.ok_or(ConfigError::NoVersion)?;
        PlatformVersion::detect(raw).map_err(|source| ConfigError::Version {
            key: "server version",
            source,
        })
    }
}
