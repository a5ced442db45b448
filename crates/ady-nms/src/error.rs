//! Adaptation error types.

use ady_core::{EntityType, FishPatternError, PlatformVersion};
use thiserror::Error;

/// Failure raised by a server internals accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The accessor does not exist on the running release.
    #[error("accessor {0} does not exist on this release")]
    Missing(&'static str),

    /// The accessor exists but raised.
    #[error("{path}: {message}")]
    Failed { path: &'static str, message: String },
}

pub type HostResult<T> = std::result::Result<T, HostError>;

/// One failed chunk probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub probe: &'static str,
    pub error: HostError,
}

/// Adaptation error type.
#[derive(Error, Debug)]
pub enum AdaptError {
    /// No candidate name resolved to a native entity type.
    #[error("entity type {ty} is not supported on {version} (tried {candidates:?})")]
    UnsupportedEntityType {
        ty: EntityType,
        candidates: Vec<String>,
        version: PlatformVersion,
    },

    /// A painting, particle, block or similar has no native analog.
    #[error("{feature} {value} has no native counterpart on {version}")]
    UnsupportedForVersion {
        feature: &'static str,
        value: String,
        version: PlatformVersion,
    },

    /// An internals accessor raised and no fallback exists.
    #[error("internal lookup {path} failed on {version}: {source}")]
    InternalLookup {
        path: &'static str,
        version: PlatformVersion,
        #[source]
        source: HostError,
    },

    /// Every chunk visibility probe raised.
    #[error("visibility of chunk ({x}, {z}) for {player} is unknown: every probe failed {attempts:?}")]
    ChunkProbeExhausted {
        player: String,
        x: i32,
        z: i32,
        attempts: Vec<ProbeFailure>,
    },

    #[error(transparent)]
    FishPattern(#[from] FishPatternError),

    #[error("chat serialization failed: {0}")]
    Chat(#[from] serde_json::Error),
}

impl AdaptError {
    pub(crate) fn unsupported(
        feature: &'static str,
        value: impl ToString,
        version: PlatformVersion,
    ) -> Self {
        Self::UnsupportedForVersion {
            feature,
            value: value.to_string(),
            version,
        }
    }

    pub(crate) fn lookup(path: &'static str, version: PlatformVersion, source: HostError) -> Self {
        Self::InternalLookup {
            path,
            version,
            source,
        }
    }
}

/// Result type for adaptation operations.
pub type Result<T> = std::result::Result<T, AdaptError>;
