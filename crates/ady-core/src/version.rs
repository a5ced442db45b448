//! Detected server release and the thresholds adapters branch on.
//!
//! A [`PlatformVersion`] is established once at startup and never changes for
//! the lifetime of the process. Everything downstream compares against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest supported minor release (1.8).
pub const OLDEST_MINOR: u32 = 8;
/// Newest supported minor release (1.20).
pub const NEWEST_MINOR: u32 = 20;
/// Highest patch number; [`PlatformVersion::major_legacy`] gives the patch two digits.
pub const MAX_PATCH: u32 = 99;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("unrecognized version string: {0:?}")]
    Malformed(String),
    #[error("unsupported release 1.{minor}: supported releases are 1.8 through 1.20")]
    Unsupported { minor: u32 },
    #[error("patch {patch} out of range: releases go up to patch {MAX_PATCH}")]
    Patch { patch: u32 },
}

/// A `1.<minor>.<patch>` server release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformVersion {
    minor: u32,
    patch: u32,
}

impl PlatformVersion {
    pub const V1_8: Self = Self::at(8);
    pub const V1_9: Self = Self::at(9);
    pub const V1_10: Self = Self::at(10);
    pub const V1_11: Self = Self::at(11);
    pub const V1_12: Self = Self::at(12);
    pub const V1_13: Self = Self::at(13);
    pub const V1_14: Self = Self::at(14);
    pub const V1_15: Self = Self::at(15);
    pub const V1_16: Self = Self::at(16);
    pub const V1_17: Self = Self::at(17);
    pub const V1_18: Self = Self::at(18);
    pub const V1_19: Self = Self::at(19);
    pub const V1_20: Self = Self::at(20);

    const fn at(minor: u32) -> Self {
        Self { minor, patch: 0 }
    }

    pub fn new(minor: u32, patch: u32) -> Result<Self, VersionError> {
        if !(OLDEST_MINOR..=NEWEST_MINOR).contains(&minor) {
            return Err(VersionError::Unsupported { minor });
        }
        if patch > MAX_PATCH {
            return Err(VersionError::Patch { patch });
        }
        Ok(Self { minor, patch })
    }

    /// Same minor release at a specific patch, saturating at [`MAX_PATCH`].
    #[must_use]
    pub const fn with_patch(self, patch: u32) -> Self {
        Self {
            minor: self.minor,
            patch: if patch > MAX_PATCH { MAX_PATCH } else { patch },
        }
    }

    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    #[must_use]
    pub const fn patch(self) -> u32 {
        self.patch
    }

    /// Index of the minor release among supported releases (`1.8 -> 0`, `1.13 -> 5`).
    #[must_use]
    pub const fn major(self) -> u32 {
        self.minor - OLDEST_MINOR
    }

    /// Numeric encoding used for range checks (`1.19.4 -> 11904`).
    #[must_use]
    pub const fn major_legacy(self) -> u32 {
        10000 + self.minor * 100 + self.patch
    }

    /// Releases from 1.17 ship internals under stable universal names.
    #[must_use]
    pub const fn is_universal(self) -> bool {
        self.minor >= 17
    }

    #[must_use]
    pub fn is_higher_or_equal(self, other: Self) -> bool {
        self >= other
    }

    /// Detects a release from any of the strings a server reports about itself:
    ///
    /// - plain releases: `1.19.4`, `1.20`
    /// - Bukkit versions: `1.20.1-R0.1-SNAPSHOT`
    /// - server banners: `git-Paper-196 (MC: 1.19.4)`
    /// - internals package tags: `v1_19_R3`
    pub fn detect(raw: &str) -> Result<Self, VersionError> {
        let raw = raw.trim();

        if let Some((_, rest)) = raw.split_once("(MC: ") {
            let (release, _) = rest
                .split_once(')')
                .ok_or_else(|| VersionError::Malformed(raw.to_owned()))?;
            return Self::parse_release(release, raw);
        }

        if let Some(tag) = raw.strip_prefix('v') {
            let mut parts = tag.split('_');
            return match (parts.next(), parts.next(), parts.next()) {
                (Some("1"), Some(minor), Some(revision)) if revision.starts_with('R') => {
                    let minor = minor
                        .parse()
                        .map_err(|_| VersionError::Malformed(raw.to_owned()))?;
                    Self::new(minor, 0)
                }
                _ => Err(VersionError::Malformed(raw.to_owned())),
            };
        }

        let release = raw.split('-').next().unwrap_or(raw);
        Self::parse_release(release, raw)
    }

    fn parse_release(release: &str, raw: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed(raw.to_owned());
        let mut parts = release.trim().split('.');
        if parts.next() != Some("1") {
            return Err(malformed());
        }
        let minor = parts
            .next()
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())?;
        let patch: u32 = match parts.next() {
            Some(patch) => patch.parse().map_err(|_| malformed())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(malformed());
        }
        Self::new(minor, patch)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "1.{}", self.minor)
        } else {
            write!(f, "1.{}.{}", self.minor, self.patch)
        }
    }
}

impl FromStr for PlatformVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::detect(s)
    }
}

impl TryFrom<String> for PlatformVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::detect(&value)
    }
}

impl From<PlatformVersion> for String {
    fn from(version: PlatformVersion) -> Self {
        version.to_string()
    }
}
