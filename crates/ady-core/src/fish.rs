//! Tropical fish patterns and their packed data values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no tropical fish pattern for data value {0:#06x}")]
pub struct FishPatternError(pub i32);

/// Tropical fish body pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TropicalFishPattern {
    Kob,
    Sunstreak,
    Snooper,
    Dasher,
    Brinely,
    Spotty,
    Flopper,
    Stripey,
    Glitter,
    Blockfish,
    Betty,
    Clayfish,
}

impl TropicalFishPattern {
    pub const ALL: [Self; 12] = [
        Self::Kob,
        Self::Sunstreak,
        Self::Snooper,
        Self::Dasher,
        Self::Brinely,
        Self::Spotty,
        Self::Flopper,
        Self::Stripey,
        Self::Glitter,
        Self::Blockfish,
        Self::Betty,
        Self::Clayfish,
    ];

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Body size: 0 for small fish, 1 for large.
    #[must_use]
    pub const fn size(self) -> i32 {
        (self as i32) / 6
    }

    /// Pattern index within its size class.
    #[must_use]
    pub const fn pattern(self) -> i32 {
        (self as i32) % 6
    }

    /// `size | pattern << 8`.
    #[must_use]
    pub const fn data_value(self) -> i32 {
        self.size() | (self.pattern() << 8)
    }

    /// Decodes the low 16 bits of a variant value; colour bytes above are ignored.
    pub fn from_data(data: i32) -> Result<Self, FishPatternError> {
        let masked = data & 0xFFFF;
        Self::ALL
            .into_iter()
            .find(|p| p.data_value() == masked)
            .ok_or(FishPatternError(masked))
    }
}
