//! World coordinates: locations, block positions, chunk keys and vectors.

use serde::{Deserialize, Serialize};

pub const CHUNK_SIZE: i32 = 16;

/// A precise position in a named world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    #[must_use]
    pub fn block_x(&self) -> i32 {
        self.x.floor() as i32
    }

    #[must_use]
    pub fn block_y(&self) -> i32 {
        self.y.floor() as i32
    }

    #[must_use]
    pub fn block_z(&self) -> i32 {
        self.z.floor() as i32
    }

    /// The block containing this location.
    #[must_use]
    pub fn block_pos(&self) -> BlockPos {
        BlockPos::new(self.block_x(), self.block_y(), self.block_z())
    }

    #[must_use]
    pub fn chunk_pos(&self) -> ChunkPos {
        self.block_pos().chunk_pos()
    }
}

/// Bit layout of a packed block position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackLayout {
    /// x:26 | y:12 | z:26, used before 1.14.
    XYZ,
    /// x:26 | z:26 | y:12, used from 1.14.
    XZY,
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn chunk_pos(self) -> ChunkPos {
        ChunkPos::new(
            self.x.div_euclid(CHUNK_SIZE),
            self.z.div_euclid(CHUNK_SIZE),
        )
    }

    #[must_use]
    pub const fn pack(self, layout: PackLayout) -> i64 {
        let x = self.x as i64 & 0x3FF_FFFF;
        let y = self.y as i64 & 0xFFF;
        let z = self.z as i64 & 0x3FF_FFFF;
        match layout {
            PackLayout::XYZ => (x << 38) | (y << 26) | z,
            PackLayout::XZY => (x << 38) | (z << 12) | y,
        }
    }

    #[must_use]
    pub const fn unpack(packed: i64, layout: PackLayout) -> Self {
        match layout {
            PackLayout::XYZ => Self {
                x: (packed >> 38) as i32,
                y: (packed << 26 >> 52) as i32,
                z: (packed << 38 >> 38) as i32,
            },
            PackLayout::XZY => Self {
                x: (packed >> 38) as i32,
                y: (packed << 52 >> 52) as i32,
                z: (packed << 26 >> 38) as i32,
            },
        }
    }
}

/// Chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Packs both coordinates into the key used by server chunk maps:
    /// x in the low 32 bits, z in the high 32 bits.
    #[must_use]
    pub const fn as_long(x: i32, z: i32) -> i64 {
        (x as u32 as i64) | ((z as u32 as i64) << 32)
    }

    #[must_use]
    pub const fn key(self) -> i64 {
        Self::as_long(self.x, self.z)
    }

    #[must_use]
    pub const fn from_long(key: i64) -> Self {
        Self {
            x: key as i32,
            z: (key >> 32) as i32,
        }
    }
}

/// A direction or offset in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// The server's own immutable 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3d {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_truncates_toward_negative_infinity() {
        let loc = Location::new("world", -0.5, 64.9, 15.99);
        assert_eq!(loc.block_pos(), BlockPos::new(-1, 64, 15));
        assert_eq!(loc.chunk_pos(), ChunkPos::new(-1, 0));
    }

    #[test]
    fn block_pos_layouts() {
        let pos = BlockPos::new(-1234, 70, 5678);
        for layout in [PackLayout::XYZ, PackLayout::XZY] {
            assert_eq!(BlockPos::unpack(pos.pack(layout), layout), pos);
        }
        assert_ne!(pos.pack(PackLayout::XYZ), pos.pack(PackLayout::XZY));
    }

    #[test]
    fn block_pos_negative_y() {
        let pos = BlockPos::new(3, -64, -3);
        assert_eq!(BlockPos::unpack(pos.pack(PackLayout::XZY), PackLayout::XZY), pos);
    }

    #[test]
    fn chunk_key_layout() {
        assert_eq!(ChunkPos::as_long(1, 0), 1);
        assert_eq!(ChunkPos::as_long(0, 1), 1 << 32);
        assert_eq!(ChunkPos::as_long(-1, 0), 0xFFFF_FFFF);
        let pos = ChunkPos::new(-30, 42);
        assert_eq!(ChunkPos::from_long(pos.key()), pos);
    }
}
