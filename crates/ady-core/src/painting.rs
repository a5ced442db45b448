//! Painting motives.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! paintings {
    ($($variant:ident => ($path:literal, $legacy:expr)),* $(,)?) => {
        /// A painting motive.
        ///
        /// Carries the registry path used from 1.13 and the art ordinal used by
        /// older releases. Motives added after 1.12 have no legacy ordinal.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum Painting {
            $($variant,)*
        }

        impl Painting {
            pub const ALL: &'static [Painting] = &[$(Painting::$variant,)*];

            /// Registry path, e.g. `kebab`.
            #[must_use]
            pub const fn path(self) -> &'static str {
                match self {
                    $(Painting::$variant => $path,)*
                }
            }

            /// Pre-1.13 art ordinal.
            #[must_use]
            pub const fn legacy(self) -> Option<i32> {
                match self {
                    $(Painting::$variant => $legacy,)*
                }
            }
        }
    };
}

paintings! {
    Kebab => ("kebab", Some(0)),
    Aztec => ("aztec", Some(1)),
    Alban => ("alban", Some(2)),
    Aztec2 => ("aztec2", Some(3)),
    Bomb => ("bomb", Some(4)),
    Plant => ("plant", Some(5)),
    Wasteland => ("wasteland", Some(6)),
    Pool => ("pool", Some(7)),
    Courbet => ("courbet", Some(8)),
    Sea => ("sea", Some(9)),
    Sunset => ("sunset", Some(10)),
    Creebet => ("creebet", Some(11)),
    Wanderer => ("wanderer", Some(12)),
    Graham => ("graham", Some(13)),
    Match => ("match", Some(14)),
    Bust => ("bust", Some(15)),
    Stage => ("stage", Some(16)),
    Void => ("void", Some(17)),
    SkullAndRoses => ("skull_and_roses", Some(18)),
    Wither => ("wither", Some(19)),
    Fighters => ("fighters", Some(20)),
    Pointer => ("pointer", Some(21)),
    Pigscene => ("pigscene", Some(22)),
    BurningSkull => ("burning_skull", Some(23)),
    Skeleton => ("skeleton", Some(24)),
    DonkeyKong => ("donkey_kong", Some(25)),
    Earth => ("earth", None),
    Wind => ("wind", None),
    Water => ("water", None),
    Fire => ("fire", None),
}

impl Painting {
    /// Namespaced registry key, e.g. `minecraft:kebab`.
    #[must_use]
    pub fn key(self) -> String {
        format!("minecraft:{}", self.path())
    }
}

impl fmt::Display for Painting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
