//! Particle kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! particles {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A particle kind, named by its server-side field name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum Particle {
            $($variant,)*
        }

        impl Particle {
            pub const ALL: &'static [Particle] = &[$(Particle::$variant,)*];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Particle::$variant => $name,)*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Particle::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

particles! {
    AmbientEntityEffect => "AMBIENT_ENTITY_EFFECT",
    AngryVillager => "ANGRY_VILLAGER",
    Bubble => "BUBBLE",
    BubbleColumnUp => "BUBBLE_COLUMN_UP",
    BubblePop => "BUBBLE_POP",
    CampfireCosySmoke => "CAMPFIRE_COSY_SMOKE",
    CherryLeaves => "CHERRY_LEAVES",
    Cloud => "CLOUD",
    Composter => "COMPOSTER",
    Crit => "CRIT",
    CurrentDown => "CURRENT_DOWN",
    DamageIndicator => "DAMAGE_INDICATOR",
    Dolphin => "DOLPHIN",
    DragonBreath => "DRAGON_BREATH",
    DrippingLava => "DRIPPING_LAVA",
    DrippingWater => "DRIPPING_WATER",
    Effect => "EFFECT",
    ElderGuardian => "ELDER_GUARDIAN",
    Enchant => "ENCHANT",
    EnchantedHit => "ENCHANTED_HIT",
    EndRod => "END_ROD",
    EntityEffect => "ENTITY_EFFECT",
    Explosion => "EXPLOSION",
    ExplosionEmitter => "EXPLOSION_EMITTER",
    FallingHoney => "FALLING_HONEY",
    Firework => "FIREWORK",
    Fishing => "FISHING",
    Flame => "FLAME",
    Glow => "GLOW",
    HappyVillager => "HAPPY_VILLAGER",
    Heart => "HEART",
    InstantEffect => "INSTANT_EFFECT",
    ItemSlime => "ITEM_SLIME",
    ItemSnowball => "ITEM_SNOWBALL",
    LargeSmoke => "LARGE_SMOKE",
    Lava => "LAVA",
    Mycelium => "MYCELIUM",
    Nautilus => "NAUTILUS",
    Note => "NOTE",
    Poof => "POOF",
    Portal => "PORTAL",
    Rain => "RAIN",
    SculkSoul => "SCULK_SOUL",
    Smoke => "SMOKE",
    Sneeze => "SNEEZE",
    Soul => "SOUL",
    SoulFireFlame => "SOUL_FIRE_FLAME",
    Spit => "SPIT",
    Splash => "SPLASH",
    SquidInk => "SQUID_INK",
    SweepAttack => "SWEEP_ATTACK",
    TotemOfUndying => "TOTEM_OF_UNDYING",
    Underwater => "UNDERWATER",
    Witch => "WITCH",
}

impl Particle {
    /// Lower-cased namespaced key, e.g. `minecraft:flame`.
    #[must_use]
    pub fn key(self) -> String {
        format!("minecraft:{}", self.name().to_ascii_lowercase())
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lowercases_name() {
        assert_eq!(Particle::HappyVillager.key(), "minecraft:happy_villager");
        assert_eq!(Particle::Flame.key(), "minecraft:flame");
    }

    #[test]
    fn names_round_trip() {
        for particle in Particle::ALL {
            assert_eq!(Particle::from_name(particle.name()), Some(*particle));
        }
    }
}
