//! Abstract entity kinds, independent of any server release.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_types {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A kind of simulated entity.
        ///
        /// The canonical name is the newest server-side name of the type;
        /// older names live in the type registry as aliases.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum EntityType {
            $($variant,)*
        }

        impl EntityType {
            pub const ALL: &'static [EntityType] = &[$(EntityType::$variant,)*];

            /// Canonical SCREAMING_SNAKE name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(EntityType::$variant => $name,)*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(EntityType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

entity_types! {
    AreaEffectCloud => "AREA_EFFECT_CLOUD",
    Allay => "ALLAY",
    ArmorStand => "ARMOR_STAND",
    Arrow => "ARROW",
    Axolotl => "AXOLOTL",
    Bat => "BAT",
    Bee => "BEE",
    Blaze => "BLAZE",
    BlockDisplay => "BLOCK_DISPLAY",
    Boat => "BOAT",
    Camel => "CAMEL",
    Cat => "CAT",
    CaveSpider => "CAVE_SPIDER",
    Chicken => "CHICKEN",
    Cod => "COD",
    Cow => "COW",
    Creeper => "CREEPER",
    Dolphin => "DOLPHIN",
    Donkey => "DONKEY",
    Drowned => "DROWNED",
    ElderGuardian => "ELDER_GUARDIAN",
    EndCrystal => "END_CRYSTAL",
    EnderDragon => "ENDER_DRAGON",
    Enderman => "ENDERMAN",
    Endermite => "ENDERMITE",
    Evoker => "EVOKER",
    ExperienceOrb => "EXPERIENCE_ORB",
    FallingBlock => "FALLING_BLOCK",
    FireworkRocket => "FIREWORK_ROCKET",
    Fox => "FOX",
    Frog => "FROG",
    Ghast => "GHAST",
    Giant => "GIANT",
    GlowSquid => "GLOW_SQUID",
    Goat => "GOAT",
    Guardian => "GUARDIAN",
    Hoglin => "HOGLIN",
    Horse => "HORSE",
    Husk => "HUSK",
    Illusioner => "ILLUSIONER",
    Interaction => "INTERACTION",
    IronGolem => "IRON_GOLEM",
    Item => "ITEM",
    ItemDisplay => "ITEM_DISPLAY",
    ItemFrame => "ITEM_FRAME",
    LightningBolt => "LIGHTNING_BOLT",
    Llama => "LLAMA",
    MagmaCube => "MAGMA_CUBE",
    Minecart => "MINECART",
    Mooshroom => "MOOSHROOM",
    Mule => "MULE",
    Ocelot => "OCELOT",
    Painting => "PAINTING",
    Panda => "PANDA",
    Parrot => "PARROT",
    Phantom => "PHANTOM",
    Pig => "PIG",
    Piglin => "PIGLIN",
    Pillager => "PILLAGER",
    PolarBear => "POLAR_BEAR",
    Pufferfish => "PUFFERFISH",
    Rabbit => "RABBIT",
    Salmon => "SALMON",
    Sheep => "SHEEP",
    Shulker => "SHULKER",
    Silverfish => "SILVERFISH",
    Skeleton => "SKELETON",
    SkeletonHorse => "SKELETON_HORSE",
    Slime => "SLIME",
    Sniffer => "SNIFFER",
    SnowGolem => "SNOW_GOLEM",
    Spider => "SPIDER",
    Squid => "SQUID",
    Stray => "STRAY",
    TextDisplay => "TEXT_DISPLAY",
    Tnt => "TNT",
    TropicalFish => "TROPICAL_FISH",
    Turtle => "TURTLE",
    Vex => "VEX",
    Villager => "VILLAGER",
    Vindicator => "VINDICATOR",
    WanderingTrader => "WANDERING_TRADER",
    Warden => "WARDEN",
    Witch => "WITCH",
    Wither => "WITHER",
    WitherSkeleton => "WITHER_SKELETON",
    Wolf => "WOLF",
    Zoglin => "ZOGLIN",
    Zombie => "ZOMBIE",
    ZombieHorse => "ZOMBIE_HORSE",
    ZombieVillager => "ZOMBIE_VILLAGER",
    ZombifiedPiglin => "ZOMBIFIED_PIGLIN",
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
