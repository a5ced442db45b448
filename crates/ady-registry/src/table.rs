//! Static entity type table.
//!
//! `legacy_id` is the numeric id pre-1.14 releases use for the type; types
//! introduced in 1.13 or later have none. `aliases` are older server-side
//! names, newest first.

use ady_core::{EntityType, EntityType as T, PlatformVersion, PlatformVersion as V};

pub struct EntityTypeDef {
    pub ty: EntityType,
    pub aliases: &'static [&'static str],
    pub legacy_id: Option<i32>,
    pub since: PlatformVersion,
}

const fn def(
    ty: EntityType,
    aliases: &'static [&'static str],
    legacy_id: Option<i32>,
    since: PlatformVersion,
) -> EntityTypeDef {
    EntityTypeDef {
        ty,
        aliases,
        legacy_id,
        since,
    }
}

/// 1.19.4 introduced display and interaction entities.
const V1_19_4: PlatformVersion = PlatformVersion::V1_19.with_patch(4);

pub const ENTITY_TYPES: &[EntityTypeDef] = &[
    def(T::AreaEffectCloud, &[], Some(3), V::V1_9),
    def(T::Allay, &[], None, V::V1_19),
    def(T::ArmorStand, &[], Some(30), V::V1_8),
    def(T::Arrow, &["TIPPED_ARROW"], Some(10), V::V1_8),
    def(T::Axolotl, &[], None, V::V1_17),
    def(T::Bat, &[], Some(65), V::V1_8),
    def(T::Bee, &[], None, V::V1_15),
    def(T::Blaze, &[], Some(61), V::V1_8),
    def(T::BlockDisplay, &[], None, V1_19_4),
    def(T::Boat, &[], Some(41), V::V1_8),
    def(T::Camel, &[], None, V::V1_20),
    def(T::Cat, &[], None, V::V1_14),
    def(T::CaveSpider, &[], Some(59), V::V1_8),
    def(T::Chicken, &[], Some(93), V::V1_8),
    def(T::Cod, &[], None, V::V1_13),
    def(T::Cow, &[], Some(92), V::V1_8),
    def(T::Creeper, &[], Some(50), V::V1_8),
    def(T::Dolphin, &[], None, V::V1_13),
    def(T::Donkey, &[], Some(31), V::V1_11),
    def(T::Drowned, &[], None, V::V1_13),
    def(T::ElderGuardian, &[], Some(4), V::V1_11),
    def(T::EndCrystal, &["ENDER_CRYSTAL"], Some(200), V::V1_8),
    def(T::EnderDragon, &[], Some(63), V::V1_8),
    def(T::Enderman, &[], Some(58), V::V1_8),
    def(T::Endermite, &[], Some(67), V::V1_8),
    def(T::Evoker, &["EVOCATION_ILLAGER"], Some(34), V::V1_11),
    def(T::ExperienceOrb, &[], Some(2), V::V1_8),
    def(T::FallingBlock, &[], Some(21), V::V1_8),
    def(T::FireworkRocket, &["FIREWORK", "FIREWORKS_ROCKET"], Some(22), V::V1_8),
    def(T::Fox, &[], None, V::V1_14),
    def(T::Frog, &[], None, V::V1_19),
    def(T::Ghast, &[], Some(56), V::V1_8),
    def(T::Giant, &[], Some(53), V::V1_8),
    def(T::GlowSquid, &[], None, V::V1_17),
    def(T::Goat, &[], None, V::V1_17),
    def(T::Guardian, &[], Some(68), V::V1_8),
    def(T::Hoglin, &[], None, V::V1_16),
    def(T::Horse, &[], Some(100), V::V1_8),
    def(T::Husk, &[], Some(23), V::V1_11),
    def(T::Illusioner, &["ILLUSION_ILLAGER"], Some(37), V::V1_12),
    def(T::Interaction, &[], None, V1_19_4),
    def(T::IronGolem, &["VILLAGER_GOLEM"], Some(99), V::V1_8),
    def(T::Item, &["DROPPED_ITEM"], Some(1), V::V1_8),
    def(T::ItemDisplay, &[], None, V1_19_4),
    def(T::ItemFrame, &[], Some(18), V::V1_8),
    def(T::LightningBolt, &["LIGHTNING"], None, V::V1_8),
    def(T::Llama, &[], Some(103), V::V1_11),
    def(T::MagmaCube, &[], Some(62), V::V1_8),
    def(T::Minecart, &[], Some(42), V::V1_8),
    def(T::Mooshroom, &["MUSHROOM_COW"], Some(96), V::V1_8),
    def(T::Mule, &[], Some(32), V::V1_11),
    def(T::Ocelot, &[], Some(98), V::V1_8),
    def(T::Painting, &[], Some(9), V::V1_8),
    def(T::Panda, &[], None, V::V1_14),
    def(T::Parrot, &[], Some(105), V::V1_12),
    def(T::Phantom, &[], None, V::V1_13),
    def(T::Pig, &[], Some(90), V::V1_8),
    def(T::Piglin, &[], None, V::V1_16),
    def(T::Pillager, &[], None, V::V1_14),
    def(T::PolarBear, &[], Some(102), V::V1_10),
    def(T::Pufferfish, &[], None, V::V1_13),
    def(T::Rabbit, &[], Some(101), V::V1_8),
    def(T::Salmon, &[], None, V::V1_13),
    def(T::Sheep, &[], Some(91), V::V1_8),
    def(T::Shulker, &[], Some(69), V::V1_9),
    def(T::Silverfish, &[], Some(60), V::V1_8),
    def(T::Skeleton, &[], Some(51), V::V1_8),
    def(T::SkeletonHorse, &[], Some(28), V::V1_11),
    def(T::Slime, &[], Some(55), V::V1_8),
    def(T::Sniffer, &[], None, V::V1_20),
    def(T::SnowGolem, &["SNOWMAN"], Some(97), V::V1_8),
    def(T::Spider, &[], Some(52), V::V1_8),
    def(T::Squid, &[], Some(94), V::V1_8),
    def(T::Stray, &[], Some(6), V::V1_11),
    def(T::TextDisplay, &[], None, V1_19_4),
    def(T::Tnt, &["PRIMED_TNT"], Some(20), V::V1_8),
    def(T::TropicalFish, &[], None, V::V1_13),
    def(T::Turtle, &[], None, V::V1_13),
    def(T::Vex, &[], Some(35), V::V1_11),
    def(T::Villager, &[], Some(120), V::V1_8),
    def(T::Vindicator, &["VINDICATION_ILLAGER"], Some(36), V::V1_11),
    def(T::WanderingTrader, &[], None, V::V1_14),
    def(T::Warden, &[], None, V::V1_19),
    def(T::Witch, &[], Some(66), V::V1_8),
    def(T::Wither, &[], Some(64), V::V1_8),
    def(T::WitherSkeleton, &[], Some(5), V::V1_11),
    def(T::Wolf, &[], Some(95), V::V1_8),
    def(T::Zoglin, &[], None, V::V1_16),
    def(T::Zombie, &[], Some(54), V::V1_8),
    def(T::ZombieHorse, &[], Some(29), V::V1_11),
    def(T::ZombieVillager, &[], Some(27), V::V1_11),
    def(T::ZombifiedPiglin, &["ZOMBIE_PIGMAN", "PIG_ZOMBIE"], Some(57), V::V1_8),
];
