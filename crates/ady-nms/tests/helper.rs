//! Integration tests for the adapter facade

mod common;

use std::sync::Arc;
use std::time::Duration;

use ady_cache::ManualClock;
use ady_core::{
    BlockData, ChunkPos, EntityType, Painting, Particle, PlatformVersion, TropicalFishPattern,
};
use ady_nms::{
    AdaptError, AdapterConfig, AdapterContext, DefaultMinecraftHelper, EntityHandle, Era,
    MinecraftHelper, NativeEntityType, NativePainting, NativeParticle, ParticleRegistryEntry,
    PlayerHandle, RegistryRef, ReportHost,
};
use common::{MockHost, helper, helper_at, helper_with, version};
use pretty_assertions::assert_eq;

// ============================================================================
// Entity Types
// ============================================================================

#[test]
fn test_entity_type_adapt_is_cached() {
    let (host, helper) = helper(version(16), MockHost::new().entity_type("ZOMBIE", 107));

    let first = helper.adapt_entity_type(EntityType::Zombie).unwrap();
    let second = helper.adapt_entity_type(EntityType::Zombie).unwrap();

    let (NativeEntityType::Registry(a), NativeEntityType::Registry(b)) = (&first, &second) else {
        panic!("expected registry entries, got {first:?} and {second:?}");
    };
    assert!(a.same_allocation(b));
    assert_eq!(first.id(), 107);
    assert_eq!(host.entity_lookups(), 1);

    let stats = helper.cache_stats().entity_types;
    assert_eq!((stats.hits, stats.misses, stats.len), (1, 1, 1));
}

#[test]
fn test_entity_type_falls_back_to_aliases() {
    let (host, helper) = helper(version(15), MockHost::new().entity_type("PIG_ZOMBIE", 56));

    let native = helper.adapt_entity_type(EntityType::ZombifiedPiglin).unwrap();

    assert_eq!(
        native,
        NativeEntityType::Registry(RegistryRef::new("minecraft:pig_zombie", 56))
    );
    // ZOMBIFIED_PIGLIN, ZOMBIE_PIGMAN, then PIG_ZOMBIE
    assert_eq!(host.entity_lookups(), 3);
}

#[test]
fn test_raising_candidate_counts_as_absent() {
    let host = MockHost::new()
        .raising("ZOMBIFIED_PIGLIN")
        .entity_type("ZOMBIE_PIGMAN", 56);
    let (_, helper) = helper(version(17), host);

    assert_eq!(
        helper
            .adapt_entity_type(EntityType::ZombifiedPiglin)
            .unwrap()
            .id(),
        56
    );
}

#[test]
fn test_configured_alias_is_tried() {
    let config = AdapterConfig::from_json(r#"{"entity_aliases": {"PIG": ["HOG"]}}"#).unwrap();
    let (_, helper) = helper_with(version(19), MockHost::new().entity_type("HOG", 3), config);

    assert_eq!(helper.adapt_entity_type(EntityType::Pig).unwrap().id(), 3);
}

#[test]
fn test_unsupported_entity_is_not_cached() {
    let (host, helper) = helper(version(18), MockHost::new());

    let err = helper.adapt_entity_type(EntityType::Warden).unwrap_err();
    let AdaptError::UnsupportedEntityType {
        ty,
        candidates,
        version,
    } = err
    else {
        panic!("expected UnsupportedEntityType, got {err}");
    };
    assert_eq!(ty, EntityType::Warden);
    assert_eq!(candidates, ["WARDEN"]);
    assert_eq!(version, PlatformVersion::V1_18);
    assert_eq!(helper.cache_stats().entity_types.len, 0);

    assert!(helper.adapt_entity_type(EntityType::Warden).is_err());
    assert_eq!(host.entity_lookups(), 2);
}

#[test]
fn test_legacy_entity_types_use_numeric_ids() {
    for minor in [8, 12, 13] {
        let (host, helper) = helper(version(minor), MockHost::new());
        assert_eq!(
            helper.adapt_entity_type(EntityType::Zombie).unwrap(),
            NativeEntityType::LegacyId { id: 54 }
        );
        assert_eq!(host.entity_lookups(), 0);
    }
}

#[test]
fn test_legacy_entity_types_respect_introduction() {
    let (_, oldest) = helper(version(8), MockHost::new());
    for ty in [EntityType::Husk, EntityType::Donkey, EntityType::Parrot] {
        let err = oldest.adapt_entity_type(ty).unwrap_err();
        assert!(
            matches!(err, AdaptError::UnsupportedEntityType { ty: failed, .. } if failed == ty),
            "{err}"
        );
    }
    assert_eq!(oldest.cache_stats().entity_types.len, 0);

    let (_, later) = helper(version(12), MockHost::new());
    assert_eq!(
        later.adapt_entity_type(EntityType::Husk).unwrap(),
        NativeEntityType::LegacyId { id: 23 }
    );
}

#[test]
fn test_flattening_types_come_from_registry() {
    let host = MockHost::new().entity_type_registry_entry("minecraft:drowned", 14);
    let (_, flattening) = helper(version(13), host);
    assert_eq!(
        flattening.adapt_entity_type(EntityType::Drowned).unwrap(),
        NativeEntityType::Registry(RegistryRef::new("minecraft:drowned", 14))
    );
    // Types with a numeric id keep it.
    assert_eq!(
        flattening.adapt_entity_type(EntityType::Zombie).unwrap(),
        NativeEntityType::LegacyId { id: 54 }
    );
    // Registered on 1.13 but absent from this host.
    assert!(matches!(
        flattening.adapt_entity_type(EntityType::Phantom),
        Err(AdaptError::UnsupportedEntityType { .. })
    ));

    let host = MockHost::new().entity_type_registry_entry("minecraft:drowned", 14);
    let (_, legacy) = helper(version(12), host);
    assert!(matches!(
        legacy.adapt_entity_type(EntityType::Drowned),
        Err(AdaptError::UnsupportedEntityType { .. })
    ));
}

// ============================================================================
// Paintings and Particles
// ============================================================================

#[test]
fn test_paintings_per_era() {
    let (_, legacy) = helper(version(12), MockHost::new());
    assert_eq!(
        legacy.adapt_painting(Painting::Kebab).unwrap(),
        NativePainting::Legacy { ordinal: 0 }
    );
    assert!(matches!(
        legacy.adapt_painting(Painting::Earth),
        Err(AdaptError::UnsupportedForVersion {
            feature: "painting",
            ..
        })
    ));

    let (_, modern) = helper(version(13), MockHost::new().painting("kebab", 4));
    assert_eq!(modern.adapt_painting(Painting::Kebab).unwrap().id(), 4);
    assert!(modern.adapt_painting(Painting::Earth).is_err());
}

#[test]
fn test_raising_painting_lookup_is_internal_failure() {
    let (_, helper) = helper(version(16), MockHost::new().raising("kebab"));
    let err = helper.adapt_painting(Painting::Kebab).unwrap_err();
    assert!(
        matches!(err, AdaptError::InternalLookup { path: "Paintings", .. }),
        "{err}"
    );
    assert_eq!(helper.cache_stats().paintings.len, 0);
}

#[test]
fn test_oldest_release_particles_are_disabled() {
    let (_, helper) = helper(PlatformVersion::V1_8, MockHost::new().particle("FLAME", 26));
    for particle in Particle::ALL {
        let native = helper.adapt_particle(*particle).unwrap();
        assert_eq!(native, NativeParticle::Disabled);
        assert_eq!(native.id(), 0);
    }
}

#[test]
fn test_flattening_particles_use_registry() {
    let flame = RegistryRef::new("minecraft:flame", 26);
    let host = MockHost::new()
        .particle_registry_entry(
            "minecraft:flame",
            ParticleRegistryEntry::Typed {
                param: flame.clone(),
            },
        )
        .particle_registry_entry(
            "minecraft:heart",
            ParticleRegistryEntry::Raw(RegistryRef::new("minecraft:heart", 33)),
        );
    let (_, helper) = helper(version(13), host);

    assert_eq!(
        helper.adapt_particle(Particle::Flame).unwrap(),
        NativeParticle::Registry(flame)
    );
    assert_eq!(helper.adapt_particle(Particle::Heart).unwrap().id(), 33);
    assert!(matches!(
        helper.adapt_particle(Particle::Glow),
        Err(AdaptError::UnsupportedForVersion { .. })
    ));
}

#[test]
fn test_missing_particle_uses_fallback() {
    let (_, helper) = helper(version(16), MockHost::new().particle("FLAME", 26));
    assert_eq!(helper.adapt_particle(Particle::SculkSoul).unwrap().id(), 26);

    let config = AdapterConfig {
        particle_fallback: Particle::Heart,
        ..AdapterConfig::default()
    };
    let (_, helper) = helper_with(version(16), MockHost::new(), config);
    assert!(matches!(
        helper.adapt_particle(Particle::SculkSoul),
        Err(AdaptError::UnsupportedForVersion {
            feature: "particle",
            ..
        })
    ));
}

// ============================================================================
// Tropical Fish
// ============================================================================

#[test]
fn test_tropical_fish_round_trip() {
    let (_, helper) = helper(version(20), MockHost::new());
    for pattern in TropicalFishPattern::ALL {
        let data = helper.adapt_tropical_fish_data(pattern);
        assert_eq!(helper.adapt_tropical_fish_pattern(data).unwrap(), pattern);
    }
    // Colour bytes above the low 16 bits do not matter.
    assert_eq!(
        helper.adapt_tropical_fish_pattern(0x0E01_0101).unwrap(),
        TropicalFishPattern::Stripey
    );
    assert!(matches!(
        helper.adapt_tropical_fish_pattern(0x0600),
        Err(AdaptError::FishPattern(_))
    ));
}

// ============================================================================
// Block Ids
// ============================================================================

#[test]
fn test_block_ids_are_deterministic() {
    let host = MockHost::new().block("stone", 1).block("oak_log", 74);
    let (host, helper) = helper(version(18), host);
    let log = BlockData::new("oak_log", 17);

    let ids: Vec<i32> = (0..4).map(|_| helper.get_block_id(&log).unwrap()).collect();
    assert_eq!(ids, [74; 4]);
    assert_eq!(host.block_lookups(), 1);
    assert!(matches!(
        helper.get_block_id(&BlockData::new("missing", 0)),
        Err(AdaptError::UnsupportedForVersion { feature: "block", .. })
    ));
}

#[test]
fn test_eviction_keeps_value() {
    let clock = Arc::new(ManualClock::new());
    let host = MockHost::new().block("stone", 1).entity_type("ZOMBIE", 107);
    let (host, helper) = helper_at(version(19), host, clock.clone());
    let stone = BlockData::new("stone", 1);

    let before = helper.get_block_id(&stone).unwrap();
    let zombie_before = helper.adapt_entity_type(EntityType::Zombie).unwrap();

    clock.advance(Duration::from_secs(29 * 60));
    assert_eq!(helper.evict_expired(), 0);
    clock.advance(Duration::from_secs(60));
    assert_eq!(helper.evict_expired(), 2);
    assert_eq!(helper.cache_stats().blocks.len, 0);

    assert_eq!(helper.get_block_id(&stone).unwrap(), before);
    assert_eq!(helper.adapt_entity_type(EntityType::Zombie).unwrap(), zombie_before);
    assert_eq!(host.block_lookups(), 2);
    assert_eq!(host.entity_lookups(), 2);
}

#[test]
fn test_reads_refresh_idle_timer() {
    let clock = Arc::new(ManualClock::new());
    let host = MockHost::new().block("stone", 1);
    let (host, helper) = helper_at(version(20), host, clock.clone());
    let stone = BlockData::new("stone", 1);

    helper.get_block_id(&stone).unwrap();
    clock.advance(Duration::from_secs(20 * 60));
    helper.get_block_id(&stone).unwrap();
    clock.advance(Duration::from_secs(20 * 60));
    assert_eq!(helper.evict_expired(), 0);
    assert_eq!(host.block_lookups(), 1);
}

#[test]
fn test_invalidate_all_forces_recompute() {
    let (host, helper) = helper(version(18), MockHost::new().block("stone", 1));
    let stone = BlockData::new("stone", 1);
    helper.get_block_id(&stone).unwrap();
    helper.invalidate_all();
    helper.get_block_id(&stone).unwrap();
    assert_eq!(host.block_lookups(), 2);
}

// ============================================================================
// Chunk Visibility
// ============================================================================

#[test]
fn test_modern_chunk_map_answers_exact_key() {
    let sent = ChunkPos::new(5, -7);
    let (_, helper) = helper(version(18), MockHost::new().visible_chunks(&[sent]));
    let player = PlayerHandle::new("Steve", "world");

    assert!(helper.is_chunk_visible(&player, 5, -7).unwrap());
    assert!(!helper.is_chunk_visible(&player, 5, -6).unwrap());
    assert!(!helper.is_chunk_visible(&player, -7, 5).unwrap());
    assert!(!helper.is_chunk_visible(&player, 4, -7).unwrap());
}

#[test]
fn test_legacy_chunk_map_answers() {
    let sent = ChunkPos::new(5, 7);
    let (_, helper) = helper(version(12), MockHost::new().legacy_chunks(&[sent]));
    let player = PlayerHandle::new("Steve", "world");

    assert!(helper.is_chunk_visible(&player, 5, 7).unwrap());
    assert!(!helper.is_chunk_visible(&player, 7, 5).unwrap());
}

#[test]
fn test_legacy_chunk_map_over_reports() {
    let host = Arc::new(ReportHost::empty(PlatformVersion::V1_12));
    let player = PlayerHandle::new("Steve", "world");
    host.mark_chunk_sent(&player, ChunkPos::new(-2, 3));
    let helper = DefaultMinecraftHelper::new(AdapterContext::new(
        PlatformVersion::V1_12,
        host.clone(),
    ));

    let probes: Vec<_> = helper.prober().probe_names().collect();
    assert_eq!(probes, ["paper", "legacy-chunk-map"]);
    assert!(helper.is_chunk_visible(&player, -2, 3).unwrap());
    assert!(!helper.is_chunk_visible(&player, 3, -2).unwrap());
    assert!(!helper.is_chunk_visible(&PlayerHandle::new("Alex", "nether"), -2, 3).unwrap());
}

#[test]
fn test_chunk_probe_exhaustion_is_an_error() {
    let (_, helper) = helper(version(18), MockHost::new());
    let player = PlayerHandle::new("Steve", "world");

    let err = helper.is_chunk_visible(&player, 0, 0).unwrap_err();
    let AdaptError::ChunkProbeExhausted {
        player, attempts, ..
    } = err
    else {
        panic!("expected ChunkProbeExhausted, got {err}");
    };
    assert_eq!(player, "Steve");
    let tried: Vec<_> = attempts.iter().map(|attempt| attempt.probe).collect();
    assert_eq!(
        tried,
        ["paper", "visible-chunk-map", "player-chunk-map", "legacy-chunk-map"]
    );
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_entity_by_id() {
    let zombie = EntityHandle {
        id: 7,
        world: "world".into(),
        type_key: "minecraft:zombie".into(),
    };
    let host = MockHost::new().spawn(zombie.clone()).raising("broken");
    let (_, helper) = helper(version(20), host);

    assert_eq!(helper.entity_by_id("world", 7).unwrap(), Some(zombie));
    assert_eq!(helper.entity_by_id("world", 8).unwrap(), None);
    assert!(matches!(
        helper.entity_by_id("broken", 7),
        Err(AdaptError::InternalLookup { .. })
    ));
}

#[test]
fn test_eras_and_chat() {
    let (_, old) = helper(version(12), MockHost::new());
    let (_, new) = helper(version(20), MockHost::new());
    assert_eq!(old.era(), Era::Legacy);
    assert_eq!(new.era(), Era::Caves);

    let component = new.chat_message_from_string("§x§1§2§3§4§5§6hex");
    assert_eq!(
        new.chat_serializer_to_json(&component).unwrap(),
        r##"{"text":"hex","color":"#123456"}"##
    );
    let json = old.chat_serializer_to_json(&component).unwrap();
    assert!(!json.contains('#'), "{json}");
}
