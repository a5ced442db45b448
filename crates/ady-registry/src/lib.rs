//! Versioned entity type registry.
//!
//! For every [`EntityType`] the registry knows:
//!
//! - the server-side names it has had over time (canonical name first, then
//!   aliases), which name-indexed releases resolve against;
//! - the numeric id older releases use instead;
//! - the release that introduced it.
//!
//! The table is static. Operators can append aliases from a JSON document of
//! the form `{"ZOMBIFIED_PIGLIN": ["MY_FORK_NAME"]}`.

mod table;

pub use table::{ENTITY_TYPES, EntityTypeDef};

use std::collections::HashMap as StdHashMap;

use ady_core::{EntityType, PlatformVersion};
use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown entity type {0:?}")]
    UnknownEntityType(String),
    #[error("malformed alias overrides: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Candidate server-side names for one type, canonical first.
pub type Candidates<'a> = SmallVec<[&'a str; 4]>;

/// Registry entry for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeInfo {
    pub aliases: Vec<String>,
    pub legacy_id: Option<i32>,
    pub since: PlatformVersion,
}

#[derive(Debug, Clone)]
pub struct EntityTypeRegistry {
    entries: HashMap<EntityType, EntityTypeInfo, FxBuildHasher>,
}

impl Default for EntityTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityTypeRegistry {
    /// Registry populated from the built-in table.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity_and_hasher(ENTITY_TYPES.len(), FxBuildHasher);
        for def in ENTITY_TYPES {
            entries.insert(
                def.ty,
                EntityTypeInfo {
                    aliases: def.aliases.iter().map(|a| (*a).to_owned()).collect(),
                    legacy_id: def.legacy_id,
                    since: def.since,
                },
            );
        }
        Self { entries }
    }

    #[must_use]
    pub fn info(&self, ty: EntityType) -> Option<&EntityTypeInfo> {
        self.entries.get(&ty)
    }

    /// Older server-side names of `ty`, newest first.
    #[must_use]
    pub fn bukkit_entity_aliases(&self, ty: EntityType) -> &[String] {
        self.info(ty)
            .map_or(&[] as &[String], |info| info.aliases.as_slice())
    }

    /// Numeric id used by pre-1.14 releases, if the type existed then.
    #[must_use]
    pub fn bukkit_entity_id(&self, ty: EntityType) -> Option<i32> {
        self.info(ty).and_then(|info| info.legacy_id)
    }

    /// Release that introduced `ty`.
    #[must_use]
    pub fn since(&self, ty: EntityType) -> Option<PlatformVersion> {
        self.info(ty).map(|info| info.since)
    }

    #[must_use]
    pub fn is_available(&self, ty: EntityType, version: PlatformVersion) -> bool {
        self.since(ty)
            .is_some_and(|since| version.is_higher_or_equal(since))
    }

    /// Canonical name followed by each alias, duplicates removed.
    #[must_use]
    pub fn candidates(&self, ty: EntityType) -> Candidates<'_> {
        let mut names: Candidates<'_> = SmallVec::new();
        names.push(ty.name());
        for alias in self.bukkit_entity_aliases(ty) {
            if !names.contains(&alias.as_str()) {
                names.push(alias.as_str());
            }
        }
        names
    }

    /// Append aliases to `ty`. Existing aliases keep their precedence.
    pub fn add_aliases<I, S>(&mut self, ty: EntityType, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(info) = self.entries.get_mut(&ty) else {
            return;
        };
        for alias in aliases {
            let alias = alias.into();
            if alias != ty.name() && !info.aliases.contains(&alias) {
                debug!(%ty, %alias, "registered entity alias");
                info.aliases.push(alias);
            }
        }
    }

    /// Apply a name → aliases map keyed by canonical type name.
    pub fn apply_overrides(&mut self, overrides: &StdHashMap<String, Vec<String>>) -> Result<()> {
        for (name, aliases) in overrides {
            let ty = EntityType::from_name(name)
                .ok_or_else(|| RegistryError::UnknownEntityType(name.clone()))?;
            self.add_aliases(ty, aliases.iter().cloned());
        }
        Ok(())
    }

    /// Parse and apply a JSON alias override document.
    pub fn apply_overrides_json(&mut self, json: &str) -> Result<()> {
        let overrides: StdHashMap<String, Vec<String>> = serde_json::from_str(json)?;
        self.apply_overrides(&overrides)
    }
}
