//! Everything fixed at startup that adapters read from.

use std::fmt;
use std::sync::Arc;

use ady_core::PlatformVersion;
use ady_registry::EntityTypeRegistry;
use tracing::info;

use crate::config::{AdapterConfig, ConfigError};
use crate::host::NativeHost;

/// The detected release, the type registry, the server internals and the
/// operator's configuration. Built once, then only read.
#[derive(Clone)]
pub struct AdapterContext {
    version: PlatformVersion,
    registry: Arc<EntityTypeRegistry>,
    host: Arc<dyn NativeHost>,
    config: AdapterConfig,
}

impl AdapterContext {
    /// A context with the built-in registry and default configuration.
    pub fn new(version: PlatformVersion, host: Arc<dyn NativeHost>) -> Self {
        Self {
            version,
            registry: Arc::new(EntityTypeRegistry::new()),
            host,
            config: AdapterConfig::default(),
        }
    }

    /// Resolve the release from `config` or `detected`, and register the
    /// configured entity aliases.
    pub fn from_config(
        config: AdapterConfig,
        detected: Option<&str>,
        host: Arc<dyn NativeHost>,
    ) -> Result<Self, ConfigError> {
        let version = config.resolve_version(detected)?;
        let mut registry = EntityTypeRegistry::new();
        registry.apply_overrides(&config.entity_aliases)?;
        info!(
            %version,
            aliases = config.entity_aliases.len(),
            "adapter context ready"
        );
        Ok(Self {
            version,
            registry: Arc::new(registry),
            host,
            config,
        })
    }

    #[must_use]
    pub fn version(&self) -> PlatformVersion {
        self.version
    }

    #[must_use]
    pub fn registry(&self) -> &EntityTypeRegistry {
        &self.registry
    }

    #[must_use]
    pub fn host(&self) -> &dyn NativeHost {
        self.host.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl fmt::Debug for AdapterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterContext")
            .field("version", &self.version)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use ady_core::EntityType;

    use super::*;
    use crate::report::ReportHost;

    #[test]
    fn from_config_applies_aliases() {
        let config = AdapterConfig::from_json(r#"{"entity_aliases": {"PIG": ["HOG"]}}"#).unwrap();
        let host = Arc::new(ReportHost::empty(PlatformVersion::V1_12));
        let context = AdapterContext::from_config(config, Some("1.12.2"), host).unwrap();
        assert_eq!(context.version(), PlatformVersion::V1_12.with_patch(2));
        assert_eq!(
            context.registry().candidates(EntityType::Pig).as_slice(),
            ["PIG", "HOG"]
        );
    }

    #[test]
    fn from_config_rejects_unknown_alias_targets() {
        let config =
            AdapterConfig::from_json(r#"{"entity_aliases": {"DRAGONFLY": ["X"]}}"#).unwrap();
        let host = Arc::new(ReportHost::empty(PlatformVersion::V1_12));
        assert!(matches!(
            AdapterContext::from_config(config, Some("1.12"), host),
            Err(ConfigError::Aliases(_))
        ));
    }
}
