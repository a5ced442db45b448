//! Dumps how every abstract value adapts on one server release.
//!
//! This binary:
//! 1. Loads the adapter config from `ADY_CONFIG` (defaults when unset)
//! 2. Resolves the release from the config, `ADY_VERSION`, or the first argument
//! 3. Reads data generator reports from `ADY_REPORTS_DIR`
//! 4. Writes the adaptation table to stdout as JSON
//!
//! ```text
//! ADY_REPORTS_DIR=generated/reports ady-inspect "git-Paper-196 (MC: 1.19.4)"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use ady_core::{EntityType, Painting, Particle, PlatformVersion};
use ady_nms::{
    AdapterCacheStats, AdapterConfig, AdapterContext, ChatSerializer, DefaultMinecraftHelper, Era,
    MinecraftHelper, NativeEntityType, NativePainting, NativeParticle, ReportHost,
};
use serde::Serialize;
use tracing::{info, warn};

/// One row of the table: the native value, or why there is none.
#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<T> {
    Native(T),
    Unsupported { error: String },
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(native) => Self::Native(native),
            Err(error) => Self::Unsupported {
                error: error.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct Report {
    version: PlatformVersion,
    era: Era,
    metadata_accessor: &'static str,
    chat_serializer: ChatSerializer,
    chunk_probes: Vec<&'static str>,
    entity_types: BTreeMap<&'static str, Outcome<NativeEntityType>>,
    paintings: BTreeMap<&'static str, Outcome<NativePainting>>,
    particles: BTreeMap<&'static str, Outcome<NativeParticle>>,
    cache: AdapterCacheStats,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ady_inspect=info".parse()?)
                .add_directive("ady_nms=info".parse()?),
        )
        .init();

    let mut config = match std::env::var("ADY_CONFIG") {
        Ok(path) => AdapterConfig::load(Path::new(&path))?,
        Err(_) => AdapterConfig::default(),
    };
    config.apply_env()?;

    let detected = std::env::args().nth(1);
    let version = config.resolve_version(detected.as_deref())?;
    info!(%version, "inspecting release");

    let host = match std::env::var("ADY_REPORTS_DIR") {
        Ok(dir) => ReportHost::from_dir(version, Path::new(&dir))?,
        Err(_) => {
            warn!("ADY_REPORTS_DIR not set, only legacy lookups will resolve");
            ReportHost::empty(version)
        }
    };

    let context = AdapterContext::from_config(config, detected.as_deref(), Arc::new(host))?;
    let helper = DefaultMinecraftHelper::new(context);

    let entity_types: BTreeMap<_, Outcome<NativeEntityType>> = EntityType::ALL
        .iter()
        .map(|ty| (ty.name(), helper.adapt_entity_type(*ty).into()))
        .collect();
    let paintings: BTreeMap<_, Outcome<NativePainting>> = Painting::ALL
        .iter()
        .map(|painting| (painting.path(), helper.adapt_painting(*painting).into()))
        .collect();
    let particles: BTreeMap<_, Outcome<NativeParticle>> = Particle::ALL
        .iter()
        .map(|particle| (particle.name(), helper.adapt_particle(*particle).into()))
        .collect();

    let report = Report {
        version,
        era: helper.era(),
        metadata_accessor: helper.entity_metadata_accessor(),
        chat_serializer: helper.chat_serializer(),
        chunk_probes: helper.prober().probe_names().collect(),
        entity_types,
        paintings,
        particles,
        cache: helper.cache_stats(),
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    info!(era = %report.era, "adaptation table written");
    Ok(())
}
