//! Command implementations for droprate CLI

pub mod chance;
pub mod configure;
pub mod find;
pub mod profiles;

use anyhow::{Context, Result};
use droprate::{DropsManifest, MissionProfiles, OddsContext};
use std::path::{Path, PathBuf};

use crate::cli::DataArgs;
use crate::config::Config;

/// Drops manifest used when neither the command line nor the config names one
pub const DEFAULT_DROPS_PATH: &str = "share/drops.json";

/// Build mission profiles: the profile table (built-in unless a path is
/// given), then config minute overrides, then command-line ones
pub fn load_profiles(
    path: Option<&Path>,
    config: &Config,
    minutes: &[(String, f64)],
) -> Result<MissionProfiles> {
    let profiles = match path {
        Some(path) => MissionProfiles::load(path)
            .with_context(|| format!("Failed to load mission profiles from {}", path.display()))?,
        None => MissionProfiles::default(),
    };

    let overrides = config
        .minutes
        .iter()
        .chain(minutes.iter().map(|(t, m)| (t, m)))
        .map(|(t, m)| (t.as_str(), *m));

    profiles
        .with_minutes(overrides)
        .context("Failed to apply rotation minute overrides")
}

/// Load the drops manifest and mission profiles a query runs against
pub fn load_context(data: &DataArgs, config: &Config) -> Result<OddsContext> {
    let drops_path = data
        .drops
        .clone()
        .or_else(|| config.drops.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DROPS_PATH));

    let manifest = DropsManifest::load(&drops_path)
        .with_context(|| format!("Failed to load drops manifest from {}", drops_path.display()))?;

    let profiles_path = data.profiles.as_deref().or(config.profiles.as_deref());
    let profiles = load_profiles(profiles_path, config, &data.minutes)?;

    tracing::debug!(
        drops = %drops_path.display(),
        items = manifest.missions.len(),
        mission_types = profiles.len(),
        "Loaded query context"
    );

    Ok(OddsContext::from_manifest(manifest, profiles))
}
