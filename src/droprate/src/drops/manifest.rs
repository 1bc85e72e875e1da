//! On-disk drops manifest

use super::enemy::EnemyDropTable;
use super::table::DropTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The drops manifest format
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropsManifest {
    pub version: u32,
    /// Mission rewards: item → mission type → region → location → rotation → chance
    pub missions: DropTable,
    /// Enemy mod drops: mod → enemy → chance per kill
    #[serde(default, skip_serializing_if = "EnemyDropTable::is_empty")]
    pub enemy_mods: EnemyDropTable,
}

impl DropsManifest {
    /// Load a drops manifest file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a manifest from JSON text
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let manifest: DropsManifest = serde_json::from_str(json)?;
        manifest.missions.validate()?;
        manifest.enemy_mods.validate()?;

        tracing::debug!(
            items = manifest.missions.len(),
            mods = manifest.enemy_mods.len(),
            "Loaded drops manifest v{}",
            manifest.version
        );

        Ok(manifest)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
