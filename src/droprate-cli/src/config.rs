//! Configuration management for droprate CLI

use anyhow::{Context, Result};
use droprate::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Rows shown when neither the command line nor the config sets a limit
pub const DEFAULT_MAX_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default drops manifest
    pub drops: Option<PathBuf>,
    /// Mission profile table replacing the built-in one
    pub profiles: Option<PathBuf>,
    pub max_rows: Option<usize>,
    pub match_policy: Option<MatchPolicy>,
    /// Minutes per rotation, by mission type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub minutes: BTreeMap<String, f64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("droprate");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows.unwrap_or(DEFAULT_MAX_ROWS)
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy.unwrap_or_default()
    }

    /// Set minutes per rotation for a mission type
    pub fn set_minutes(&mut self, mission_type: String, minutes: f64) {
        self.minutes.insert(mission_type, minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_rows(), DEFAULT_MAX_ROWS);
        assert_eq!(config.match_policy(), MatchPolicy::FirstMatch);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config {
            drops: Some(PathBuf::from("/data/drops.json")),
            max_rows: Some(25),
            match_policy: Some(MatchPolicy::AllMatches),
            ..Default::default()
        };
        config.set_minutes("Survival".to_string(), 6.5);
        config.set_minutes("Mobile Defense".to_string(), 4.0);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.max_rows(), 25);
        assert_eq!(loaded.minutes["Mobile Defense"], 4.0);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            max_rows = 5
            match_policy = "all-matches"

            [minutes]
            Survival = 7.5
            "#,
        )
        .unwrap();
        assert_eq!(config.max_rows(), 5);
        assert_eq!(config.match_policy(), MatchPolicy::AllMatches);
        assert_eq!(config.minutes["Survival"], 7.5);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_rows = \"many\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
