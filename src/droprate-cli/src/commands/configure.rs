//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up droprate CLI defaults.

use crate::config::Config;
use anyhow::Result;
use droprate::{MatchPolicy, MissionProfiles};
use std::path::PathBuf;

/// Requested configuration changes
#[derive(Debug, Default)]
pub struct Changes {
    pub drops: Option<PathBuf>,
    pub profiles: Option<PathBuf>,
    pub max_rows: Option<usize>,
    pub match_policy: Option<MatchPolicy>,
    pub minutes: Vec<(String, f64)>,
    pub reset_minutes: bool,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.drops.is_none()
            && self.profiles.is_none()
            && self.max_rows.is_none()
            && self.match_policy.is_none()
            && self.minutes.is_empty()
            && !self.reset_minutes
    }
}

/// Handle the configure command
pub fn handle(changes: Changes, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if changes.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, changes)?;
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Apply changes, rejecting minute overrides for unknown mission types
fn apply(config: &mut Config, changes: Changes) -> Result<()> {
    if changes.reset_minutes {
        config.minutes.clear();
    }

    if !changes.minutes.is_empty() && config.profiles.is_none() && changes.profiles.is_none() {
        MissionProfiles::default()
            .with_minutes(changes.minutes.iter().map(|(t, m)| (t.as_str(), *m)))?;
    }

    for (mission_type, minutes) in changes.minutes {
        config.set_minutes(mission_type, minutes);
    }
    if let Some(drops) = changes.drops {
        config.drops = Some(drops);
    }
    if let Some(profiles) = changes.profiles {
        config.profiles = Some(profiles);
    }
    if let Some(max_rows) = changes.max_rows {
        config.max_rows = Some(max_rows);
    }
    if let Some(policy) = changes.match_policy {
        config.match_policy = Some(policy);
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.drops {
        Some(path) => println!("Drops manifest: {}", path.display()),
        None => println!("Drops manifest: {} (default)", super::DEFAULT_DROPS_PATH),
    }
    match &config.profiles {
        Some(path) => println!("Mission profiles: {}", path.display()),
        None => println!("Mission profiles: built-in"),
    }
    println!("Max rows: {}", config.max_rows());
    println!("Match policy: {}", config.match_policy());

    if config.minutes.is_empty() {
        println!("No rotation minute overrides");
    } else {
        println!("Rotation minute overrides:");
        for (mission_type, minutes) in &config.minutes {
            println!("  {:<18} {}", mission_type, minutes);
        }
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: droprate configure --drops PATH");
    println!("   or: droprate configure --minutes Survival=6 --minutes Defense=4");
    println!("   or: droprate configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_changes() {
        let mut config = Config::default();
        config.set_minutes("Defense".to_string(), 4.0);

        apply(
            &mut config,
            Changes {
                max_rows: Some(20),
                match_policy: Some(MatchPolicy::AllMatches),
                minutes: vec![("Survival".to_string(), 6.0)],
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.max_rows(), 20);
        assert_eq!(config.match_policy(), MatchPolicy::AllMatches);
        assert_eq!(config.minutes.len(), 2);
        assert_eq!(config.minutes["Survival"], 6.0);
    }

    #[test]
    fn test_apply_reset_minutes() {
        let mut config = Config::default();
        config.set_minutes("Defense".to_string(), 4.0);

        apply(
            &mut config,
            Changes {
                reset_minutes: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(config.minutes.is_empty());
    }

    #[test]
    fn test_apply_rejects_unknown_mission_type() {
        let mut config = Config::default();
        let result = apply(
            &mut config,
            Changes {
                minutes: vec![("Hijack".to_string(), 5.0)],
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert!(config.minutes.is_empty());
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(Changes::default().is_empty());
        assert!(!Changes {
            reset_minutes: true,
            ..Default::default()
        }
        .is_empty());
    }
}
