//! Mission profiles: rotation sequence and timing per mission type

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Rotations completed in one full run of a mission type, and the nominal
/// minutes needed to reach each rotation reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionProfile {
    pub rotations: Vec<String>,
    pub minutes: f64,
}

impl MissionProfile {
    pub fn new(rotations: &[&str], minutes: f64) -> Self {
        Self {
            rotations: rotations.iter().map(|r| r.to_string()).collect(),
            minutes,
        }
    }
}

/// Mission profile table, keyed by mission type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionProfiles {
    profiles: BTreeMap<String, MissionProfile>,
}

impl Default for MissionProfiles {
    /// Built-in profiles for the standard mission types
    fn default() -> Self {
        const AABC: &[&str] = &["A", "A", "B", "C"];
        const ABC: &[&str] = &["A", "B", "C"];
        const NONE: &[&str] = &["none"];

        let builtin: [(&str, &[&str], f64); 17] = [
            ("Survival", AABC, 5.0),
            ("Defense", AABC, 5.0),
            ("Interception", AABC, 4.0),
            ("Spy", ABC, 4.0),
            ("Excavation", AABC, 3.0),
            ("Exterminate", NONE, 4.0),
            ("Capture", NONE, 3.0),
            ("Rush", &["C"], 3.0),
            ("Defection", AABC, 5.0),
            ("Rescue", &["C"], 4.0),
            ("Caches", ABC, 5.0),
            ("Disruption", &["B", "B", "C", "C"], 5.0),
            ("Sabotage", NONE, 4.0),
            ("Conclave", &["A", "B"], 10.0),
            ("Mobile Defense", NONE, 5.0),
            ("Assassination", NONE, 10.0),
            ("Infested Salvage", AABC, 5.0),
        ];

        let profiles = builtin
            .into_iter()
            .map(|(name, rotations, minutes)| {
                (name.to_string(), MissionProfile::new(rotations, minutes))
            })
            .collect();

        Self { profiles }
    }
}

impl MissionProfiles {
    /// Empty table; every mission type is unknown
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Load a profile table from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a profile table from JSON text
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let profiles: MissionProfiles = serde_json::from_str(json)?;
        for (mission_type, profile) in &profiles.profiles {
            validate(mission_type, profile)?;
        }
        Ok(profiles)
    }

    pub fn get(&self, mission_type: &str) -> Option<&MissionProfile> {
        self.profiles.get(mission_type)
    }

    /// Add or replace the profile for a mission type
    pub fn insert(&mut self, mission_type: &str, profile: MissionProfile) -> crate::Result<()> {
        validate(mission_type, &profile)?;
        self.profiles.insert(mission_type.to_string(), profile);
        Ok(())
    }

    /// Apply per-mission minute overrides
    ///
    /// Unknown mission types in `overrides` are rejected rather than
    /// silently ignored.
    pub fn with_minutes<'a, I>(mut self, overrides: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (mission_type, minutes) in overrides {
            let profile = self
                .profiles
                .get_mut(mission_type)
                .ok_or_else(|| crate::Error::UnknownMissionType(mission_type.to_string()))?;

            if !(minutes.is_finite() && minutes > 0.0) {
                return Err(crate::Error::InvalidProfile {
                    mission_type: mission_type.to_string(),
                    reason: format!("minutes must be positive, got {}", minutes),
                });
            }

            tracing::debug!(mission_type, minutes, "Overriding rotation minutes");
            profile.minutes = minutes;
        }
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MissionProfile)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate(mission_type: &str, profile: &MissionProfile) -> crate::Result<()> {
    let reason = if profile.rotations.is_empty() {
        "rotation sequence is empty".to_string()
    } else if !(profile.minutes.is_finite() && profile.minutes > 0.0) {
        format!("minutes must be positive, got {}", profile.minutes)
    } else {
        return Ok(());
    };

    Err(crate::Error::InvalidProfile {
        mission_type: mission_type.to_string(),
        reason,
    })
}
