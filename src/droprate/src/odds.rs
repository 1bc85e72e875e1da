//! Hourly odds for one farming location
//!
//! A mission run walks its profile's rotation sequence; every rotation that
//! can drop the item is one independent draw. The chance of at least one
//! drop per hour is one minus the chance of missing every draw of every run
//! that fits in an hour.

use crate::drops::{DropLocator, RotationChance};
use crate::profile::MissionProfiles;
use serde::Serialize;

/// Hourly chance of obtaining an item at one farming location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRecord {
    pub locator: DropLocator,
    /// Chance of at least one drop per hour (0.0 to 1.0)
    pub hourly_hit: f64,
    /// Minutes of one run up to the deepest rotation that drops the item
    pub cycle_minutes: f64,
    /// Number of rotations in that run
    pub rotations_used: usize,
}

/// Display-ready form of an [`OddsRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRow {
    pub mission_type: String,
    pub location: String,
    /// Chance as percentage string (e.g., "90.66%")
    pub probability_percent: String,
    pub cycle_minutes: f64,
    pub rotations_used: usize,
}

impl OddsRecord {
    pub fn mission_type(&self) -> &str {
        &self.locator.mission_type
    }

    /// "region/location" label
    pub fn location(&self) -> String {
        self.locator.location_label()
    }

    /// Runs completed per hour
    pub fn repeats_per_hour(&self) -> f64 {
        60.0 / self.cycle_minutes
    }

    pub fn to_row(&self) -> OddsRow {
        OddsRow {
            mission_type: self.locator.mission_type.clone(),
            location: self.location(),
            probability_percent: format!("{:.2}%", self.hourly_hit * 100.0),
            cycle_minutes: self.cycle_minutes,
            rotations_used: self.rotations_used,
        }
    }
}

/// Compute the hourly odds of one location
///
/// Returns `Ok(None)` when none of the profile's rotations drop the item,
/// and [`crate::Error::UnknownMissionType`] when the mission type has no
/// profile.
pub fn compute_odds(
    profiles: &MissionProfiles,
    locator: &DropLocator,
    chances: &RotationChance,
) -> crate::Result<Option<OddsRecord>> {
    let profile = profiles
        .get(&locator.mission_type)
        .ok_or_else(|| crate::Error::UnknownMissionType(locator.mission_type.clone()))?;

    let mut miss = 1.0;
    let mut reached = 0;
    for (i, rotation) in profile.rotations.iter().enumerate() {
        if let Some(chance) = chances.get(rotation) {
            miss *= 1.0 - chance;
            reached = i + 1;
            debug_assert!(crate::is_probability(miss), "miss product {} out of range", miss);
        }
    }

    let cycle_minutes = reached as f64 * profile.minutes;
    if cycle_minutes <= 0.0 {
        return Ok(None);
    }

    let repeats_per_hour = 60.0 / cycle_minutes;
    let hourly_hit = 1.0 - miss.powf(repeats_per_hour);
    debug_assert!(
        crate::is_probability(hourly_hit),
        "hourly chance {} out of range for {}",
        hourly_hit,
        locator
    );

    Ok(Some(OddsRecord {
        locator: locator.clone(),
        hourly_hit,
        cycle_minutes,
        rotations_used: reached,
    }))
}
