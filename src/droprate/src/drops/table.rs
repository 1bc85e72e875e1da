//! Mission drop table: item → mission type → region → location → rotation → chance

use super::types::{DropLocator, RotationChance};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type LocationMap = BTreeMap<String, RotationChance>;
type RegionMap = BTreeMap<String, LocationMap>;
type MissionMap = BTreeMap<String, RegionMap>;

/// Parsed mission reward tables, keyed by item name
///
/// Keys are kept sorted so iteration order (and therefore the
/// representative item picked for a search) is stable.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropTable {
    items: BTreeMap<String, MissionMap>,
}

impl DropTable {
    /// Record the chance of `item` dropping on one rotation of a location,
    /// creating every intermediate level on demand
    pub fn insert(
        &mut self,
        item: &str,
        mission_type: &str,
        region: &str,
        location: &str,
        rotation: &str,
        chance: f64,
    ) -> crate::Result<()> {
        if !crate::is_probability(chance) {
            return Err(crate::Error::InvalidChance {
                context: format!("{} at {}/{} ({})", item, region, location, mission_type),
                chance,
            });
        }

        self.rotations_mut(item, mission_type, region, location)
            .set(rotation.to_string(), chance);
        Ok(())
    }

    /// Get-or-create the rotation map for one item at one location
    fn rotations_mut(
        &mut self,
        item: &str,
        mission_type: &str,
        region: &str,
        location: &str,
    ) -> &mut RotationChance {
        self.items
            .entry(item.to_string())
            .or_default()
            .entry(mission_type.to_string())
            .or_default()
            .entry(region.to_string())
            .or_default()
            .entry(location.to_string())
            .or_default()
    }

    /// All item names, sorted
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    /// Every location that drops `item`, with its rotation chances
    pub fn locations<'a>(
        &'a self,
        item: &str,
    ) -> impl Iterator<Item = (DropLocator, &'a RotationChance)> + 'a {
        self.items
            .get(item)
            .into_iter()
            .flat_map(|missions| missions.iter())
            .flat_map(|(mission_type, regions)| {
                regions.iter().flat_map(move |(region, locations)| {
                    locations.iter().map(move |(location, chances)| {
                        (DropLocator::new(mission_type, region, location), chances)
                    })
                })
            })
    }

    /// Number of items in the table
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reject tables holding chances outside [0, 1]
    pub fn validate(&self) -> crate::Result<()> {
        for item in self.items.keys() {
            for (locator, chances) in self.locations(item) {
                if let Some((rotation, chance)) = chances.invalid() {
                    return Err(crate::Error::InvalidChance {
                        context: format!("{} at {} rotation {}", item, locator, rotation),
                        chance,
                    });
                }
            }
        }
        Ok(())
    }
}
