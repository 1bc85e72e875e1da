//! Drop-related type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Single-draw drop chance per rotation label ("A", "B", "C", "none")
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationChance(BTreeMap<String, f64>);

impl RotationChance {
    /// Build from (rotation, chance) pairs, rejecting chances outside [0, 1]
    pub fn new<I, S>(chances: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (rotation, chance) in chances {
            let rotation = rotation.into();
            if !crate::is_probability(chance) {
                return Err(crate::Error::InvalidChance {
                    context: format!("rotation {}", rotation),
                    chance,
                });
            }
            map.insert(rotation, chance);
        }
        Ok(Self(map))
    }

    /// Chance for a rotation, if the rotation drops the item at all
    pub fn get(&self, rotation: &str) -> Option<f64> {
        self.0.get(rotation).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(rotation, chance)| (rotation.as_str(), *chance))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, rotation: String, chance: f64) {
        self.0.insert(rotation, chance);
    }

    /// First chance outside [0, 1], if any
    pub(crate) fn invalid(&self) -> Option<(&str, f64)> {
        self.iter().find(|(_, chance)| !crate::is_probability(*chance))
    }
}

/// Identifies one farming spot: mission type plus region and sub-location
///
/// Records from different searches describe the same spot iff their
/// rendered locators are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DropLocator {
    pub mission_type: String,
    pub region: String,
    pub location: String,
}

impl DropLocator {
    pub fn new(
        mission_type: impl Into<String>,
        region: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            mission_type: mission_type.into(),
            region: region.into(),
            location: location.into(),
        }
    }

    /// Human-readable "region/location" label
    pub fn location_label(&self) -> String {
        format!("{}/{}", self.region, self.location)
    }
}

impl fmt::Display for DropLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.region, self.location, self.mission_type)
    }
}
