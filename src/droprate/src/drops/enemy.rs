//! Enemy mod drops: mod → enemy → chance per kill

use crate::lookup::fuzzy_matches;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-kill drop chances of mods, keyed by mod name then enemy
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyDropTable {
    mods: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Result of an enemy drop query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyDrop {
    pub item: String,
    pub enemy: String,
    /// Chance per kill (0.0 to 1.0)
    pub chance: f64,
    /// Chance as percentage string (e.g., "0.25%")
    pub chance_display: String,
}

impl EnemyDropTable {
    /// Record a mod drop. The per-kill chance is the enemy's chance of
    /// dropping any mod times the chance of it being this mod.
    pub fn insert(
        &mut self,
        item: &str,
        enemy: &str,
        enemy_mod_chance: f64,
        item_chance: f64,
    ) -> crate::Result<()> {
        for chance in [enemy_mod_chance, item_chance] {
            if !crate::is_probability(chance) {
                return Err(crate::Error::InvalidChance {
                    context: format!("{} from {}", item, enemy),
                    chance,
                });
            }
        }

        self.mods
            .entry(item.to_string())
            .or_default()
            .insert(enemy.to_string(), enemy_mod_chance * item_chance);
        Ok(())
    }

    /// Find enemies dropping mods whose name fuzzily matches `query`
    ///
    /// Returns drops sorted by chance (highest first)
    pub fn find(&self, query: &str) -> Vec<EnemyDrop> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut drops: Vec<EnemyDrop> = self
            .mods
            .iter()
            .filter(|(item, _)| fuzzy_matches(item, &terms))
            .flat_map(|(item, enemies)| {
                enemies.iter().map(move |(enemy, &chance)| EnemyDrop {
                    item: item.clone(),
                    enemy: enemy.clone(),
                    chance,
                    chance_display: format!("{:.2}%", chance * 100.0),
                })
            })
            .collect();

        drops.sort_by(|a, b| b.chance.total_cmp(&a.chance));
        drops
    }

    /// All mod names, sorted
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.mods.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn validate(&self) -> crate::Result<()> {
        for (item, enemies) in &self.mods {
            for (enemy, &chance) in enemies {
                if !crate::is_probability(chance) {
                    return Err(crate::Error::InvalidChance {
                        context: format!("{} from {}", item, enemy),
                        chance,
                    });
                }
            }
        }
        Ok(())
    }
}
