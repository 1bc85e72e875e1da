//! Fuzzy item search over a drop table

use crate::drops::DropTable;
use crate::odds::{compute_odds, OddsRecord};
use crate::profile::MissionProfiles;
use crate::Error;
use std::collections::BTreeMap;

/// Odds for every item matched by one search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemOdds {
    /// Matched item → its farming locations, best first
    pub items: BTreeMap<String, Vec<OddsRecord>>,
    /// Locations skipped because their mission type has no profile
    pub skipped: usize,
}

impl ItemOdds {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First matched item in key order
    pub fn first(&self) -> Option<(&str, &[OddsRecord])> {
        self.items
            .iter()
            .next()
            .map(|(item, records)| (item.as_str(), records.as_slice()))
    }
}

/// True if `name` contains every term, case-insensitively, in order
///
/// Anything may appear before, between and after the terms, so
/// "nova sys" matches "Nova Prime Systems".
pub fn fuzzy_matches(name: &str, terms: &[&str]) -> bool {
    let name = name.to_lowercase();
    let mut rest = name.as_str();
    for term in terms {
        let term = term.to_lowercase();
        match rest.find(&term) {
            Some(pos) => rest = &rest[pos + term.len()..],
            None => return false,
        }
    }
    true
}

/// Split a multi-item query on commas, dropping empty entries
pub fn split_searches(query: &str) -> Vec<&str> {
    query
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Find every item matching `search` and rank its farming locations
///
/// Locations with an unknown mission type are skipped and counted;
/// locations where no profile rotation drops the item are left out.
pub fn lookup(drops: &DropTable, profiles: &MissionProfiles, search: &str) -> ItemOdds {
    let terms: Vec<&str> = search.split_whitespace().collect();
    let mut result = ItemOdds::default();
    if terms.is_empty() {
        return result;
    }

    for item in drops.item_names().filter(|name| fuzzy_matches(name, &terms)) {
        let mut records = Vec::new();
        for (locator, chances) in drops.locations(item) {
            match compute_odds(profiles, &locator, chances) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(Error::UnknownMissionType(mission_type)) => {
                    tracing::debug!(item, %locator, "Skipping unknown mission type {}", mission_type);
                    result.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(item, %locator, "Skipping location: {}", e);
                    result.skipped += 1;
                }
            }
        }

        records.sort_by(|a, b| b.hourly_hit.total_cmp(&a.hourly_hit));
        result.items.insert(item.to_string(), records);
    }

    if result.skipped > 0 {
        tracing::warn!(
            search,
            skipped = result.skipped,
            "Skipped locations with unknown mission types"
        );
    }

    result
}
