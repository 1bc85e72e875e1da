//! Combine several item searches into one "any of these" ranking
//!
//! Each search contributes the odds of its representative item. At a
//! location shared by every contributor, the chance of getting at least one
//! of the items is one minus the product of the individual miss chances.
//! Locations missing from any contributor are dropped.

use crate::drops::DropLocator;
use crate::lookup::ItemOdds;
use crate::odds::OddsRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Which matched items of a search take part in a combination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Only the first matched item of each search (in key order)
    #[default]
    FirstMatch,
    /// Every matched item of each search
    AllMatches,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::FirstMatch => write!(f, "first-match"),
            MatchPolicy::AllMatches => write!(f, "all-matches"),
        }
    }
}

/// A record held in miss space while merging
struct Missed {
    locator: DropLocator,
    key: String,
    /// Hourly chance as given, until another item merges in
    hit: Option<f64>,
    miss: f64,
    cycle_minutes: f64,
    rotations_used: usize,
}

impl Missed {
    fn from_record(record: &OddsRecord) -> Self {
        Self {
            locator: record.locator.clone(),
            key: record.locator.to_string(),
            hit: Some(record.hourly_hit),
            miss: 1.0 - record.hourly_hit,
            cycle_minutes: record.cycle_minutes,
            rotations_used: record.rotations_used,
        }
    }

    /// Fold another item's miss chance at the same location into this one
    ///
    /// When the two were computed over runs of different length, the miss
    /// of the shorter run is rescaled by the ratio of the run lengths first.
    fn merge(&mut self, other: &Missed) {
        let miss = if self.rotations_used == other.rotations_used {
            self.miss * other.miss
        } else if self.rotations_used > other.rotations_used {
            self.miss * other.miss.powf(other.cycle_minutes / self.cycle_minutes)
        } else {
            self.miss.powf(self.cycle_minutes / other.cycle_minutes) * other.miss
        };
        debug_assert!(
            crate::is_probability(miss),
            "merged miss {} out of range at {}",
            miss,
            self.locator
        );

        self.hit = None;
        self.miss = miss;
        self.cycle_minutes = self.cycle_minutes.max(other.cycle_minutes);
        self.rotations_used = self.rotations_used.max(other.rotations_used);
    }

    fn into_record(self) -> OddsRecord {
        OddsRecord {
            locator: self.locator,
            hourly_hit: self.hit.unwrap_or(1.0 - self.miss),
            cycle_minutes: self.cycle_minutes,
            rotations_used: self.rotations_used,
        }
    }
}

/// Pick the contributing items of each search, dropping repeats
fn contributors(results: &[ItemOdds], policy: MatchPolicy) -> Vec<(&str, &[OddsRecord])> {
    let mut seen = HashSet::new();
    let mut picked = Vec::new();

    for result in results {
        let candidates: Vec<(&str, &[OddsRecord])> = match policy {
            MatchPolicy::FirstMatch => result.first().into_iter().collect(),
            MatchPolicy::AllMatches => result
                .items
                .iter()
                .map(|(item, records)| (item.as_str(), records.as_slice()))
                .collect(),
        };

        for (item, records) in candidates {
            if seen.insert(item) {
                picked.push((item, records));
            } else {
                tracing::debug!(item, "Ignoring repeated item");
            }
        }
    }

    picked
}

/// Merge several search results into one ranked list
///
/// Returns the combined label (contributing item names joined by ", ") and
/// the locations shared by all contributors, best first. With no
/// contributing item both are empty; with no shared location only the list
/// is.
pub fn combine(results: &[ItemOdds], policy: MatchPolicy) -> (String, Vec<OddsRecord>) {
    let picked = contributors(results, policy);
    let label = picked
        .iter()
        .map(|(item, _)| *item)
        .collect::<Vec<_>>()
        .join(", ");

    let mut items = picked.into_iter();
    let mut merged: Vec<Missed> = match items.next() {
        Some((_, records)) => records.iter().map(Missed::from_record).collect(),
        None => return (label, Vec::new()),
    };

    for (item, records) in items {
        let incoming: HashMap<String, Missed> = records
            .iter()
            .map(Missed::from_record)
            .map(|m| (m.key.clone(), m))
            .collect();

        let before = merged.len();
        merged.retain_mut(|current| match incoming.get(&current.key) {
            Some(other) => {
                current.merge(other);
                true
            }
            None => false,
        });

        tracing::debug!(
            item,
            kept = merged.len(),
            dropped = before - merged.len(),
            "Merged item odds"
        );
    }

    let mut combined: Vec<OddsRecord> = merged.into_iter().map(Missed::into_record).collect();
    combined.sort_by(|a, b| b.hourly_hit.total_cmp(&a.hourly_hit));
    (label, combined)
}
