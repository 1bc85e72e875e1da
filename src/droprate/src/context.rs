//! Query context: the drop table and mission profiles a query runs against

use crate::combine::{combine, MatchPolicy};
use crate::drops::{DropTable, DropsManifest, EnemyDrop, EnemyDropTable};
use crate::lookup::{lookup, split_searches, ItemOdds};
use crate::odds::OddsRecord;
use crate::profile::MissionProfiles;
use std::sync::{Arc, RwLock};

/// Immutable inputs for odds queries
#[derive(Debug, Clone, Default)]
pub struct OddsContext {
    drops: DropTable,
    enemy_mods: EnemyDropTable,
    profiles: MissionProfiles,
}

impl OddsContext {
    pub fn new(drops: DropTable, profiles: MissionProfiles) -> Self {
        Self {
            drops,
            enemy_mods: EnemyDropTable::default(),
            profiles,
        }
    }

    pub fn from_manifest(manifest: DropsManifest, profiles: MissionProfiles) -> Self {
        Self {
            drops: manifest.missions,
            enemy_mods: manifest.enemy_mods,
            profiles,
        }
    }

    pub fn drops(&self) -> &DropTable {
        &self.drops
    }

    pub fn enemy_mods(&self) -> &EnemyDropTable {
        &self.enemy_mods
    }

    pub fn profiles(&self) -> &MissionProfiles {
        &self.profiles
    }

    /// Odds for every item matching one search
    pub fn lookup(&self, search: &str) -> ItemOdds {
        lookup(&self.drops, &self.profiles, search)
    }

    /// Look up each comma-separated search
    pub fn lookup_all(&self, query: &str) -> Vec<ItemOdds> {
        split_searches(query)
            .into_iter()
            .map(|search| self.lookup(search))
            .collect()
    }

    /// Run a comma-separated multi-item query and combine the results
    pub fn search(&self, query: &str, policy: MatchPolicy) -> (String, Vec<OddsRecord>) {
        combine(&self.lookup_all(query), policy)
    }

    /// Enemies dropping mods that match `search`
    pub fn find_enemy_drops(&self, search: &str) -> Vec<EnemyDrop> {
        self.enemy_mods.find(search)
    }
}

/// Current [`OddsContext`], replaceable as a whole
///
/// Readers take a snapshot and query it without holding the lock; a refresh
/// swaps in a fully built context, so no query sees a partial update.
#[derive(Debug, Default)]
pub struct SharedContext {
    current: RwLock<Arc<OddsContext>>,
}

impl SharedContext {
    pub fn new(context: OddsContext) -> Self {
        Self {
            current: RwLock::new(Arc::new(context)),
        }
    }

    /// The context queries should run against right now
    pub fn snapshot(&self) -> Arc<OddsContext> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Swap in a new context, returning the previous one
    pub fn replace(&self, context: OddsContext) -> Arc<OddsContext> {
        let next = Arc::new(context);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        tracing::info!(
            items = next.drops.len(),
            mission_types = next.profiles.len(),
            "Replacing drop data"
        );
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn test_drops() -> DropTable {
        let mut drops = DropTable::default();
        drops
            .insert("Nova Prime Systems", "Survival", "Lua", "Apollo", "C", 0.3)
            .unwrap();
        drops
            .insert("Nova Prime Systems", "Capture", "Earth", "Cambria", "none", 0.05)
            .unwrap();
        drops
            .insert("Rhino Prime Chassis", "Survival", "Lua", "Apollo", "A", 0.1)
            .unwrap();
        drops
    }

    #[test]
    fn test_search_combines_terms() {
        let ctx = OddsContext::new(test_drops(), MissionProfiles::default());
        let (label, records) = ctx.search("nova systems, rhino", MatchPolicy::FirstMatch);

        assert_eq!(label, "Nova Prime Systems, Rhino Prime Chassis");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location(), "Lua/Apollo");
        // Systems: 20 minute run, Chassis: 10 minute run
        assert_eq!(records[0].cycle_minutes, 20.0);
        assert_eq!(records[0].rotations_used, 4);
    }

    #[test]
    fn test_search_single_term() {
        let ctx = OddsContext::new(test_drops(), MissionProfiles::default());
        let (label, records) = ctx.search("nova", MatchPolicy::FirstMatch);
        assert_eq!(label, "Nova Prime Systems");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_search_ignores_unmatched_terms() {
        let ctx = OddsContext::new(test_drops(), MissionProfiles::default());
        let (label, records) = ctx.search("excalibur, nova", MatchPolicy::FirstMatch);
        assert_eq!(label, "Nova Prime Systems");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_search_empty_query() {
        let ctx = OddsContext::new(test_drops(), MissionProfiles::default());
        let (label, records) = ctx.search(" , ", MatchPolicy::FirstMatch);
        assert!(label.is_empty());
        assert!(records.is_empty());
    }

    #[test]
    fn test_minute_overrides_change_odds() {
        let fast = OddsContext::new(
            test_drops(),
            MissionProfiles::default()
                .with_minutes([("Capture", 1.5)])
                .unwrap(),
        );
        let slow = OddsContext::new(test_drops(), MissionProfiles::default());

        let fast_hit = fast.search("nova", MatchPolicy::FirstMatch).1;
        let slow_hit = slow.search("nova", MatchPolicy::FirstMatch).1;
        let find = |records: &[OddsRecord]| {
            records
                .iter()
                .find(|r| r.mission_type() == "Capture")
                .map(|r| r.hourly_hit)
                .unwrap()
        };
        assert!(find(&fast_hit) > find(&slow_hit));
    }

    #[test]
    fn test_from_manifest_keeps_enemy_mods() {
        let mut enemy_mods = EnemyDropTable::default();
        enemy_mods.insert("Vitality", "Lancer", 0.03, 0.1).unwrap();
        let manifest = DropsManifest {
            version: 1,
            missions: test_drops(),
            enemy_mods,
        };

        let ctx = OddsContext::from_manifest(manifest, MissionProfiles::default());
        assert_eq!(ctx.drops().len(), 2);
        assert_eq!(ctx.find_enemy_drops("vitality").len(), 1);
    }

    #[test]
    fn test_shared_context_replace() {
        let shared = SharedContext::new(OddsContext::new(test_drops(), MissionProfiles::default()));
        let before = shared.snapshot();

        let previous = shared.replace(OddsContext::default());
        assert!(Arc::ptr_eq(&before, &previous));

        // Old snapshots stay intact
        assert_eq!(before.drops().len(), 2);
        assert!(shared.snapshot().drops().is_empty());
    }

    #[test]
    fn test_shared_context_concurrent_readers() {
        let shared = Arc::new(SharedContext::new(OddsContext::new(
            test_drops(),
            MissionProfiles::default(),
        )));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let ctx = shared.snapshot();
                        let (_, records) = ctx.search("nova", MatchPolicy::FirstMatch);
                        // Either the full old table or the empty new one
                        assert!(records.len() == 2 || records.is_empty());
                    }
                })
            })
            .collect();

        shared.replace(OddsContext::default());
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
