//! # droprate
//!
//! Reward odds for mission-based loot tables.
//!
//! This library provides functionality to:
//! - Hold parsed mission drop tables (item → mission type → region → location → rotation)
//! - Turn per-rotation drop chances into an hourly chance per farming location
//! - Look items up by fuzzy name and rank their farming locations
//! - Combine several searches into one "any of these items" ranking
//!
//! ## Example
//!
//! ```
//! use droprate::{DropTable, MatchPolicy, MissionProfiles, OddsContext};
//!
//! let mut drops = DropTable::default();
//! drops.insert("Nova Prime Systems", "Survival", "Lua", "Apollo", "A", 0.1)?;
//! drops.insert("Nova Prime Systems", "Survival", "Lua", "Apollo", "C", 0.3)?;
//!
//! let ctx = OddsContext::new(drops, MissionProfiles::default());
//! let (label, records) = ctx.search("nova systems", MatchPolicy::FirstMatch);
//!
//! assert_eq!(label, "Nova Prime Systems");
//! assert_eq!(records[0].location(), "Lua/Apollo");
//! # Ok::<(), droprate::Error>(())
//! ```

pub mod combine;
pub mod context;
pub mod drops;
pub mod lookup;
pub mod odds;
pub mod profile;
pub mod stats;

// Re-export commonly used items
#[doc(inline)]
pub use combine::{combine, MatchPolicy};
#[doc(inline)]
pub use context::{OddsContext, SharedContext};
#[doc(inline)]
pub use drops::{DropLocator, DropTable, DropsManifest, EnemyDrop, EnemyDropTable, RotationChance};
#[doc(inline)]
pub use lookup::{lookup, split_searches, ItemOdds};
#[doc(inline)]
pub use odds::{compute_odds, OddsRecord, OddsRow};
#[doc(inline)]
pub use profile::{MissionProfile, MissionProfiles};

/// Errors from loading drop data or computing odds
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown mission type: {0}")]
    UnknownMissionType(String),

    #[error("Invalid drop chance {chance} for {context}: must be within [0, 1]")]
    InvalidChance { context: String, chance: f64 },

    #[error("Invalid mission profile for {mission_type}: {reason}")]
    InvalidProfile {
        mission_type: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that a value is a usable probability
pub(crate) fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
