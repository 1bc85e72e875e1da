//! Drop tables for mission rewards and enemy mod drops
//!
//! Provides the parsed reward data that odds are computed from.

mod enemy;
mod manifest;
mod table;
mod types;

pub use enemy::{EnemyDrop, EnemyDropTable};
pub use manifest::DropsManifest;
pub use table::DropTable;
pub use types::{DropLocator, RotationChance};
