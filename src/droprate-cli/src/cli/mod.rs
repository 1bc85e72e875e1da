//! CLI argument definitions for droprate
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod data;

pub use self::core::{Cli, Commands, OutputFormat};
pub use data::DataArgs;
