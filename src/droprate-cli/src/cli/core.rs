//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::data::{parse_minutes, DataArgs};

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Which matched items of a search take part in a combined query
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchPolicyArg {
    /// Only the first matched item of each search
    First,
    /// Every matched item of each search
    All,
}

impl From<MatchPolicyArg> for droprate::MatchPolicy {
    fn from(arg: MatchPolicyArg) -> Self {
        match arg {
            MatchPolicyArg::First => droprate::MatchPolicy::FirstMatch,
            MatchPolicyArg::All => droprate::MatchPolicy::AllMatches,
        }
    }
}

#[derive(Parser)]
#[command(name = "droprate")]
#[command(about = "Rank mission farming locations by hourly drop odds", long_about = None)]
pub struct Cli {
    /// Log more detail (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank farming locations for one or more items (comma-separated)
    #[command(visible_alias = "f")]
    Find {
        /// Item search, e.g. "nova prime systems" or "nova sys, rhino chassis"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        data: DataArgs,

        /// Maximum rows to show (defaults to the configured value)
        #[arg(short = 'n', long)]
        rows: Option<usize>,

        /// How searches matching several items are combined
        #[arg(long, value_enum)]
        matches: Option<MatchPolicyArg>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List items in the drops manifest
    #[command(visible_alias = "i")]
    Items {
        /// Only items matching this search
        filter: Vec<String>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Find enemies dropping a mod
    #[command(visible_alias = "m")]
    Mods {
        /// Mod name to search for (e.g., "vitality")
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        data: DataArgs,

        /// Maximum rows to show (defaults to the configured value)
        #[arg(short = 'n', long)]
        rows: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show mission profiles with the rotation timings in effect
    #[command(visible_alias = "p")]
    Profiles {
        /// Mission profile table replacing the built-in one
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Minutes per rotation for a mission type (e.g., "Survival=6"), repeatable
        #[arg(long = "minutes", value_name = "TYPE=MINUTES", value_parser = parse_minutes)]
        minutes: Vec<(String, f64)>,
    },

    /// Chance of collecting every one of several exclusive drops within a number of draws
    Chance {
        /// Per-draw probability of each outcome (0 to 1)
        #[arg(required = true, num_args = 1..)]
        probabilities: Vec<f64>,

        /// Number of draws
        #[arg(short, long)]
        tries: u32,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default drops manifest
        #[arg(long)]
        drops: Option<PathBuf>,

        /// Set default mission profile table
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Set default maximum rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// Set default match policy
        #[arg(long, value_enum)]
        matches: Option<MatchPolicyArg>,

        /// Set minutes per rotation for a mission type (e.g., "Survival=6"), repeatable
        #[arg(long = "minutes", value_name = "TYPE=MINUTES", value_parser = parse_minutes)]
        minutes: Vec<(String, f64)>,

        /// Remove all minute overrides
        #[arg(long)]
        reset_minutes: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
