//! Arguments selecting the drop data and mission timings a command uses

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Path to drops manifest (defaults to the configured one)
    #[arg(long, env = "DROPRATE_DROPS")]
    pub drops: Option<PathBuf>,

    /// Mission profile table replacing the built-in one
    #[arg(long)]
    pub profiles: Option<PathBuf>,

    /// Minutes per rotation for a mission type (e.g., "Survival=6"), repeatable
    #[arg(long = "minutes", value_name = "TYPE=MINUTES", value_parser = parse_minutes)]
    pub minutes: Vec<(String, f64)>,
}

/// Parse a "Mission Type=minutes" pair
pub fn parse_minutes(s: &str) -> Result<(String, f64), String> {
    let (mission_type, minutes) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected TYPE=MINUTES, got '{}'", s))?;

    let mission_type = mission_type.trim();
    if mission_type.is_empty() {
        return Err(format!("missing mission type in '{}'", s));
    }

    let minutes: f64 = minutes
        .trim()
        .parse()
        .map_err(|_| format!("invalid minutes in '{}'", s))?;
    if !(minutes.is_finite() && minutes > 0.0) {
        return Err(format!("minutes must be positive in '{}'", s));
    }

    Ok((mission_type.to_string(), minutes))
}
