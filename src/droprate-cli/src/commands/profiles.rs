//! Mission profile listing

use anyhow::Result;
use droprate::MissionProfiles;

/// Print every mission type with its rotations and timing
pub fn show(profiles: &MissionProfiles) -> Result<()> {
    print!("{}", format_profiles(profiles));
    Ok(())
}

pub fn format_profiles(profiles: &MissionProfiles) -> String {
    let mut out = format!(
        "{:<18} {:<14} {:>8} {:>10}\n",
        "Mission Type", "Rotations", "Min/Rot", "Full Run"
    );
    out.push_str(&"-".repeat(53));
    out.push('\n');

    for (mission_type, profile) in profiles.iter() {
        let full_run = profile.rotations.len() as f64 * profile.minutes;
        out.push_str(&format!(
            "{:<18} {:<14} {:>8} {:>10}\n",
            mission_type,
            profile.rotations.join(","),
            profile.minutes,
            format!("{} mins.", full_run)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_profiles() {
        let profiles = MissionProfiles::default()
            .with_minutes([("Survival", 6.0)])
            .unwrap();
        let out = format_profiles(&profiles);

        assert_eq!(out.lines().count(), 2 + profiles.len());
        let survival = out.lines().find(|l| l.starts_with("Survival")).unwrap();
        assert!(survival.contains("A,A,B,C"));
        assert!(survival.contains("24 mins."));
    }
}
