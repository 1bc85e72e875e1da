//! Drop odds query handlers

use anyhow::Result;
use droprate::{
    combine, lookup::fuzzy_matches, EnemyDrop, MatchPolicy, OddsContext, OddsRecord, OddsRow,
};

use crate::cli::OutputFormat;

/// Rank farming locations for a comma-separated item query
pub fn find(
    ctx: &OddsContext,
    query: &str,
    policy: MatchPolicy,
    max_rows: usize,
    format: OutputFormat,
) -> Result<()> {
    let results = ctx.lookup_all(query);
    let skipped: usize = results.iter().map(|r| r.skipped).sum();
    let (label, records) = combine(&results, policy);

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = records.iter().take(max_rows).map(OddsRecord::to_row).collect();
            let output = find_json(&label, &rows, skipped);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            if label.is_empty() {
                println!("No drops found for '{}'", query);
                println!("\nTry a partial name like 'nova sys' or 'rhino'");
                return Ok(());
            }

            println!("{}\n", label);
            if records.is_empty() {
                println!("No location drops all of these items");
            } else {
                print!("{}", format_table(&records, max_rows));
            }
            if skipped > 0 {
                println!(
                    "\n({} location{} skipped: unknown mission type)",
                    skipped,
                    if skipped == 1 { "" } else { "s" }
                );
            }
        }
    }

    Ok(())
}

fn find_json(label: &str, rows: &[OddsRow], skipped: usize) -> serde_json::Value {
    serde_json::json!({ "label": label, "rows": rows, "skipped": skipped })
}

/// Render up to `max_rows` records as a table
pub fn format_table(records: &[OddsRecord], max_rows: usize) -> String {
    let mut out = format!(
        "{:<18} {:<30} {:>8} {:>11} {:>6}\n",
        "Mission Type", "Location", "Drop %", "Run Time", "Iter."
    );
    out.push_str(&"-".repeat(77));
    out.push('\n');

    for row in records.iter().take(max_rows).map(OddsRecord::to_row) {
        out.push_str(&format!(
            "{:<18} {:<30} {:>8} {:>11} {:>6}\n",
            row.mission_type,
            row.location,
            row.probability_percent,
            format!("{} mins.", row.cycle_minutes),
            row.rotations_used
        ));
    }

    if records.len() > max_rows {
        out.push_str(&format!("... {} more\n", records.len() - max_rows));
    }

    out
}

/// List reward items and enemy mods, optionally filtered by a fuzzy search
pub fn items(ctx: &OddsContext, filter: &str) -> Result<()> {
    print!("{}", format_items(ctx, filter));
    Ok(())
}

fn format_items(ctx: &OddsContext, filter: &str) -> String {
    let terms: Vec<&str> = filter.split_whitespace().collect();
    let rewards: Vec<&str> = ctx
        .drops()
        .item_names()
        .filter(|name| fuzzy_matches(name, &terms))
        .collect();
    let mods: Vec<&str> = ctx
        .enemy_mods()
        .item_names()
        .filter(|name| fuzzy_matches(name, &terms))
        .collect();

    let mut out = format!("Known reward items ({}):\n\n", rewards.len());
    for name in rewards {
        out.push_str(&format!("  {}\n", name));
    }
    if !mods.is_empty() {
        out.push_str(&format!("\nEnemy mods ({}):\n\n", mods.len()));
        for name in mods {
            out.push_str(&format!("  {}\n", name));
        }
    }
    out
}

/// Show enemies dropping mods that match `name`
pub fn mods(ctx: &OddsContext, name: &str, max_rows: usize, format: OutputFormat) -> Result<()> {
    let drops = ctx.find_enemy_drops(name);

    match format {
        OutputFormat::Json => {
            let shown: Vec<&EnemyDrop> = drops.iter().take(max_rows).collect();
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        OutputFormat::Table => {
            if drops.is_empty() {
                println!("No enemy drops found for '{}'", name);
                return Ok(());
            }

            println!("{:<30} {:<30} {:>8}", "Mod", "Enemy", "Chance");
            println!("{}", "-".repeat(70));
            for drop in drops.iter().take(max_rows) {
                println!(
                    "{:<30} {:<30} {:>8}",
                    drop.item, drop.enemy, drop.chance_display
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use droprate::{DropLocator, DropTable, EnemyDropTable, DropsManifest, MissionProfiles};

    fn record(location: &str, hourly_hit: f64) -> OddsRecord {
        OddsRecord {
            locator: DropLocator::new("Survival", "Lua", location),
            hourly_hit,
            cycle_minutes: 20.0,
            rotations_used: 4,
        }
    }

    #[test]
    fn test_format_table() {
        let records = vec![record("Apollo", 0.9066), record("Plato", 0.5)];
        let table = format_table(&records, 10);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Mission Type"));
        assert!(lines[2].contains("Lua/Apollo"));
        assert!(lines[2].contains("90.66%"));
        assert!(lines[2].contains("20 mins."));
        assert!(lines[3].contains("50.00%"));
    }

    #[test]
    fn test_format_table_limits_rows() {
        let records: Vec<OddsRecord> = (0..5).map(|i| record(&format!("Loc{}", i), 0.1)).collect();
        let table = format_table(&records, 2);
        assert_eq!(table.lines().count(), 5);
        assert!(table.ends_with("... 3 more\n"));
    }

    #[test]
    fn test_find_json_reports_skipped() {
        let rows = vec![record("Apollo", 0.5).to_row()];
        let value = find_json("Nova Prime Systems", &rows, 2);
        assert_eq!(value["label"], "Nova Prime Systems");
        assert_eq!(value["skipped"], 2);
        assert_eq!(value["rows"][0]["location"], "Lua/Apollo");
        assert_eq!(value["rows"][0]["probability_percent"], "50.00%");
    }

    #[test]
    fn test_format_items_lists_mods() {
        let mut missions = DropTable::default();
        missions
            .insert("Vitality Prime Set", "Survival", "Lua", "Apollo", "A", 0.1)
            .unwrap();
        missions
            .insert("Rhino Prime Chassis", "Defense", "Ceres", "Gabii", "B", 0.1)
            .unwrap();
        let mut enemy_mods = EnemyDropTable::default();
        enemy_mods.insert("Vitality", "Lancer", 0.03, 0.1).unwrap();
        let manifest = DropsManifest {
            version: 1,
            missions,
            enemy_mods,
        };
        let ctx = OddsContext::from_manifest(manifest, MissionProfiles::default());

        let all = format_items(&ctx, "");
        assert!(all.contains("Known reward items (2):"));
        assert!(all.contains("Enemy mods (1):"));
        assert!(all.contains("  Vitality\n"));

        let filtered = format_items(&ctx, "rhino");
        assert!(filtered.contains("Known reward items (1):"));
        assert!(!filtered.contains("Enemy mods"));
    }
}
