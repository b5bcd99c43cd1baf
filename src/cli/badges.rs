//! Badges command implementation

use std::path::Path;

use anyhow::Result;

use kudos::progression::BADGES;

use super::open_progress;

/// List the badge catalog with earned markers
pub async fn badges_command(data_dir: &Path) -> Result<()> {
    let (_config, _store, engine) = open_progress(data_dir)?;
    let ledger = engine.ledger();

    let earned = ledger.badges().len();
    println!("Badges ({}/{} earned)", earned, BADGES.len());
    for spec in BADGES {
        let marker = if ledger.has_badge(spec.id) { "x" } else { " " };
        println!(
            "  [{}] {} {} - {}",
            marker, spec.icon, spec.title, spec.description
        );
    }

    Ok(())
}
