//! Stats command implementation

use std::path::Path;

use anyhow::Result;

use kudos::progression::BadgeSpec;

use super::open_progress;

/// Show current points, level, progress, and badges
pub async fn stats_command(data_dir: &Path, json: bool) -> Result<()> {
    let (_config, _store, engine) = open_progress(data_dir)?;
    let stats = engine.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Level {} - {}", stats.level, stats.title);
    println!("Points: {}", stats.points);
    match stats.next_level_points {
        Some(next) => println!(
            "Progress: {}% ({} points to level {})",
            stats.progress,
            next.saturating_sub(stats.points),
            stats.level + 1
        ),
        None => println!("Progress: {}% (max level reached)", stats.progress),
    }

    if stats.badges.is_empty() {
        println!("Badges: none yet");
    } else {
        println!(
            "Badges ({}/{}):",
            stats.badges.len(),
            BadgeSpec::total_count()
        );
        for badge in &stats.badges {
            println!("  {} {} - {}", badge.icon, badge.title, badge.description);
        }
    }

    Ok(())
}
