//! History command implementation

use std::path::Path;

use anyhow::Result;

use super::{format_timestamp, open_progress};

/// Show the achievement history, newest first
pub async fn history_command(data_dir: &Path, limit: usize) -> Result<()> {
    let (_config, _store, engine) = open_progress(data_dir)?;
    let achievements = engine.achievements();

    if achievements.is_empty() {
        println!("No achievements yet. Try `kudos simulate complete_task`.");
        return Ok(());
    }

    for achievement in achievements.iter().take(limit) {
        println!(
            "{}  {} {}",
            format_timestamp(achievement.timestamp),
            achievement.icon,
            achievement.title
        );
        println!("                  {}", achievement.description);
    }

    Ok(())
}
