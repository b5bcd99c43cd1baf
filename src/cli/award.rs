//! Award command implementation

use std::path::Path;

use anyhow::Result;

use kudos::notify;

use super::{TermNotifier, open_progress};

/// Award points and dispatch the resulting notifications
pub async fn award_command(data_dir: &Path, amount: u32) -> Result<()> {
    let (config, store, engine) = open_progress(data_dir)?;

    let outcome = engine.award_points(amount)?;

    let notifier = TermNotifier::new(store.clone(), config.notifications);
    notify::dispatch(&notifier, &outcome.effects);
    store.apply_outcome(&outcome, &engine.ledger())?;

    let stats = engine.stats();
    println!(
        "Total: {} points, level {} ({})",
        stats.points, stats.level, stats.title
    );

    Ok(())
}
