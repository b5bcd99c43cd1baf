//! Simulate command implementation

use std::path::Path;

use anyhow::Result;

use kudos::notify;
use kudos::progression::{BadgeSpec, SimulatedAction, SimulationOutcome};

use super::{TermNotifier, closest_match, open_progress};

/// Run a named user action through the progression engine
pub async fn simulate_command(data_dir: &Path, action: &str) -> Result<()> {
    let (config, store, engine) = open_progress(data_dir)?;

    match engine.simulate(action) {
        Some(SimulationOutcome::Applied(outcome)) => {
            let notifier = TermNotifier::new(store.clone(), config.notifications);
            notify::dispatch(&notifier, &outcome.effects);
            store.apply_outcome(&outcome, &engine.ledger())?;

            let stats = engine.stats();
            println!(
                "Total: {} points, level {} ({})",
                stats.points, stats.level, stats.title
            );
        }
        Some(SimulationOutcome::AlreadyHeld(badge_id)) => {
            println!("Badge already held: {}", BadgeSpec::get(badge_id).title);
        }
        None => {
            eprintln!("Unknown action: {}", action);
            let names: Vec<&str> = SimulatedAction::all().iter().map(|a| a.as_str()).collect();
            if let Some(suggestion) = closest_match(action, &names) {
                eprintln!("Did you mean: {}?", suggestion);
            }
            eprintln!("Run `kudos actions` to list what you can simulate.");
        }
    }

    Ok(())
}
