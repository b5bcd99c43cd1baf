//! Badge command implementation

use std::path::Path;

use anyhow::Result;

use kudos::notify;
use kudos::progression::{BadgeAward, BadgeId};

use super::{TermNotifier, closest_match, open_progress};

/// Grant a badge by id
pub async fn badge_command(data_dir: &Path, badge_id: &str) -> Result<()> {
    let (config, store, engine) = open_progress(data_dir)?;

    match engine.award_badge_named(badge_id) {
        BadgeAward::Granted(outcome) => {
            let notifier = TermNotifier::new(store.clone(), config.notifications);
            notify::dispatch(&notifier, &outcome.effects);
            store.apply_outcome(&outcome, &engine.ledger())?;
            println!(
                "Earned: {} {}",
                outcome.achievement.icon, outcome.achievement.title
            );
        }
        BadgeAward::AlreadyHeld => {
            println!("Badge already held: {}", badge_id);
        }
        BadgeAward::NotFound => {
            eprintln!("Unknown badge: {}", badge_id);
            let ids: Vec<&str> = BadgeId::all().iter().map(|b| b.as_str()).collect();
            if let Some(suggestion) = closest_match(badge_id, &ids) {
                eprintln!("Did you mean: {}?", suggestion);
            }
            eprintln!("Run `kudos badges` to list the catalog.");
        }
    }

    Ok(())
}
