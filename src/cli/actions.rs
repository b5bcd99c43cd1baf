//! Actions command implementation

use anyhow::Result;

use kudos::progression::{ActionReward, BadgeSpec, SimulatedAction};

/// List the simulatable actions and their rewards
pub async fn actions_command() -> Result<()> {
    println!("Available actions:");
    for action in SimulatedAction::all() {
        let reward = match action.reward() {
            ActionReward::Points(n) => format!("+{} points", n),
            ActionReward::Badge(id) => format!("badge \"{}\"", BadgeSpec::get(id).title),
        };
        println!("  {:<16} {} ({})", action.as_str(), action.label(), reward);
    }
    Ok(())
}
