use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "kudos")]
#[command(about = "Kudos - onboarding points, levels, and badges from your terminal")]
#[command(version)]
struct Cli {
    /// Path to the data directory (defaults to ~/.kudos)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current points, level, progress, and badges
    Stats {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Award points (level-ups are detected automatically)
    Award {
        /// Number of points to add (must be greater than zero)
        amount: u32,
    },

    /// Award a badge by id
    Badge {
        /// Badge identifier, e.g. "helpful"
        badge_id: String,
    },

    /// List all badges in the catalog and which ones are earned
    Badges,

    /// Show the achievement history, newest first
    History {
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Run a simulated user action, e.g. "complete_task"
    Simulate {
        /// Action name
        action: String,
    },

    /// List the simulated actions and their rewards
    Actions,

    /// Show the notification center
    Center {
        /// Only show unread entries
        #[arg(long)]
        unread_only: bool,

        /// Maximum number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Mark everything as read after showing
        #[arg(long)]
        mark_read: bool,
    },

    /// Initialize a config file in the data directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Delete all progression data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the data directory
    let data_dir = cli
        .data_dir
        .unwrap_or_else(kudos::config::Config::data_dir);

    match cli.command {
        Some(Commands::Stats { json }) => {
            cli::stats::stats_command(&data_dir, json).await?;
        }
        Some(Commands::Award { amount }) => {
            cli::award::award_command(&data_dir, amount).await?;
        }
        Some(Commands::Badge { badge_id }) => {
            cli::badge::badge_command(&data_dir, &badge_id).await?;
        }
        Some(Commands::Badges) => {
            cli::badges::badges_command(&data_dir).await?;
        }
        Some(Commands::History { limit }) => {
            cli::history::history_command(&data_dir, limit).await?;
        }
        Some(Commands::Simulate { action }) => {
            cli::simulate::simulate_command(&data_dir, &action).await?;
        }
        Some(Commands::Actions) => {
            cli::actions::actions_command().await?;
        }
        Some(Commands::Center {
            unread_only,
            limit,
            mark_read,
        }) => {
            cli::center::center_command(&data_dir, unread_only, limit, mark_read).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&data_dir, force).await?;
        }
        Some(Commands::Reset { yes }) => {
            cli::reset::reset_command(&data_dir, yes).await?;
        }
        None => {
            // Default: show stats
            cli::stats::stats_command(&data_dir, false).await?;
        }
    }

    Ok(())
}
