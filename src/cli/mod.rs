//! CLI command implementations

pub mod actions;
pub mod award;
pub mod badge;
pub mod badges;
pub mod center;
pub mod history;
pub mod init;
pub mod reset;
pub mod simulate;
pub mod stats;

use std::path::Path;

use anyhow::Result;

use kudos::config::{Config, NotificationSettings};
use kudos::notify::{CenterRecord, Notifier, Severity};
use kudos::progression::ProgressionEngine;
use kudos::store::ProgressStore;

/// Open config, store, and engine for a data directory. A fresh store gets
/// a ledger seeded from config, saved immediately so the next run reloads it.
pub(crate) fn open_progress(data_dir: &Path) -> Result<(Config, ProgressStore, ProgressionEngine)> {
    let config = Config::load_from_dir(data_dir)?;
    let store = ProgressStore::with_path(&data_dir.join("progress.db"))?;
    let engine = match store.load_ledger()? {
        Some(ledger) => ProgressionEngine::from_ledger(ledger),
        None => {
            let engine = ProgressionEngine::with_seed(&config.seed);
            store.save_ledger(&engine.ledger())?;
            engine
        }
    };
    Ok((config, store, engine))
}

/// Notifier for terminal sessions: toasts go to stdout, center records into
/// the store. Both channels honor the config toggles.
pub(crate) struct TermNotifier {
    store: ProgressStore,
    settings: NotificationSettings,
}

impl TermNotifier {
    pub(crate) fn new(store: ProgressStore, settings: NotificationSettings) -> Self {
        Self { store, settings }
    }
}

impl Notifier for TermNotifier {
    fn show(&self, message: &str, severity: Severity) {
        if !self.settings.toasts {
            return;
        }
        println!("[{}] {}", severity.as_str(), message);
    }

    fn push_to_center(&self, record: &CenterRecord) {
        if !self.settings.center {
            return;
        }
        if let Err(e) = self.store.insert_center_record(record) {
            tracing::warn!("Failed to record notification: {}", e);
        }
    }
}

/// Millisecond timestamp as local wall-clock time for listings
pub(crate) fn format_timestamp(ts: i64) -> String {
    use chrono::{Local, TimeZone};

    Local
        .timestamp_millis_opt(ts)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Best fuzzy match for a mistyped identifier, if any candidate is close
pub(crate) fn closest_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    use strsim::jaro_winkler;

    // Minimum fuzzy similarity threshold (0.0 - 1.0)
    const FUZZY_THRESHOLD: f64 = 0.75;

    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&input.to_lowercase(), c)))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_match_catches_typos() {
        let candidates = ["helpful", "first_day", "team_player"];
        assert_eq!(closest_match("helpfull", &candidates), Some("helpful"));
        assert_eq!(
            closest_match("team_palyer", &candidates),
            Some("team_player")
        );
        assert_eq!(closest_match("zzzz", &candidates), None);
    }
}
