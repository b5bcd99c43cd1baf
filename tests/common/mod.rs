//! Shared test utilities for progression integration tests

use tempfile::TempDir;

use kudos::progression::{ProgressionEngine, Seed};
use kudos::store::ProgressStore;

/// Creates a progress store backed by a temporary directory
pub fn create_test_store() -> (TempDir, ProgressStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ProgressStore::with_path(&temp_dir.path().join("progress.db"))
        .expect("Failed to open progress store");
    (temp_dir, store)
}

/// Engine seeded with the default onboarding state: 750 points, level 3,
/// and the first_day, team_player, and helpful badges
pub fn seeded_engine() -> ProgressionEngine {
    ProgressionEngine::with_seed(&Seed::default())
}
