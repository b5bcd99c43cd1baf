//! Integration tests for progress persistence across process restarts

mod common;

use kudos::notify::CenterRecord;
use kudos::progression::{BadgeId, Effect, ProgressionEngine, Seed};
use kudos::store::ProgressStore;

use common::{create_test_store, seeded_engine};

#[test]
fn test_full_flow_survives_restart() {
    let (temp_dir, store) = create_test_store();

    // First run: seed, earn a level, persist the whole ledger
    let engine = seeded_engine();
    let outcome = engine.award_points(300).expect("positive amount");
    store
        .save_ledger(&engine.ledger())
        .expect("Failed to save ledger");
    drop(store);

    // Second run: reload into a fresh engine
    let store = ProgressStore::with_path(&temp_dir.path().join("progress.db"))
        .expect("Failed to reopen store");
    let ledger = store
        .load_ledger()
        .expect("Failed to load ledger")
        .expect("ledger was saved");
    let engine = ProgressionEngine::from_ledger(ledger);

    let stats = engine.stats();
    assert_eq!(stats.points, 1050);
    assert_eq!(stats.level, 4);
    assert_eq!(stats.badges.len(), 3);
    assert_eq!(engine.achievements().len(), 1);
    assert_eq!(engine.achievements()[0].id, outcome.achievement.id);

    // Later ids continue the stored sequence instead of colliding
    let next = engine.award_points(10).expect("positive amount");
    assert_ne!(next.achievement.id, outcome.achievement.id);
}

#[test]
fn test_incremental_outcomes_match_full_save() {
    let (_temp_dir, store) = create_test_store();

    let engine = ProgressionEngine::with_seed(&Seed::empty());
    store
        .save_ledger(&engine.ledger())
        .expect("Failed to save ledger");

    for amount in [30, 40, 50] {
        let outcome = engine.award_points(amount).expect("positive amount");
        store
            .apply_outcome(&outcome, &engine.ledger())
            .expect("Failed to persist outcome");
    }
    let outcome = engine
        .award_badge(BadgeId::QuickLearner)
        .granted()
        .expect("fresh badge should grant");
    store
        .apply_outcome(&outcome, &engine.ledger())
        .expect("Failed to persist outcome");

    // 30 + 40 + 50 points crosses 100, so the third record is a level up
    let loaded = store
        .load_ledger()
        .expect("Failed to load ledger")
        .expect("ledger was saved");
    assert_eq!(loaded.points(), 120);
    assert_eq!(loaded.level(), 2);
    assert!(loaded.has_badge(BadgeId::QuickLearner));
    assert_eq!(loaded.achievements().len(), 4);
    assert_eq!(loaded.next_seq(), 4);
}

#[test]
fn test_center_backlog_survives_restart() {
    let (temp_dir, store) = create_test_store();

    let engine = seeded_engine();
    for amount in [10, 20] {
        let outcome = engine.award_points(amount).expect("positive amount");
        for effect in &outcome.effects {
            if let Effect::Center(record) = effect {
                store
                    .insert_center_record(record)
                    .expect("Failed to insert record");
            }
        }
    }
    drop(store);

    let store = ProgressStore::with_path(&temp_dir.path().join("progress.db"))
        .expect("Failed to reopen store");
    let unread = store
        .center_records(10, true)
        .expect("Failed to read records");
    assert_eq!(unread.len(), 2);

    assert_eq!(store.mark_center_read().expect("Failed to mark read"), 2);
    assert!(
        store
            .center_records(10, true)
            .expect("Failed to read records")
            .is_empty()
    );

    let all = store
        .center_records(10, false)
        .expect("Failed to read records");
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|r| r.read));
}

#[test]
fn test_unknown_stored_badge_is_skipped_on_load() {
    let (temp_dir, store) = create_test_store();

    let engine = seeded_engine();
    store
        .save_ledger(&engine.ledger())
        .expect("Failed to save ledger");
    drop(store);

    // A newer version may store badges this one does not know
    let conn = rusqlite::Connection::open(temp_dir.path().join("progress.db"))
        .expect("Failed to open raw connection");
    conn.execute(
        "INSERT INTO badges (badge_id, earned_at) VALUES ('night_owl', 0)",
        [],
    )
    .expect("Failed to insert badge row");
    drop(conn);

    let store = ProgressStore::with_path(&temp_dir.path().join("progress.db"))
        .expect("Failed to reopen store");
    let loaded = store
        .load_ledger()
        .expect("Failed to load ledger")
        .expect("ledger was saved");
    assert_eq!(loaded.badges().len(), 3, "unknown badge must be skipped");
    assert_eq!(loaded.points(), 750);
}

#[test]
fn test_reset_wipes_progress_and_backlog() {
    let (_temp_dir, store) = create_test_store();

    let engine = seeded_engine();
    let outcome = engine.award_points(300).expect("positive amount");
    store
        .save_ledger(&engine.ledger())
        .expect("Failed to save ledger");
    store
        .insert_center_record(&CenterRecord::for_achievement(&outcome.achievement))
        .expect("Failed to insert record");

    store.reset().expect("Failed to reset");

    assert!(store.load_ledger().expect("Failed to load ledger").is_none());
    assert!(
        store
            .center_records(10, false)
            .expect("Failed to read records")
            .is_empty()
    );
}
