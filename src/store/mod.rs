//! Progress persistence for Kudos
//!
//! Stores the ledger, earned badges, achievement history, and the durable
//! notification center in a SQLite database (`~/.kudos/progress.db`).
//! The engine never sees this module: it consumes snapshots produced by
//! [`ProgressionEngine::ledger`](crate::progression::ProgressionEngine) and
//! rebuilds ledgers via [`Ledger::from_parts`](crate::progression::Ledger).
//!
//! # Usage
//!
//! ```ignore
//! let store = ProgressStore::new()?;
//!
//! // Reload yesterday's state, or seed a fresh ledger
//! let engine = match store.load_ledger()? {
//!     Some(ledger) => ProgressionEngine::from_ledger(ledger),
//!     None => ProgressionEngine::with_seed(&config.seed),
//! };
//!
//! // Persist what one engine call changed
//! let outcome = engine.award_points(50)?;
//! store.apply_outcome(&outcome, &engine.ledger())?;
//! ```

mod db;

pub use db::ProgressDb;

use std::path::Path;

use anyhow::Result;
use rusqlite::OptionalExtension;
use serde::Serialize;

use crate::notify::CenterRecord;
use crate::progression::{Achievement, AchievementValue, BadgeId, Ledger, Outcome};

/// Central manager for progression persistence
///
/// Thread-safe through an internal mutex on the database connection.
#[derive(Clone)]
pub struct ProgressStore {
    db: ProgressDb,
}

/// A notification-center row as stored
#[derive(Debug, Clone, Serialize)]
pub struct StoredCenterRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: i64,
    pub record_type: String,
    pub data: serde_json::Value,
    pub read: bool,
}

impl ProgressStore {
    /// Create a store over the default database location
    pub fn new() -> Result<Self> {
        let db = ProgressDb::open_default()?;
        Ok(Self { db })
    }

    /// Create a store over a custom database path
    pub fn with_path(path: &Path) -> Result<Self> {
        let db = ProgressDb::open(path)?;
        Ok(Self { db })
    }

    // ========================================
    // LEDGER
    // ========================================

    /// Load the stored ledger. None when the store has never been saved to.
    pub fn load_ledger(&self) -> Result<Option<Ledger>> {
        let conn = self.db.conn();
        let scalars = conn
            .query_row("SELECT points, next_seq FROM ledger WHERE id = 1", [], |r| {
                Ok((r.get::<_, u32>(0)?, r.get::<_, u64>(1)?))
            })
            .optional()?;
        let Some((points, next_seq)) = scalars else {
            return Ok(None);
        };

        let mut stmt = conn.prepare("SELECT badge_id FROM badges")?;
        let badges: Vec<BadgeId> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .filter_map(|r| r.ok())
            .filter_map(|raw| {
                let parsed = BadgeId::from_str(&raw);
                if parsed.is_none() {
                    tracing::warn!("Skipping unknown stored badge: {}", raw);
                }
                parsed
            })
            .collect();

        let mut stmt = conn.prepare(
            "SELECT id, kind, title, description, value, icon, timestamp
             FROM achievements ORDER BY timestamp DESC, rowid DESC",
        )?;
        let achievements: Vec<Achievement> = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, i64>(6)?,
                ))
            })?
            .filter_map(|r| r.ok())
            .filter_map(|(id, kind, title, description, value, icon, timestamp)| {
                let rebuilt = Achievement::from_stored(
                    id.clone(),
                    &kind,
                    title,
                    description,
                    &value,
                    icon,
                    timestamp,
                );
                if rebuilt.is_none() {
                    tracing::warn!("Skipping unreadable achievement row: {}", id);
                }
                rebuilt
            })
            .collect();

        Ok(Some(Ledger::from_parts(
            points,
            badges,
            achievements,
            next_seq,
        )))
    }

    /// Persist a full ledger snapshot: scalars, badges, and history
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        let conn = self.db.conn();
        conn.execute(
            r#"
            INSERT INTO ledger (id, points, level, next_seq, updated_at)
            VALUES (1, ?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                points = ?1, level = ?2, next_seq = ?3, updated_at = ?4
            "#,
            (ledger.points(), ledger.level(), ledger.next_seq(), now),
        )?;
        for badge in ledger.badges() {
            conn.execute(
                "INSERT OR IGNORE INTO badges (badge_id, earned_at) VALUES (?1, ?2)",
                (badge.as_str(), now),
            )?;
        }
        for achievement in ledger.achievements() {
            insert_achievement(&conn, achievement)?;
        }
        Ok(())
    }

    /// Persist what a single engine outcome changed: the achievement row,
    /// the updated ledger scalars, and the badge row when one was earned
    pub fn apply_outcome(&self, outcome: &Outcome, ledger: &Ledger) -> Result<()> {
        let conn = self.db.conn();
        insert_achievement(&conn, &outcome.achievement)?;
        if let AchievementValue::Badge(id) = outcome.achievement.value {
            conn.execute(
                "INSERT OR IGNORE INTO badges (badge_id, earned_at) VALUES (?1, ?2)",
                (id.as_str(), outcome.achievement.timestamp),
            )?;
        }
        conn.execute(
            r#"
            INSERT INTO ledger (id, points, level, next_seq, updated_at)
            VALUES (1, ?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                points = ?1, level = ?2, next_seq = ?3, updated_at = ?4
            "#,
            (
                ledger.points(),
                ledger.level(),
                ledger.next_seq(),
                outcome.achievement.timestamp,
            ),
        )?;
        Ok(())
    }

    // ========================================
    // NOTIFICATION CENTER
    // ========================================

    /// Append an entry to the durable notification center
    pub fn insert_center_record(&self, record: &CenterRecord) -> Result<()> {
        let data = serde_json::to_string(&record.data)?;
        let conn = self.db.conn();
        conn.execute(
            r#"
            INSERT OR IGNORE INTO notifications
                (id, title, message, timestamp, record_type, data, is_read)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            (
                &record.id,
                &record.title,
                &record.message,
                record.timestamp,
                &record.kind,
                data,
                record.read,
            ),
        )?;
        Ok(())
    }

    /// Read back center entries, newest first
    pub fn center_records(&self, limit: usize, unread_only: bool) -> Result<Vec<StoredCenterRecord>> {
        let conn = self.db.conn();
        let sql = if unread_only {
            "SELECT id, title, message, timestamp, record_type, data, is_read
             FROM notifications WHERE is_read = 0
             ORDER BY timestamp DESC, rowid DESC LIMIT ?1"
        } else {
            "SELECT id, title, message, timestamp, record_type, data, is_read
             FROM notifications
             ORDER BY timestamp DESC, rowid DESC LIMIT ?1"
        };
        let mut stmt = conn.prepare(sql)?;
        let records: Vec<StoredCenterRecord> = stmt
            .query_map([limit as i64], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, bool>(6)?,
                ))
            })?
            .filter_map(|r| r.ok())
            .map(
                |(id, title, message, timestamp, record_type, data, read)| StoredCenterRecord {
                    id,
                    title,
                    message,
                    timestamp,
                    record_type,
                    data: serde_json::from_str(&data).unwrap_or(serde_json::Value::Null),
                    read,
                },
            )
            .collect();
        Ok(records)
    }

    /// Mark every unread center entry as read; returns how many changed
    pub fn mark_center_read(&self) -> Result<usize> {
        let conn = self.db.conn();
        let changed = conn.execute("UPDATE notifications SET is_read = 1 WHERE is_read = 0", [])?;
        Ok(changed)
    }

    /// Delete all progression data (reset to a fresh store)
    pub fn reset(&self) -> Result<()> {
        self.db.reset_progress()
    }
}

fn insert_achievement(conn: &rusqlite::Connection, achievement: &Achievement) -> Result<()> {
    conn.execute(
        r#"
        INSERT OR IGNORE INTO achievements
            (id, kind, title, description, value, icon, timestamp)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        (
            &achievement.id,
            achievement.kind.as_str(),
            &achievement.title,
            &achievement.description,
            achievement.value.storage_key(),
            &achievement.icon,
            achievement.timestamp,
        ),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::progression::{BadgeAward, ProgressionEngine, Seed};

    #[test]
    fn test_fresh_store_has_no_ledger() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::with_path(&dir.path().join("progress.db")).unwrap();
        assert!(store.load_ledger().unwrap().is_none());
    }

    #[test]
    fn test_ledger_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.db");
        let store = ProgressStore::with_path(&path).unwrap();

        let engine = ProgressionEngine::with_seed(&Seed::default());
        engine.award_points(300).unwrap();
        let BadgeAward::Granted(_) = engine.award_badge(crate::progression::BadgeId::QuickLearner)
        else {
            panic!("fresh badge should grant");
        };
        store.save_ledger(&engine.ledger()).unwrap();

        // Reopen and compare
        let reopened = ProgressStore::with_path(&path).unwrap();
        let loaded = reopened.load_ledger().unwrap().expect("saved ledger");
        assert_eq!(loaded.points(), 1050);
        assert_eq!(loaded.level(), 4);
        assert_eq!(loaded.badges().len(), 4);
        assert_eq!(loaded.achievements().len(), 2);
        assert_eq!(loaded.next_seq(), 2, "id counter must survive reloads");

        let stamps: Vec<i64> = loaded.achievements().iter().map(|a| a.timestamp).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted, "history must come back newest first");
    }

    #[test]
    fn test_apply_outcome_persists_one_call() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.db");
        let store = ProgressStore::with_path(&path).unwrap();

        let engine = ProgressionEngine::with_seed(&Seed::empty());
        store.save_ledger(&engine.ledger()).unwrap();

        let outcome = engine.award_points(50).unwrap();
        store.apply_outcome(&outcome, &engine.ledger()).unwrap();

        let loaded = store.load_ledger().unwrap().expect("saved ledger");
        assert_eq!(loaded.points(), 50);
        assert_eq!(loaded.achievements().len(), 1);
        assert_eq!(loaded.achievements()[0].id, outcome.achievement.id);
    }

    #[test]
    fn test_apply_outcome_records_badge_row() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::with_path(&dir.path().join("progress.db")).unwrap();

        let engine = ProgressionEngine::with_seed(&Seed::empty());
        let outcome = engine
            .award_badge(crate::progression::BadgeId::Helpful)
            .granted()
            .expect("fresh badge should grant");
        store.apply_outcome(&outcome, &engine.ledger()).unwrap();

        let loaded = store.load_ledger().unwrap().expect("saved ledger");
        assert!(loaded.has_badge(crate::progression::BadgeId::Helpful));
    }

    #[test]
    fn test_center_records_roundtrip() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::with_path(&dir.path().join("progress.db")).unwrap();

        let engine = ProgressionEngine::with_seed(&Seed::empty());
        let outcome = engine.award_points(10).unwrap();
        let record = CenterRecord::for_achievement(&outcome.achievement);
        store.insert_center_record(&record).unwrap();

        let all = store.center_records(10, false).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
        assert_eq!(all[0].record_type, "achievement");
        assert!(!all[0].read);
        assert_eq!(all[0].data["id"], outcome.achievement.id.as_str());

        assert_eq!(store.mark_center_read().unwrap(), 1);
        assert!(store.center_records(10, true).unwrap().is_empty());
        assert!(store.center_records(10, false).unwrap()[0].read);
    }

    #[test]
    fn test_reset_clears_everything() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::with_path(&dir.path().join("progress.db")).unwrap();

        let engine = ProgressionEngine::with_seed(&Seed::default());
        store.save_ledger(&engine.ledger()).unwrap();
        store.reset().unwrap();

        assert!(store.load_ledger().unwrap().is_none());
        assert!(store.center_records(10, false).unwrap().is_empty());
    }
}
