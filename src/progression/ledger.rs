//! Ledger state
//!
//! Mutable record of one user's progression: points, derived level, badge
//! set, and newest-first achievement history. Constructed explicitly, never
//! ambient. Mutation goes through the engine, so the setters here stay
//! crate-private.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::achievement::Achievement;
use super::badges::BadgeId;
use super::levels::LevelTier;

/// Starting state for a fresh ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub points: u32,
    pub badges: Vec<BadgeId>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            points: 750,
            badges: vec![BadgeId::FirstDay, BadgeId::TeamPlayer, BadgeId::Helpful],
        }
    }
}

impl Seed {
    /// A zeroed seed: no points, no badges
    pub fn empty() -> Self {
        Self {
            points: 0,
            badges: Vec::new(),
        }
    }
}

/// One user's progression state
#[derive(Debug, Clone)]
pub struct Ledger {
    points: u32,
    level: u32,
    badges: BTreeSet<BadgeId>,
    achievements: Vec<Achievement>,
    next_seq: u64,
}

impl Ledger {
    /// Empty ledger: 0 points, level 1, no badges, no history
    pub fn new() -> Self {
        Self::seeded(&Seed::empty())
    }

    /// Ledger starting from a seed, level derived from the seed points
    pub fn seeded(seed: &Seed) -> Self {
        Self {
            points: seed.points,
            level: LevelTier::for_points(seed.points).level,
            badges: seed.badges.iter().copied().collect(),
            achievements: Vec::new(),
            next_seq: 0,
        }
    }

    /// Reassemble a ledger from stored parts. The level is re-derived from
    /// points and the history is put back into newest-first order.
    pub fn from_parts(
        points: u32,
        badges: Vec<BadgeId>,
        mut achievements: Vec<Achievement>,
        next_seq: u64,
    ) -> Self {
        achievements.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self {
            points,
            level: LevelTier::for_points(points).level,
            badges: badges.into_iter().collect(),
            achievements,
            next_seq,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn badges(&self) -> &BTreeSet<BadgeId> {
        &self.badges
    }

    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.contains(&id)
    }

    /// Achievement history, newest first
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Add points and return the new total
    pub(crate) fn add_points(&mut self, amount: u32) -> u32 {
        self.points = self.points.saturating_add(amount);
        self.points
    }

    pub(crate) fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Insert a badge; false when it was already held
    pub(crate) fn insert_badge(&mut self, id: BadgeId) -> bool {
        self.badges.insert(id)
    }

    /// Insert keeping descending timestamp order. Records created in call
    /// order land at the front without touching the rest of the list.
    pub(crate) fn push_achievement(&mut self, achievement: Achievement) {
        let at = self
            .achievements
            .iter()
            .position(|existing| existing.timestamp <= achievement.timestamp)
            .unwrap_or(self.achievements.len());
        self.achievements.insert(at, achievement);
    }

    /// Hand out the next id sequence number
    pub(crate) fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
