//! Progression engine - core event processor
//!
//! Public entry points for awarding points, granting badges, and running
//! simulated actions. Every call takes the ledger lock once, so level-up
//! detection is atomic with the points increment. Side effects are not
//! performed here: each mutation returns the new Achievement plus the
//! notification effects for the caller to dispatch.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use thiserror::Error;

use crate::notify::{CenterRecord, Severity};

use super::achievement::{Achievement, AchievementKind};
use super::actions::{ActionReward, SimulatedAction};
use super::badges::{BadgeId, BadgeSpec};
use super::ledger::{Ledger, Seed};
use super::levels::{self, LevelTier};

/// Errors from engine operations
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("point award must be greater than zero")]
    ZeroPoints,
}

/// A notification the caller should dispatch
#[derive(Debug, Clone)]
pub enum Effect {
    /// Transient feedback line
    Toast { message: String, severity: Severity },
    /// Durable notification-center insertion
    Center(CenterRecord),
}

/// Result of a successful mutation: the new record plus its effects
#[derive(Debug, Clone)]
pub struct Outcome {
    pub achievement: Achievement,
    pub effects: Vec<Effect>,
}

/// Result of a badge award attempt
#[derive(Debug, Clone)]
pub enum BadgeAward {
    Granted(Outcome),
    AlreadyHeld,
    NotFound,
}

impl BadgeAward {
    /// Collapse to the outcome, dropping the failure reason
    pub fn granted(self) -> Option<Outcome> {
        match self {
            Self::Granted(outcome) => Some(outcome),
            Self::AlreadyHeld | Self::NotFound => None,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// Result of a recognized simulated action
#[derive(Debug, Clone)]
pub enum SimulationOutcome {
    Applied(Outcome),
    /// The action maps to a badge the ledger already holds
    AlreadyHeld(BadgeId),
}

/// Read-only stats snapshot
#[derive(Debug, Clone, Serialize)]
pub struct LedgerStats {
    pub points: u32,
    pub level: u32,
    pub title: String,
    /// Percent progress toward the next level, 100 at the top tier
    pub progress: u8,
    pub next_level_points: Option<u32>,
    pub badges: Vec<&'static BadgeSpec>,
}

/// Main entry point for all progression features
#[derive(Clone)]
pub struct ProgressionEngine {
    ledger: Arc<Mutex<Ledger>>,
}

impl ProgressionEngine {
    /// Engine over an empty ledger
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Engine over a freshly seeded ledger
    pub fn with_seed(seed: &Seed) -> Self {
        Self::from_ledger(Ledger::seeded(seed))
    }

    /// Engine over an existing ledger (e.g. reloaded from storage)
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Get current timestamp in milliseconds
    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    // ========================================
    // POINT OPERATIONS
    // ========================================

    /// Award points and check for a level up
    pub fn award_points(&self, amount: u32) -> Result<Outcome, ProgressionError> {
        if amount == 0 {
            return Err(ProgressionError::ZeroPoints);
        }
        Ok(self.grant_points(amount))
    }

    /// Add points, detect threshold crossings, record the achievement
    fn grant_points(&self, amount: u32) -> Outcome {
        let now = Self::now_ms();
        let mut ledger = self.ledger.lock().expect("ledger lock");
        let old_level = ledger.level();
        let total = ledger.add_points(amount);
        let tier = LevelTier::for_points(total);

        let seq = ledger.take_seq();
        let achievement = if tier.level > old_level {
            ledger.set_level(tier.level);
            Achievement::level_up(tier, now, seq)
        } else {
            Achievement::points(amount, now, seq)
        };
        ledger.push_achievement(achievement.clone());
        drop(ledger);

        let effects = effects_for(&achievement);
        Outcome {
            achievement,
            effects,
        }
    }

    // ========================================
    // BADGE OPERATIONS
    // ========================================

    /// Award a badge. At most once per ledger; re-awards report AlreadyHeld
    /// and mutate nothing.
    pub fn award_badge(&self, id: BadgeId) -> BadgeAward {
        let now = Self::now_ms();
        let mut ledger = self.ledger.lock().expect("ledger lock");
        if !ledger.insert_badge(id) {
            return BadgeAward::AlreadyHeld;
        }
        let seq = ledger.take_seq();
        let achievement = Achievement::badge(BadgeSpec::get(id), now, seq);
        ledger.push_achievement(achievement.clone());
        drop(ledger);

        let effects = effects_for(&achievement);
        BadgeAward::Granted(Outcome {
            achievement,
            effects,
        })
    }

    /// Award a badge by raw identifier; unknown ids report NotFound
    pub fn award_badge_named(&self, raw: &str) -> BadgeAward {
        match BadgeId::from_str(raw) {
            Some(id) => self.award_badge(id),
            None => BadgeAward::NotFound,
        }
    }

    // ========================================
    // SIMULATION
    // ========================================

    /// Run a named action through the dispatch table. Unknown names return
    /// None with no effect.
    pub fn simulate(&self, action: &str) -> Option<SimulationOutcome> {
        let action = SimulatedAction::from_str(action)?;
        match action.reward() {
            ActionReward::Points(amount) => {
                Some(SimulationOutcome::Applied(self.grant_points(amount)))
            }
            ActionReward::Badge(id) => match self.award_badge(id) {
                BadgeAward::Granted(outcome) => Some(SimulationOutcome::Applied(outcome)),
                BadgeAward::AlreadyHeld => Some(SimulationOutcome::AlreadyHeld(id)),
                // catalog-backed ids always resolve
                BadgeAward::NotFound => None,
            },
        }
    }

    // ========================================
    // READ-ONLY PROJECTIONS
    // ========================================

    /// Current stats snapshot. Never mutates.
    pub fn stats(&self) -> LedgerStats {
        let ledger = self.ledger.lock().expect("ledger lock");
        let tier = LevelTier::for_points(ledger.points());
        LedgerStats {
            points: ledger.points(),
            level: ledger.level(),
            title: tier.title.to_string(),
            progress: levels::progress_percent(ledger.points()),
            next_level_points: LevelTier::next_after(ledger.level()).map(|t| t.points_required),
            badges: ledger.badges().iter().map(|id| BadgeSpec::get(*id)).collect(),
        }
    }

    /// Achievement history, newest first
    pub fn achievements(&self) -> Vec<Achievement> {
        self.ledger
            .lock()
            .expect("ledger lock")
            .achievements()
            .to_vec()
    }

    /// Full ledger snapshot for the persistence layer
    pub fn ledger(&self) -> Ledger {
        self.ledger.lock().expect("ledger lock").clone()
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the notification effects for a freshly recorded achievement
fn effects_for(achievement: &Achievement) -> Vec<Effect> {
    let (message, severity) = match achievement.kind {
        AchievementKind::Level => (
            format!("{} {}", achievement.icon, achievement.title),
            Severity::Success,
        ),
        AchievementKind::Badge => (
            format!("{} Badge earned: {}", achievement.icon, achievement.title),
            Severity::Success,
        ),
        AchievementKind::Points => (
            format!("{} {}", achievement.icon, achievement.description),
            Severity::Info,
        ),
    };
    vec![
        Effect::Toast { message, severity },
        Effect::Center(CenterRecord::for_achievement(achievement)),
    ]
}
