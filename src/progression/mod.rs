//! Onboarding progression module for Kudos
//!
//! Points, levels, badges, and the achievement history for one user,
//! held in an in-memory ledger behind a mutex.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   award_points / award_badge / simulate
//! │   Caller     │ ─────────────────────────────┐
//! └──────────────┘                              ▼
//!                                      ┌─────────────────┐
//!        TIERS ───► level lookup ───►  │ ProgressionEngine│
//!        BADGES ──► metadata ──────►   │  Arc<Mutex<Ledger>>
//!                                      └────────┬────────┘
//!                                               │ Outcome
//!                                               ▼
//!                               Achievement + notification effects
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let engine = ProgressionEngine::with_seed(&Seed::default());
//!
//! // Award points; a level-up is detected against the threshold table
//! let outcome = engine.award_points(300)?;
//! notify::dispatch(&notifier, &outcome.effects);
//!
//! // Badges are at-most-once per ledger
//! if let BadgeAward::Granted(outcome) = engine.award_badge(BadgeId::Helpful) {
//!     notify::dispatch(&notifier, &outcome.effects);
//! }
//! ```

mod achievement;
mod actions;
mod badges;
mod engine;
mod ledger;
mod levels;

pub use achievement::{Achievement, AchievementKind, AchievementValue};
pub use actions::{ActionReward, SimulatedAction};
pub use badges::{BadgeId, BadgeSpec, BADGES};
pub use engine::{
    BadgeAward, Effect, LedgerStats, Outcome, ProgressionEngine, ProgressionError,
    SimulationOutcome,
};
pub use ledger::{Ledger, Seed};
pub use levels::{progress_percent, LevelTier, TIERS};
