//! Kudos - points, levels, and badges for team onboarding
//!
//! Kudos tracks a newcomer's progress as a ledger of points and badges,
//! levels the ledger up against a fixed threshold table, and records every
//! milestone as an achievement with matching notifications.
//!
//! ## Layers
//!
//! 1. **Progression (core)**: the `ProgressionEngine` applies point awards,
//!    badge grants, and simulated user actions to a shared ledger and reports
//!    the resulting effects.
//!
//! 2. **Notifications**: effects become toasts and notification-center
//!    records through the `Notifier` trait; the engine never talks to a
//!    terminal or database directly.
//!
//! 3. **Store**: `ProgressStore` persists the ledger, badges, achievements,
//!    and the notification backlog in SQLite.

pub mod config;
pub mod notify;
pub mod progression;
pub mod store;

pub use progression::*;
