//! Notification boundary
//!
//! The engine never talks to a notification mechanism directly. It returns
//! effects, and `dispatch` hands them to whichever `Notifier` adapter the
//! caller plugged in. Adapters are fire-and-forget: failures stay inside
//! the adapter and are never propagated back into the engine.

use serde::Serialize;

use crate::progression::{Achievement, Effect};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Durable notification-center entry carrying a full achievement payload
#[derive(Debug, Clone, Serialize)]
pub struct CenterRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Achievement,
    pub read: bool,
}

impl CenterRecord {
    /// Build the center entry for a freshly recorded achievement
    pub fn for_achievement(achievement: &Achievement) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: achievement.title.clone(),
            message: achievement.description.clone(),
            timestamp: achievement.timestamp,
            kind: "achievement".to_string(),
            data: achievement.clone(),
            read: false,
        }
    }
}

/// Outbound notification collaborator
pub trait Notifier: Send + Sync {
    /// Transient feedback, fire-and-forget
    fn show(&self, message: &str, severity: Severity);

    /// Durable insertion into the notification center, fire-and-forget
    fn push_to_center(&self, record: &CenterRecord);
}

/// Hand a batch of engine effects to an adapter, in order
pub fn dispatch(notifier: &dyn Notifier, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Toast { message, severity } => notifier.show(message, *severity),
            Effect::Center(record) => notifier.push_to_center(record),
        }
    }
}

/// Adapter that writes everything to the tracing log. Default sink for
/// library consumers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!("{}", message),
            Severity::Success | Severity::Info => tracing::info!("{}", message),
        }
    }

    fn push_to_center(&self, record: &CenterRecord) {
        tracing::info!("notification center: {} [{}]", record.title, record.id);
    }
}
