//! Achievement records
//!
//! One immutable record per progression event: points earned, a badge
//! unlocked, or a level reached. Ids embed a per-ledger sequence counter
//! so two events in the same millisecond still get distinct ids.

use serde::Serialize;

use super::badges::{BadgeId, BadgeSpec};
use super::levels::LevelTier;

/// Category of a progression event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Points,
    Badge,
    Level,
}

impl AchievementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Badge => "badge",
            Self::Level => "level",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "points" => Some(Self::Points),
            "badge" => Some(Self::Badge),
            "level" => Some(Self::Level),
            _ => None,
        }
    }
}

/// Event payload, polymorphic over kind. Serialized untagged: a raw
/// number for points and levels, the badge id string for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AchievementValue {
    Points(u32),
    Level(u32),
    Badge(BadgeId),
}

impl AchievementValue {
    /// Flat string form used for the storage column
    pub fn storage_key(&self) -> String {
        match self {
            Self::Points(n) | Self::Level(n) => n.to_string(),
            Self::Badge(id) => id.as_str().to_string(),
        }
    }
}

/// An immutable progression event record
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: String,
    pub kind: AchievementKind,
    pub title: String,
    pub description: String,
    pub value: AchievementValue,
    pub icon: String,
    pub timestamp: i64,
}

impl Achievement {
    /// Record for points earned without a level change
    pub fn points(amount: u32, timestamp: i64, seq: u64) -> Self {
        Self {
            id: format!("points-{timestamp}-{seq}"),
            kind: AchievementKind::Points,
            title: "Points Earned".to_string(),
            description: format!("You earned {amount} points"),
            value: AchievementValue::Points(amount),
            icon: "⭐".to_string(),
            timestamp,
        }
    }

    /// Record for reaching a new tier
    pub fn level_up(tier: &LevelTier, timestamp: i64, seq: u64) -> Self {
        Self {
            id: format!("level-{timestamp}-{seq}"),
            kind: AchievementKind::Level,
            title: format!("Level Up! You're now {}", tier.title),
            description: format!("Congratulations! You reached level {}", tier.level),
            value: AchievementValue::Level(tier.level),
            icon: "🎉".to_string(),
            timestamp,
        }
    }

    /// Record for a newly earned badge, metadata copied from the catalog
    pub fn badge(spec: &BadgeSpec, timestamp: i64, seq: u64) -> Self {
        Self {
            id: format!("badge-{}-{timestamp}-{seq}", spec.id.as_str()),
            kind: AchievementKind::Badge,
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            value: AchievementValue::Badge(spec.id),
            icon: spec.icon.to_string(),
            timestamp,
        }
    }

    /// Rebuild a record from its stored columns. Returns None when the
    /// kind or value column no longer parses against the catalogs.
    pub fn from_stored(
        id: String,
        kind: &str,
        title: String,
        description: String,
        value: &str,
        icon: String,
        timestamp: i64,
    ) -> Option<Self> {
        let kind = AchievementKind::from_str(kind)?;
        let value = match kind {
            AchievementKind::Points => AchievementValue::Points(value.parse().ok()?),
            AchievementKind::Level => AchievementValue::Level(value.parse().ok()?),
            AchievementKind::Badge => AchievementValue::Badge(BadgeId::from_str(value)?),
        };
        Some(Self {
            id,
            kind,
            title,
            description,
            value,
            icon,
            timestamp,
        })
    }
}
