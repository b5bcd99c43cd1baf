//! Badge catalog and metadata
//!
//! All awardable badges are defined here. The catalog is a closed set:
//! identifiers outside it are rejected by the award path.

use serde::{Deserialize, Serialize};

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    Helpful,
    FirstDay,
    TeamPlayer,
    QuickLearner,
    PerfectAttendance,
}

impl BadgeId {
    /// Get the string ID used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helpful => "helpful",
            Self::FirstDay => "first_day",
            Self::TeamPlayer => "team_player",
            Self::QuickLearner => "quick_learner",
            Self::PerfectAttendance => "perfect_attendance",
        }
    }

    /// Parse from a raw identifier string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "helpful" => Some(Self::Helpful),
            "first_day" => Some(Self::FirstDay),
            "team_player" => Some(Self::TeamPlayer),
            "quick_learner" => Some(Self::QuickLearner),
            "perfect_attendance" => Some(Self::PerfectAttendance),
            _ => None,
        }
    }

    /// Get all badge IDs
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::Helpful,
            Self::FirstDay,
            Self::TeamPlayer,
            Self::QuickLearner,
            Self::PerfectAttendance,
        ]
    }
}

/// Badge definition with display metadata
#[derive(Debug, Clone, Serialize)]
pub struct BadgeSpec {
    pub id: BadgeId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All badge definitions
pub static BADGES: &[BadgeSpec] = &[
    BadgeSpec {
        id: BadgeId::Helpful,
        title: "Helping Hand",
        description: "Helped a teammate through their onboarding",
        icon: "🤝",
    },
    BadgeSpec {
        id: BadgeId::FirstDay,
        title: "First Day",
        description: "Completed your first day on the team",
        icon: "🌅",
    },
    BadgeSpec {
        id: BadgeId::TeamPlayer,
        title: "Team Player",
        description: "Joined your first team event",
        icon: "👥",
    },
    BadgeSpec {
        id: BadgeId::QuickLearner,
        title: "Quick Learner",
        description: "Finished every training module in your first week",
        icon: "⚡",
    },
    BadgeSpec {
        id: BadgeId::PerfectAttendance,
        title: "Perfect Attendance",
        description: "Checked in every working day for a month",
        icon: "📅",
    },
];

impl BadgeSpec {
    /// Get badge metadata by ID
    pub fn get(id: BadgeId) -> &'static BadgeSpec {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }

    /// Get total number of badges in the catalog
    pub fn total_count() -> usize {
        BADGES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for id in BadgeId::all() {
            assert_eq!(BadgeId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert_eq!(BadgeId::from_str("nonexistent_badge"), None);
        assert_eq!(BadgeId::from_str(""), None);
        assert_eq!(BadgeId::from_str("Helpful"), None); // case-sensitive
    }

    #[test]
    fn test_every_id_has_metadata() {
        for id in BadgeId::all() {
            let spec = BadgeSpec::get(*id);
            assert_eq!(spec.id, *id);
            assert!(!spec.title.is_empty());
            assert!(!spec.description.is_empty());
        }
        assert_eq!(BadgeSpec::total_count(), BadgeId::all().len());
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&BadgeId::PerfectAttendance).unwrap();
        assert_eq!(json, "\"perfect_attendance\"");
        let back: BadgeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BadgeId::PerfectAttendance);
    }
}
