//! Simulated user actions
//!
//! Fixed dispatch table mapping action names to a point grant or a badge
//! award. Convenience facade over the engine operations, no logic of its own.

use super::badges::BadgeId;

/// Actions the simulation facade understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedAction {
    CompleteTask,
    DailyLogin,
    AttendMeeting,
    FinishTraining,
    HelpOthers,
    JoinTeamEvent,
}

/// What an action pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionReward {
    Points(u32),
    Badge(BadgeId),
}

impl SimulatedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompleteTask => "complete_task",
            Self::DailyLogin => "daily_login",
            Self::AttendMeeting => "attend_meeting",
            Self::FinishTraining => "finish_training",
            Self::HelpOthers => "help_others",
            Self::JoinTeamEvent => "join_team_event",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "complete_task" => Some(Self::CompleteTask),
            "daily_login" => Some(Self::DailyLogin),
            "attend_meeting" => Some(Self::AttendMeeting),
            "finish_training" => Some(Self::FinishTraining),
            "help_others" => Some(Self::HelpOthers),
            "join_team_event" => Some(Self::JoinTeamEvent),
            _ => None,
        }
    }

    /// Human-readable description for listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::CompleteTask => "Complete an onboarding task",
            Self::DailyLogin => "Log in for the day",
            Self::AttendMeeting => "Attend a team meeting",
            Self::FinishTraining => "Finish a training module",
            Self::HelpOthers => "Help a teammate",
            Self::JoinTeamEvent => "Join a team event",
        }
    }

    /// Fixed payout for this action
    pub fn reward(&self) -> ActionReward {
        match self {
            Self::CompleteTask => ActionReward::Points(50),
            Self::DailyLogin => ActionReward::Points(10),
            Self::AttendMeeting => ActionReward::Points(25),
            Self::FinishTraining => ActionReward::Points(100),
            Self::HelpOthers => ActionReward::Badge(BadgeId::Helpful),
            Self::JoinTeamEvent => ActionReward::Badge(BadgeId::TeamPlayer),
        }
    }

    pub fn all() -> &'static [SimulatedAction] {
        &[
            Self::CompleteTask,
            Self::DailyLogin,
            Self::AttendMeeting,
            Self::FinishTraining,
            Self::HelpOthers,
            Self::JoinTeamEvent,
        ]
    }
}
